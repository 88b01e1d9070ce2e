use crate::error::{GroupBuyError, Result};
use groupbuy_common::SortMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DATA_FILE_NAME: &str = "products.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// 상품 데이터 파일 (없으면 설정 디렉터리의 products.json)
    pub data_path: Option<PathBuf>,
    pub default_sort: SortMode,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "설정 파일 로드");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GroupBuyError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("groupbuy"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// 사용할 데이터 파일 경로 (명령줄 지정 > 설정 > 기본값)
    pub fn resolve_data_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path.to_path_buf());
        }
        match &self.data_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join(DATA_FILE_NAME)),
        }
    }

    pub fn set_data_path(&mut self, path: PathBuf) -> Result<()> {
        self.data_path = Some(path);
        self.save()
    }

    pub fn set_default_sort(&mut self, mode: SortMode) -> Result<()> {
        self.default_sort = mode;
        self.save()
    }
}
