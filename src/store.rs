//! JSON 파일 상품 저장소
//!
//! 상품 목록과 찜 목록을 하나의 JSON 문서로 보관한다.
//! 찜을 토글할 때마다 파일에 다시 쓴다.

use crate::error::{GroupBuyError, Result};
use groupbuy_common::repository::apply_filter;
use groupbuy_common::{LikedSet, ListingFilter, Product, ProductRepository};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// 데이터 파일의 구조
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DataFile {
    /// 버전 (호환성 확인용)
    version: u32,
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    liked: LikedSet,
}

#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
    products: Vec<Product>,
    liked: LikedSet,
}

impl JsonFileRepository {
    pub const CURRENT_VERSION: u32 = 1;

    /// 데이터 파일을 연다
    ///
    /// - 파일이 없으면 빈 저장소
    /// - 파싱할 수 없으면 경고 후 빈 저장소
    /// - 버전이 다르면 에러
    pub fn open(path: &Path) -> Result<Self> {
        let mut repo = Self {
            path: path.to_path_buf(),
            products: Vec::new(),
            liked: LikedSet::new(),
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "데이터 파일 없음, 빈 목록으로 시작");
            return Ok(repo);
        }

        let reader = BufReader::new(File::open(path)?);
        let data: DataFile = match serde_json::from_reader(reader) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "데이터 파일을 읽을 수 없습니다, 빈 목록으로 시작");
                return Ok(repo);
            }
        };

        if data.version != Self::CURRENT_VERSION {
            return Err(GroupBuyError::UnsupportedVersion {
                found: data.version,
                expected: Self::CURRENT_VERSION,
            });
        }

        repo.products = data.products;
        repo.liked = data.liked;

        let before = repo.liked.len();
        let products = &repo.products;
        repo.liked.retain_known(|id| products.iter().any(|p| p.id == id));
        if repo.liked.len() != before {
            tracing::debug!(dropped = before - repo.liked.len(), "없는 상품의 찜 정리");
        }

        tracing::debug!(path = %path.display(), products = repo.products.len(), "데이터 파일 로드");
        Ok(repo)
    }

    /// 상품 목록으로 새 데이터 파일을 만든다
    pub fn create(path: &Path, products: Vec<Product>, force: bool) -> Result<Self> {
        if path.exists() && !force {
            return Err(GroupBuyError::DataFileExists(path.display().to_string()));
        }

        let repo = Self {
            path: path.to_path_buf(),
            products,
            liked: LikedSet::new(),
        };
        repo.save()?;
        Ok(repo)
    }

    /// 데이터 파일에 저장
    pub fn save(&self) -> groupbuy_common::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let data = DataFile {
            version: Self::CURRENT_VERSION,
            products: self.products.clone(),
            liked: self.liked.clone(),
        };

        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, &data)?;
        writer.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductRepository for JsonFileRepository {
    fn list(&self, filter: &ListingFilter) -> groupbuy_common::Result<Vec<Product>> {
        Ok(apply_filter(&self.products, &self.liked, filter))
    }

    fn get(&self, id: u64) -> groupbuy_common::Result<Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(groupbuy_common::Error::ProductNotFound(id))
    }

    fn toggle_like(&mut self, id: u64) -> groupbuy_common::Result<bool> {
        if !self.products.iter().any(|p| p.id == id) {
            return Err(groupbuy_common::Error::ProductNotFound(id));
        }

        let liked = self.liked.toggle_in_place(id);
        if let Err(e) = self.save() {
            // 저장 실패 시 메모리 상태도 되돌린다
            self.liked.toggle_in_place(id);
            return Err(e);
        }
        tracing::info!(id, liked, path = %self.path.display(), "찜 상태 저장");
        Ok(liked)
    }

    fn liked(&self) -> &LikedSet {
        &self.liked
    }
}
