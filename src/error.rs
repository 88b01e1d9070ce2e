use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroupBuyError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("데이터 파일이 이미 있습니다: {0} (덮어쓰려면 --force)")]
    DataFileExists(String),

    #[error("데이터 파일 버전이 맞지 않습니다: {found} (지원: {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("로그 초기화 실패: {0}")]
    Logging(String),

    #[error(transparent)]
    Listing(#[from] groupbuy_common::Error),

    #[error("JSON 파싱 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GroupBuyError>;
