//! 에러 타입 정의

use thiserror::Error;

/// 공통 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    #[error("형식 오류: {0}")]
    InvalidFormat(String),

    #[error("계산할 수 없는 입력: {0}")]
    DegenerateInput(String),

    #[error("상품을 찾을 수 없습니다: id={0}")]
    ProductNotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_format() {
        let error = Error::InvalidFormat("참여 인원 \"3\"".to_string());
        assert_eq!(format!("{}", error), "형식 오류: 참여 인원 \"3\"");
    }

    #[test]
    fn test_error_display_product_not_found() {
        let error = Error::ProductNotFound(42);
        let display = format!("{}", error);
        assert!(display.contains("id=42"));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(format!("{}", error).contains("access denied"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::DegenerateInput("0/0".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("DegenerateInput"));
        assert!(debug.contains("0/0"));
    }
}
