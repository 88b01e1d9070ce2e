//! 데이터 파일 저장소 테스트
//!
//! JSON 파일 저장소의 로드・저장・찜 유지를 검증

use groupbuy_common::demo::demo_products;
use groupbuy_common::{ListingFilter, ProductRepository, SortMode};
use groupbuy_rust::error::GroupBuyError;
use groupbuy_rust::store::JsonFileRepository;
use tempfile::tempdir;

/// 파일이 없으면 빈 저장소
#[test]
fn test_open_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let repo = JsonFileRepository::open(&dir.path().join("products.json")).unwrap();

    assert!(repo.is_empty());
    assert!(repo.list(&ListingFilter::default()).unwrap().is_empty());
}

/// 생성 후 다시 열기
#[test]
fn test_create_and_reopen() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("data").join("products.json");

    let created = JsonFileRepository::create(&path, demo_products(), false).unwrap();
    assert_eq!(created.len(), 10);
    assert!(path.exists());

    let reopened = JsonFileRepository::open(&path).unwrap();
    assert_eq!(reopened.len(), 10);
    assert_eq!(reopened.get(1).unwrap().name, created.get(1).unwrap().name);
}

/// 기존 파일은 --force 없이 덮어쓰지 않는다
#[test]
fn test_create_refuses_existing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("products.json");

    JsonFileRepository::create(&path, demo_products(), false).unwrap();
    let err = JsonFileRepository::create(&path, vec![], false).unwrap_err();
    assert!(matches!(err, GroupBuyError::DataFileExists(_)));

    let repo = JsonFileRepository::create(&path, vec![], true).unwrap();
    assert!(repo.is_empty());
}

/// 찜 상태는 파일에 남는다
#[test]
fn test_like_persists_across_reload() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("products.json");
    JsonFileRepository::create(&path, demo_products(), false).unwrap();

    let mut repo = JsonFileRepository::open(&path).unwrap();
    assert!(repo.toggle_like(3).unwrap());
    assert!(repo.toggle_like(7).unwrap());

    let reopened = JsonFileRepository::open(&path).unwrap();
    assert!(reopened.liked().contains(3));
    assert!(reopened.liked().contains(7));

    let filter = ListingFilter {
        liked_only: true,
        sort: SortMode::Nearest,
        ..Default::default()
    };
    let ids: Vec<u64> = reopened.list(&filter).unwrap().iter().map(|p| p.id).collect();
    // 7: 1.1km, 3: 2.7km
    assert_eq!(ids, vec![7, 3]);
}

/// 두 번 토글하면 원래대로
#[test]
fn test_like_toggle_twice() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("products.json");
    let mut repo = JsonFileRepository::create(&path, demo_products(), false).unwrap();

    assert!(repo.toggle_like(5).unwrap());
    assert!(!repo.toggle_like(5).unwrap());

    let reopened = JsonFileRepository::open(&path).unwrap();
    assert!(reopened.liked().is_empty());
}

/// 없는 상품은 찜할 수 없다
#[test]
fn test_like_unknown_product() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("products.json");
    let mut repo = JsonFileRepository::create(&path, demo_products(), false).unwrap();

    let err = repo.toggle_like(404).unwrap_err();
    assert!(matches!(err, groupbuy_common::Error::ProductNotFound(404)));
}

/// 손으로 쓴 데이터 파일 (목록에 없는 찜 ID는 정리)
#[test]
fn test_open_hand_written_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("products.json");
    std::fs::write(
        &path,
        r#"{
            "version": 1,
            "products": [
                {"id": 1, "name": "생수", "priceTotal": "6,420원", "participants": "0/2",
                 "createdAt": "2024-05-02T12:30:00Z", "distanceKm": 0.3, "aiScore": 0.6},
                {"id": 2, "name": "감귤", "priceTotal": "9,170원", "participants": "1/3",
                 "createdAt": "2024-05-03T08:00:00Z", "distanceKm": 1.5, "aiScore": 0.9}
            ],
            "liked": [2, 99]
        }"#,
    )
    .unwrap();

    let repo = JsonFileRepository::open(&path).unwrap();
    assert_eq!(repo.len(), 2);
    assert_eq!(repo.liked().iter().collect::<Vec<_>>(), vec![2]);

    let newest: Vec<u64> = repo
        .list(&ListingFilter::sorted_by(SortMode::Newest))
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(newest, vec![2, 1]);
}

/// 깨진 파일은 빈 목록으로 취급
#[test]
fn test_open_corrupt_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("products.json");
    std::fs::write(&path, "{ not json").unwrap();

    let repo = JsonFileRepository::open(&path).unwrap();
    assert!(repo.is_empty());
}

/// 버전이 다르면 에러
#[test]
fn test_open_unsupported_version() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("products.json");
    std::fs::write(&path, r#"{"version": 2, "products": [], "liked": []}"#).unwrap();

    let err = JsonFileRepository::open(&path).unwrap_err();
    assert!(matches!(
        err,
        GroupBuyError::UnsupportedVersion { found: 2, expected: 1 }
    ));
}

/// 쓰기 실패(디스크 가득 참)는 에러로 돌아온다
#[cfg(target_os = "linux")]
#[test]
fn test_create_reports_write_failure() {
    let result = JsonFileRepository::create(std::path::Path::new("/dev/full"), demo_products(), true);
    assert!(matches!(result, Err(GroupBuyError::Listing(_))));
}

/// 저장에 실패하면 찜 상태는 그대로
#[test]
fn test_like_rolls_back_when_save_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("products.json");
    let mut repo = JsonFileRepository::create(&path, demo_products(), false).unwrap();

    // 데이터 파일 자리에 디렉터리를 두어 저장이 실패하게 한다
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();

    let err = repo.toggle_like(1).unwrap_err();
    assert!(matches!(err, groupbuy_common::Error::Io(_)));
    assert!(!repo.liked().contains(1));
    assert!(repo.liked().is_empty());
}
