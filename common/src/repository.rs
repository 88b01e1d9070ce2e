//! 상품 저장소 추상화
//!
//! 실제 백엔드 API가 없으므로 `ProductRepository` 트레이트 뒤에
//! 메모리 목업(`InMemoryRepository`)과 파일 저장소(CLI 쪽)를 둔다.

use crate::error::{Error, Result};
use crate::likes::LikedSet;
use crate::sort::sort_in_place;
use crate::types::{Product, SortMode};

/// 목록 조회 조건
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    pub sort: SortMode,
    /// 상품명에 포함되어야 하는 키워드 (대소문자 무시)
    pub keyword: Option<String>,
    /// 찜한 상품만
    pub liked_only: bool,
    /// 최대 거리 (km)
    pub max_distance_km: Option<f64>,
}

impl ListingFilter {
    pub fn sorted_by(sort: SortMode) -> Self {
        Self {
            sort,
            ..Default::default()
        }
    }

    fn accepts(&self, product: &Product, liked: &LikedSet) -> bool {
        if self.liked_only && !liked.contains(product.id) {
            return false;
        }

        if let Some(max) = self.max_distance_km {
            // NaN 상한은 아무것도 통과시키지 않는다
            if !(product.distance_km <= max) {
                return false;
            }
        }

        match self.keyword.as_deref().map(str::trim) {
            Some(keyword) if !keyword.is_empty() => product
                .name
                .to_lowercase()
                .contains(&keyword.to_lowercase()),
            _ => true,
        }
    }
}

/// 조건에 맞는 상품을 골라 정렬
pub fn apply_filter(products: &[Product], liked: &LikedSet, filter: &ListingFilter) -> Vec<Product> {
    let mut selected: Vec<Product> = products
        .iter()
        .filter(|p| filter.accepts(p, liked))
        .cloned()
        .collect();

    sort_in_place(&mut selected, filter.sort);
    selected
}

/// 상품 저장소
pub trait ProductRepository {
    /// 조건에 맞는 상품 목록
    fn list(&self, filter: &ListingFilter) -> Result<Vec<Product>>;

    /// ID로 상품 조회
    fn get(&self, id: u64) -> Result<Product>;

    /// 찜 토글. 토글 후 찜 상태를 돌려준다
    fn toggle_like(&mut self, id: u64) -> Result<bool>;

    fn liked(&self) -> &LikedSet;
}

/// 메모리 목업 저장소
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    products: Vec<Product>,
    liked: LikedSet,
}

impl InMemoryRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            liked: LikedSet::new(),
        }
    }

    /// 내장 데모 데이터로 초기화
    pub fn with_demo_data() -> Self {
        Self::new(crate::demo::demo_products())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl ProductRepository for InMemoryRepository {
    fn list(&self, filter: &ListingFilter) -> Result<Vec<Product>> {
        Ok(apply_filter(&self.products, &self.liked, filter))
    }

    fn get(&self, id: u64) -> Result<Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(Error::ProductNotFound(id))
    }

    fn toggle_like(&mut self, id: u64) -> Result<bool> {
        if !self.products.iter().any(|p| p.id == id) {
            return Err(Error::ProductNotFound(id));
        }

        let liked = self.liked.toggle_in_place(id);
        tracing::debug!(id, liked, "찜 토글");
        Ok(liked)
    }

    fn liked(&self) -> &LikedSet {
        &self.liked
    }
}
