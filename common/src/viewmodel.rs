//! 목록 화면 뷰모델
//!
//! 정렬 필터와 찜 상태를 전역 상태 대신 명시적인 객체로 들고 다닌다.

use crate::error::Result;
use crate::price::Participants;
use crate::repository::{ListingFilter, ProductRepository};
use crate::types::{Product, SortMode};
use serde::Serialize;

/// 목록 한 줄
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRow {
    #[serde(flatten)]
    pub product: Product,
    /// 1인당 가격 (형식이 잘못된 상품은 None)
    pub price_per_person: Option<String>,
    pub remaining: Option<u32>,
    pub liked: bool,
}

impl ListingRow {
    fn build(product: Product, liked: bool) -> Self {
        let price_per_person = match product.per_person_price() {
            Ok(price) => Some(price),
            Err(e) => {
                tracing::warn!(id = product.id, error = %e, "1인당 가격을 계산할 수 없습니다");
                None
            }
        };
        let remaining = product.participants().ok().map(|p: Participants| p.remaining());

        Self {
            product,
            price_per_person,
            remaining,
            liked,
        }
    }
}

/// 목록 화면 상태
#[derive(Debug)]
pub struct ListingViewModel<R> {
    repo: R,
    filter: ListingFilter,
}

impl<R: ProductRepository> ListingViewModel<R> {
    pub fn new(repo: R) -> Self {
        Self::with_filter(repo, ListingFilter::default())
    }

    pub fn with_filter(repo: R, filter: ListingFilter) -> Self {
        Self { repo, filter }
    }

    pub fn filter(&self) -> &ListingFilter {
        &self.filter
    }

    pub fn sort_mode(&self) -> SortMode {
        self.filter.sort
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.filter.sort = mode;
    }

    /// 필터 라벨("AI 추천"/"최신순"/"거리순") 선택
    pub fn select_label(&mut self, label: &str) -> Result<()> {
        self.filter.sort = SortMode::from_label(label)?;
        Ok(())
    }

    pub fn set_keyword(&mut self, keyword: Option<String>) {
        self.filter.keyword = keyword;
    }

    pub fn set_liked_only(&mut self, liked_only: bool) {
        self.filter.liked_only = liked_only;
    }

    pub fn set_max_distance(&mut self, max_distance_km: Option<f64>) {
        self.filter.max_distance_km = max_distance_km;
    }

    /// 현재 조건으로 목록을 만든다
    pub fn rows(&self) -> Result<Vec<ListingRow>> {
        let liked = self.repo.liked();
        let rows = self
            .repo
            .list(&self.filter)?
            .into_iter()
            .map(|product| {
                let is_liked = liked.contains(product.id);
                ListingRow::build(product, is_liked)
            })
            .collect();
        Ok(rows)
    }

    pub fn toggle_like(&mut self, id: u64) -> Result<bool> {
        self.repo.toggle_like(id)
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn into_repository(self) -> R {
        self.repo
    }
}
