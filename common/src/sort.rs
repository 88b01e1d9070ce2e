//! 상품 목록 정렬

use crate::types::{Product, SortMode};
use std::cmp::Ordering;

/// 정렬 기준에 따른 비교 함수
pub fn compare(mode: SortMode, a: &Product, b: &Product) -> Ordering {
    match mode {
        SortMode::AiRecommended => b.ai_score.total_cmp(&a.ai_score),
        SortMode::Newest => b.created_at.cmp(&a.created_at),
        SortMode::Nearest => a.distance_km.total_cmp(&b.distance_km),
    }
}

/// 정렬된 새 목록을 돌려준다
///
/// 안정 정렬이므로 키가 같은 상품은 입력 순서를 유지한다.
pub fn sort_products(products: &[Product], mode: SortMode) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sort_in_place(&mut sorted, mode);
    sorted
}

pub fn sort_in_place(products: &mut [Product], mode: SortMode) {
    products.sort_by(|a, b| compare(mode, a, b));
}
