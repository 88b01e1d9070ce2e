//! 데모 상품 데이터
//!
//! 백엔드가 없을 때 목록 화면에 채워 넣는 더미 상품들.

use crate::types::Product;
use chrono::{DateTime, Duration, Utc};

/// (이름, 총 가격, 참여 인원, 몇 분 전, 거리 km, AI 점수)
const DEMO_ROWS: [(&str, &str, &str, i64, f64, f64); 10] = [
    ("제주 감귤 5kg 나눠요", "9,170원", "1/3", 35, 0.8, 0.91),
    ("생수 2L x 12병", "6,420원", "0/2", 5, 0.3, 0.64),
    ("Costco 베이글 12입", "11,990원", "2/4", 180, 2.7, 0.88),
    ("대용량 세탁세제 4L", "15,800원", "1/2", 60 * 26, 1.4, 0.47),
    ("유기농 계란 30구", "12,900원", "2/3", 12, 0.6, 0.73),
    ("키친타월 12롤", "13,500원", "3/4", 60 * 5, 3.9, 0.35),
    ("냉동 닭가슴살 2kg", "21,000원", "1/4", 90, 1.1, 0.82),
    ("성주 참외 3kg", "17,400원", "0/3", 60 * 50, 4.6, 0.58),
    ("코스트코 크루아상 12입", "8,990원", "1/2", 240, 2.2, 0.77),
    ("두루마리 휴지 30롤", "19,900원", "4/5", 60 * 8, 0.9, 0.29),
];

/// 현재 시각 기준 데모 상품
pub fn demo_products() -> Vec<Product> {
    demo_products_at(Utc::now())
}

/// 기준 시각을 지정한 데모 상품
pub fn demo_products_at(now: DateTime<Utc>) -> Vec<Product> {
    DEMO_ROWS
        .iter()
        .enumerate()
        .map(|(i, &(name, price, participants, minutes_ago, distance_km, ai_score))| Product {
            id: i as u64 + 1,
            name: name.to_string(),
            price_total: price.to_string(),
            participants: participants.to_string(),
            created_at: now - Duration::minutes(minutes_ago),
            distance_km,
            ai_score,
        })
        .collect()
}
