//! 목록 출력 형식

use chrono::{DateTime, Utc};
use groupbuy_common::ListingRow;

/// 등록 시각을 "N분 전" 형식으로
pub fn format_elapsed(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);
    let minutes = elapsed.num_minutes();

    if minutes < 1 {
        "방금 전".to_string()
    } else if minutes < 60 {
        format!("{}분 전", minutes)
    } else if elapsed.num_hours() < 24 {
        format!("{}시간 전", elapsed.num_hours())
    } else {
        format!("{}일 전", elapsed.num_days())
    }
}

/// 목록 한 줄
pub fn format_row(row: &ListingRow, now: DateTime<Utc>) -> String {
    let product = &row.product;
    let heart = if row.liked { "♥" } else { "♡" };
    let per_person = row.price_per_person.as_deref().unwrap_or("-");

    format!(
        "{} [{}] {} | {} (1인 {}) | {}명 | {:.1}km | {}",
        heart,
        product.id,
        product.name,
        product.price_total,
        per_person,
        product.participants,
        product.distance_km,
        format_elapsed(product.created_at, now),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use groupbuy_common::Product;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_format_elapsed() {
        let now = now();
        assert_eq!(format_elapsed(now, now), "방금 전");
        assert_eq!(format_elapsed(now - Duration::minutes(35), now), "35분 전");
        assert_eq!(format_elapsed(now - Duration::hours(5), now), "5시간 전");
        assert_eq!(format_elapsed(now - Duration::hours(50), now), "2일 전");
    }

    #[test]
    fn test_format_elapsed_future_timestamp() {
        let now = now();
        assert_eq!(format_elapsed(now + Duration::minutes(10), now), "방금 전");
    }

    #[test]
    fn test_format_row() {
        let row = ListingRow {
            product: Product {
                id: 1,
                name: "제주 감귤 5kg".to_string(),
                price_total: "9,170원".to_string(),
                participants: "1/3".to_string(),
                created_at: now() - Duration::minutes(35),
                distance_km: 0.8,
                ai_score: 0.91,
            },
            price_per_person: Some("4,585원".to_string()),
            remaining: Some(2),
            liked: true,
        };

        assert_eq!(
            format_row(&row, now()),
            "♥ [1] 제주 감귤 5kg | 9,170원 (1인 4,585원) | 1/3명 | 0.8km | 35분 전"
        );
    }
}
