//! Group-buy Common Library
//!
//! 공동구매 상품 목록의 정렬・1인당 가격 계산・찜 토글

pub mod types;
pub mod error;
pub mod price;
pub mod sort;
pub mod likes;
pub mod repository;
pub mod viewmodel;
pub mod demo;

pub use types::{Product, SortMode};
pub use error::{Error, Result};
pub use price::{Participants, format_won, parse_price, per_person_price};
pub use sort::sort_products;
pub use likes::{LikedSet, toggle_like};
pub use repository::{InMemoryRepository, ListingFilter, ProductRepository};
pub use viewmodel::{ListingRow, ListingViewModel};
