//! 상품 목록 타입 정의
//!
//! CLI와 저장소가 공유하는 타입:
//! - Product: 공동구매 상품 한 건
//! - SortMode: 목록 정렬 기준 (AI 추천 / 최신순 / 거리순)

use crate::error::{Error, Result};
use crate::price::Participants;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 공동구매 상품
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,

    pub name: String,

    /// 총 가격 ("9,170원" 형식)
    pub price_total: String,

    /// 참여 인원 ("현재/전체" 형식)
    pub participants: String,

    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub distance_km: f64,

    #[serde(default)]
    pub ai_score: f64,
}

impl Product {
    /// 참여 인원 문자열을 파싱
    pub fn participants(&self) -> Result<Participants> {
        Participants::parse(&self.participants)
    }

    /// 1인당 가격 (주최자 제외)
    pub fn per_person_price(&self) -> Result<String> {
        crate::price::per_person_price(&self.price_total, &self.participants)
    }
}

/// 목록 정렬 기준
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// AI 추천 (aiScore 내림차순)
    #[default]
    AiRecommended,
    /// 최신순 (createdAt 내림차순)
    Newest,
    /// 거리순 (distanceKm 오름차순)
    Nearest,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::AiRecommended, SortMode::Newest, SortMode::Nearest];

    /// 화면에 표시되는 필터 라벨
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::AiRecommended => "AI 추천",
            SortMode::Newest => "최신순",
            SortMode::Nearest => "거리순",
        }
    }

    /// 필터 라벨 또는 영문 별칭에서 정렬 기준을 얻는다
    pub fn from_label(label: &str) -> Result<Self> {
        let trimmed = label.trim();
        if let Some(mode) = Self::ALL.iter().find(|m| m.label() == trimmed) {
            return Ok(*mode);
        }

        match trimmed.to_lowercase().replace([' ', '-'], "_").as_str() {
            "ai" | "ai_추천" | "ai_recommended" | "recommended" => Ok(SortMode::AiRecommended),
            "newest" | "latest" | "new" => Ok(SortMode::Newest),
            "nearest" | "distance" | "near" => Ok(SortMode::Nearest),
            _ => Err(Error::InvalidFormat(format!(
                "알 수 없는 정렬 기준: {} (AI 추천/최신순/거리순)",
                label
            ))),
        }
    }
}

impl std::str::FromStr for SortMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s)
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
