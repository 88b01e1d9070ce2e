use clap::{Parser, Subcommand};
use groupbuy_common::SortMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "groupbuy")]
#[command(about = "공동구매 상품 목록 정렬・1인당 가격 계산 도구", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 상품 데이터 파일 (기본: ~/.config/groupbuy/products.json)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 상품 목록 표시
    List {
        /// 정렬 기준 (AI 추천/최신순/거리순, ai/newest/nearest)
        #[arg(short, long)]
        sort: Option<SortMode>,

        /// 상품명 키워드
        #[arg(short, long)]
        keyword: Option<String>,

        /// 찜한 상품만
        #[arg(long)]
        liked_only: bool,

        /// 최대 거리 (km)
        #[arg(long, value_parser = parse_distance)]
        max_distance: Option<f64>,

        /// JSON으로 출력
        #[arg(long)]
        json: bool,

        /// 데이터 파일 대신 내장 데모 데이터 사용
        #[arg(long)]
        demo: bool,
    },

    /// 1인당 가격 계산 (주최자 제외)
    Price {
        /// 총 가격 (예: "9,170원")
        #[arg(required = true)]
        total: String,

        /// 참여 인원 (예: "1/3")
        #[arg(required = true)]
        participants: String,
    },

    /// 찜 토글
    Like {
        #[arg(required = true)]
        id: u64,
    },

    /// 상품 상세
    Show {
        #[arg(required = true)]
        id: u64,
    },

    /// 데모 데이터로 데이터 파일 생성
    Init {
        /// 기존 파일 덮어쓰기
        #[arg(long)]
        force: bool,
    },

    /// 설정 표시/편집
    Config {
        /// 데이터 파일 경로 설정
        #[arg(long)]
        set_data_path: Option<PathBuf>,

        /// 기본 정렬 기준 설정
        #[arg(long)]
        set_default_sort: Option<SortMode>,

        /// 설정 표시
        #[arg(long)]
        show: bool,
    },
}

/// 0 이상의 유한한 거리만 허용
fn parse_distance(s: &str) -> Result<f64, String> {
    let value: f64 = s.trim().parse().map_err(|_| format!("숫자가 아닙니다: {}", s))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("거리는 0 이상의 유한한 값이어야 합니다: {}", s));
    }
    Ok(value)
}
