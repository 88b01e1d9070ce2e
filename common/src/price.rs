//! 1인당 가격 계산
//!
//! 총 가격을 주최자를 제외한 인원으로 나눈다.
//! 예: "9,170원", "1/3" → 9170 / (3 - 1) = "4,585원"

use crate::error::{Error, Result};
use regex::Regex;

/// 통화 접미사
pub const CURRENCY_SUFFIX: &str = "원";

/// 참여 인원 ("현재/전체")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Participants {
    pub current: u32,
    pub total: u32,
}

impl Participants {
    /// "2/3" 형식의 문자열을 파싱
    ///
    /// - 구분자 `/`가 없거나 숫자가 아니면 `InvalidFormat`
    /// - 현재 인원이 전체보다 많으면 `InvalidFormat`
    /// - 전체 인원이 0이면 `DegenerateInput`
    pub fn parse(text: &str) -> Result<Self> {
        lazy_static::lazy_static! {
            static ref RATIO_RE: Regex = Regex::new(r"^\s*(\d+)\s*/\s*(\d+)\s*$").unwrap();
        }

        let caps = RATIO_RE
            .captures(text)
            .ok_or_else(|| Error::InvalidFormat(format!("참여 인원 \"{}\"", text)))?;

        let current: u32 = caps[1]
            .parse()
            .map_err(|_| Error::InvalidFormat(format!("참여 인원 \"{}\"", text)))?;
        let total: u32 = caps[2]
            .parse()
            .map_err(|_| Error::InvalidFormat(format!("참여 인원 \"{}\"", text)))?;

        if total == 0 {
            return Err(Error::DegenerateInput(format!("전체 인원이 0명입니다: \"{}\"", text)));
        }
        if current > total {
            return Err(Error::InvalidFormat(format!(
                "현재 인원이 전체 인원보다 많습니다: \"{}\"",
                text
            )));
        }

        Ok(Self { current, total })
    }

    /// 남은 자리 수
    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.current)
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.total
    }

    /// 가격을 나눌 인원 (주최자 제외, 최소 1명)
    fn payers(&self) -> u64 {
        u64::from(self.total.saturating_sub(1).max(1))
    }
}

impl std::fmt::Display for Participants {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.total)
    }
}

/// 가격 문자열에서 숫자만 남겨 정수로 변환
///
/// `"9,170원"` → `9170`
pub fn parse_price(text: &str) -> Result<u64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(Error::InvalidFormat(format!("가격 \"{}\"", text)));
    }

    digits
        .parse()
        .map_err(|_| Error::InvalidFormat(format!("가격이 너무 큽니다: \"{}\"", text)))
}

/// 총 가격을 인원으로 나누고 반올림
///
/// 전체 인원이 1명(주최자 단독)이면 총 가격을 그대로 돌려준다.
pub fn allocate(price: u64, participants: &Participants) -> u64 {
    let payers = u128::from(participants.payers());
    let rounded = (u128::from(price) + payers / 2) / payers;
    rounded as u64
}

/// 천 단위 구분 기호와 통화 접미사를 붙인다
///
/// `4585` → `"4,585원"`
pub fn format_won(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + CURRENCY_SUFFIX.len());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push_str(CURRENCY_SUFFIX);
    out
}

/// 1인당 가격을 계산해 표시용 문자열로 돌려준다
///
/// # Examples
/// ```
/// use groupbuy_common::per_person_price;
///
/// assert_eq!(per_person_price("9,170원", "1/3").unwrap(), "4,585원");
/// assert_eq!(per_person_price("6,420원", "0/2").unwrap(), "6,420원");
/// ```
pub fn per_person_price(price_total: &str, participants: &str) -> Result<String> {
    let price = parse_price(price_total)?;
    let ratio = Participants::parse(participants)?;

    if ratio.total == 1 {
        tracing::debug!(price_total, participants, "단독 모집: 총 가격을 그대로 사용");
    }

    Ok(format_won(allocate(price, &ratio)))
}
