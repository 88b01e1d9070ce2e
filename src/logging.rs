//! 로그 초기화
//!
//! 사용자용 출력은 stdout(println!), 진단 로그는 stderr로 보낸다.

use crate::error::{GroupBuyError, Result};
use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const COMPONENT: &str = "groupbuy";

/// `--verbose`면 debug, 아니면 RUST_LOG 또는 warn
pub fn default_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::WARN }
}

fn filter_for(level: Level, verbose: bool) -> EnvFilter {
    let directive = format!("{},{}={},groupbuy_common={}", level, COMPONENT, level, level);
    if verbose {
        return EnvFilter::new(directive);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

pub fn init(verbose: bool) -> Result<()> {
    let level = default_level(verbose);
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose);

    tracing_subscriber::registry()
        .with(filter_for(level, verbose))
        .with(layer)
        .try_init()
        .map_err(|e| GroupBuyError::Logging(e.to_string()))
}
