//! Build-time Configuration
//!
//! Values baked in through `option_env!` when the bundle is built.

use std::time::Duration;

use log::LevelFilter;

pub const DEFAULT_API_BASE: &str = "https://goldfish-app-jyk4z.ondigitalocean.app/ethglobal-lbl-backend2";

/// Items requested per feed page
pub const PAGE_SIZE: usize = 5;
/// Remaining-items threshold that triggers a prefetch
pub const LOW_WATERMARK: usize = 5;
/// Card slide animation length
pub const TRANSITION_DELAY: Duration = Duration::from_millis(300);

/// Feed controller tuning
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub page_size: usize,
    pub low_watermark: usize,
    pub transition_delay: Duration,
    /// Drop items whose id was already received in this session
    pub dedup_by_id: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            low_watermark: LOW_WATERMARK,
            transition_delay: TRANSITION_DELAY,
            dedup_by_id: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub log_level: LevelFilter,
    pub feed: FeedConfig,
}

impl AppConfig {
    /// Configuration from the build environment
    pub fn from_env() -> Self {
        Self::from_vars(
            option_env!("LABLR_API_BASE"),
            option_env!("LABLR_FEED_DEDUP"),
            option_env!("LABLR_LOG_LEVEL"),
        )
    }

    pub fn from_vars(api_base: Option<&str>, dedup: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string();

        Self {
            api_base,
            log_level: log_level
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(LevelFilter::Info),
            feed: FeedConfig {
                dedup_by_id: dedup.map(parse_flag).unwrap_or(false),
                ..FeedConfig::default()
            },
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
