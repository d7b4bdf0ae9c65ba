//! Shared value objects.

mod marketplace_code;
pub mod weeks;

pub use marketplace_code::{MAX_CODE_LEN, MarketplaceCode};
pub use weeks::{NEVER_WEEKS, coverage_or_never, days_to_weeks, is_never, ratio_or};
