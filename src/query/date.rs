//! Launch date formatting.

use chrono::DateTime;
use chrono_tz::America::New_York;

/// "Jan 05, 2024".
pub const LAUNCH_DATE_FORMAT: &str = "%b %d, %Y";

/// Format epoch seconds as a New York calendar date.
///
/// Absent or out-of-range timestamps yield an empty string.
pub fn format_launch_date(epoch_secs: Option<i64>) -> String {
    epoch_secs
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|utc| utc.with_timezone(&New_York).format(LAUNCH_DATE_FORMAT).to_string())
        .unwrap_or_default()
}
