//! Process-wide identifier source for pet, order and user records.
//!
//! Identifiers are milliseconds since the Unix epoch, bumped past the last
//! value handed out so two calls never return the same id, even from
//! parallel tests within one millisecond.

use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Time-based id, strictly greater than every id previously returned.
pub fn unique_id() -> i64 {
    let now = chrono::Utc::now().timestamp_millis();
    let previous = LAST_ID
        .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
            Some(if now > last { now } else { last + 1 })
        })
        .unwrap_or_else(|last| last);
    if now > previous { now } else { previous + 1 }
}

/// `{prefix}_{unique_id()}`, e.g. `loginUser_1718000000000`.
pub fn unique_name(prefix: &str) -> String {
    format!("{prefix}_{}", unique_id())
}
