//! Maturity clock for the locked schedule.
//!
//! - maturity_k = locked_at + k * month_duration
//! - month k is releasable once now >= maturity_k (inclusive)
//! - month 0 therefore matures at the lock instant

use crate::state::LockState;

/// Timestamp at which `month` becomes releasable, `None` if it does not fit
/// in an `i64` (such a month never matures).
pub fn maturity_ts(locked_at: i64, month: u32, month_duration: i64) -> Option<i64> {
    month_duration
        .checked_mul(i64::from(month))
        .and_then(|offset| locked_at.checked_add(offset))
}

/// False while the schedule is unlocked.
pub fn is_month_mature(lock: &LockState, month: u32, month_duration: i64, now: i64) -> bool {
    match *lock {
        LockState::Unlocked => false,
        LockState::Locked { locked_at } => {
            maturity_ts(locked_at, month, month_duration).map_or(false, |ts| now >= ts)
        }
    }
}

/// Highest month index already mature at `now`, `None` if unlocked or the
/// clock reads earlier than the lock.
pub fn latest_mature_month(lock: &LockState, month_duration: i64, now: i64) -> Option<u32> {
    let LockState::Locked { locked_at } = *lock else {
        return None;
    };
    if now < locked_at || month_duration <= 0 {
        return None;
    }
    let elapsed = (now - locked_at) / month_duration;
    Some(u32::try_from(elapsed).unwrap_or(u32::MAX))
}
