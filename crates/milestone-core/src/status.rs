//! Effective Status
//!
//! Derives Overdue from a Pending milestone whose due day has passed.
//! Comparison is always by calendar day; time of day never matters.

use chrono::{DateTime, NaiveDate, TimeZone};

use crate::domain::{EffectiveStatus, StoredStatus};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a due date. Accepts `YYYY-MM-DD` and ISO datetimes (`YYYY-MM-DDT...`).
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(day) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(day);
    }
    let (day, rest) = raw.split_at_checked(10)?;
    if !rest.starts_with(['T', ' ']) {
        return None;
    }
    NaiveDate::parse_from_str(day, DATE_FORMAT).ok()
}

/// Calendar day of `now` in its own timezone
pub fn today_from<Tz: TimeZone>(now: DateTime<Tz>) -> NaiveDate {
    now.date_naive()
}

/// Status to display for a stored status and due date.
///
/// Completed always wins. A Pending milestone is Overdue only when its due
/// day is strictly before `today`; an unparseable due date stays Pending.
pub fn resolve_status(stored: StoredStatus, due_date: &str, today: NaiveDate) -> EffectiveStatus {
    match stored {
        StoredStatus::Completed => EffectiveStatus::Completed,
        StoredStatus::Pending => match parse_due_date(due_date) {
            Some(due) if due < today => EffectiveStatus::Overdue,
            Some(_) => EffectiveStatus::Pending,
            None => {
                log::debug!("unparseable due date {:?}, keeping Pending", due_date);
                EffectiveStatus::Pending
            }
        },
    }
}
