//! Formatting helpers for durations and report timestamps.

use time::{macros::format_description, OffsetDateTime};

/// Execution time of a file, e.g. `0.35s`, `12s` or `2m 5.5s`.
/// A negative span (clock skew, missing end) renders as `--`.
pub fn format_time_display(start: i64, end: i64) -> String {
    let elapsed = end.saturating_sub(start);
    if elapsed < 0 {
        return "--".into();
    }

    let minutes = elapsed / 60_000;
    let seconds = format_seconds(elapsed % 60_000);
    if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

fn format_seconds(ms: i64) -> String {
    let text = format!("{:.3}", ms as f64 / 1000.0);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// `2026-03-14 09:26:53` (UTC) for a report start time in epoch milliseconds.
pub fn format_start_time(epoch_ms: i64) -> String {
    let nanos = i128::from(epoch_ms) * 1_000_000;
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .ok()
        .and_then(|ts| {
            ts.format(&format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second]"
            ))
            .ok()
        })
        .unwrap_or_else(|| "—".to_string())
}

/// Case duration cell, `—` when the runner didn't record one.
pub fn format_case_duration(duration: Option<u64>) -> String {
    match duration {
        Some(ms) => format!("{ms} ms"),
        None => "—".into(),
    }
}
