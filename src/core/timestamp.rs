//! Header rendering for log lines
//!
//! Turns a [`Flags`] set, a point in time and a caller location into the
//! header text that precedes each message, e.g.
//! `2025/01/08 10:30:45.123456 main.rs:12: `.

use super::flags::Flags;
use chrono::{DateTime, Local, Utc};
use std::fmt::Write as _;
use std::panic::Location;

/// Append the date/time part of the header selected by `flags`.
///
/// Writes nothing when no timestamp flag is set. Times are rendered in the
/// local zone unless `Flags::UTC` is present.
pub fn write_timestamp(buf: &mut String, flags: Flags, now: &DateTime<Utc>) {
    if !flags.wants_timestamp() {
        return;
    }

    if flags.contains(Flags::UTC) {
        write_datetime(buf, flags, now);
    } else {
        write_datetime(buf, flags, &now.with_timezone(&Local));
    }
}

fn write_datetime<Tz>(buf: &mut String, flags: Flags, datetime: &DateTime<Tz>)
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    // Writing into a String cannot fail.
    if flags.contains(Flags::DATE) {
        let _ = write!(buf, "{} ", datetime.format("%Y/%m/%d"));
    }
    if flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
        let _ = write!(buf, "{}", datetime.format("%H:%M:%S"));
        if flags.contains(Flags::MICROSECONDS) {
            let _ = write!(buf, "{}", datetime.format("%.6f"));
        }
        buf.push(' ');
    }
}

/// Append the `file:line: ` part of the header selected by `flags`.
///
/// `SHORT_FILE` wins over `LONG_FILE` when both are set.
pub fn write_location(buf: &mut String, flags: Flags, location: &Location<'_>) {
    if !flags.wants_location() {
        return;
    }

    let file = if flags.contains(Flags::SHORT_FILE) {
        short_file(location.file())
    } else {
        location.file()
    };
    let _ = write!(buf, "{}:{}: ", file, location.line());
}

/// Final path component of a source path.
pub fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
