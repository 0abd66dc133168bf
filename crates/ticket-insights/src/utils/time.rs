use std::sync::OnceLock;

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime, UtcOffset};

const SECONDS_PER_DAY: i64 = 86_400;

static REFERENCE_OFFSET: OnceLock<UtcOffset> = OnceLock::new();

// Month-first spellings come before their day-first fallbacks, so a day-first
// reading only wins when the month-first one is not a valid date.
const DATETIME_FORMATS: &[&[BorrowedFormatItem<'static>]] = &[
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    format_description!(
        "[month padding:none]/[day padding:none]/[year] [hour padding:none]:[minute]:[second]"
    ),
    format_description!("[month padding:none]/[day padding:none]/[year] [hour padding:none]:[minute]"),
    format_description!(
        "[month padding:none]-[day padding:none]-[year] [hour padding:none]:[minute]:[second]"
    ),
    format_description!("[month padding:none]-[day padding:none]-[year] [hour padding:none]:[minute]"),
    format_description!(
        "[day padding:none]/[month padding:none]/[year] [hour padding:none]:[minute]:[second]"
    ),
    format_description!("[day padding:none]/[month padding:none]/[year] [hour padding:none]:[minute]"),
    format_description!(
        "[day padding:none]-[month padding:none]-[year] [hour padding:none]:[minute]:[second]"
    ),
    format_description!("[day padding:none]-[month padding:none]-[year] [hour padding:none]:[minute]"),
];

const DATE_FORMATS: &[&[BorrowedFormatItem<'static>]] = &[
    format_description!("[year]-[month]-[day]"),
    format_description!("[month padding:none]/[day padding:none]/[year]"),
    format_description!("[month padding:none]-[day padding:none]-[year]"),
    format_description!("[day padding:none]/[month padding:none]/[year]"),
    format_description!("[day padding:none]-[month padding:none]-[year]"),
];

/// Offset that naive timestamps and "now" are both read in.
///
/// Captured once per process: the local offset when it can be determined on
/// first use, UTC otherwise (the local offset is unavailable once a process
/// runs several threads). The binary captures it at startup.
pub fn reference_offset() -> UtcOffset {
    *REFERENCE_OFFSET
        .get_or_init(|| UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
}

/// Parses a free-text timestamp cell into a wall-clock datetime.
///
/// Offsets are converted to [`reference_offset`] and dropped. Numeric dates
/// read month first, falling back to day first when that is not a valid
/// date. Returns `None` for anything that does not match a known spelling;
/// callers treat that as a null cell.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    let candidate = raw.trim();
    if candidate.is_empty() {
        return None;
    }

    if let Ok(parsed) = OffsetDateTime::parse(candidate, &Rfc3339) {
        return Some(wall_clock(parsed.to_offset(reference_offset())));
    }

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = PrimitiveDateTime::parse(candidate, format) {
            return Some(parsed);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| Date::parse(candidate, format).ok())
        .map(Date::midnight)
}

#[must_use]
pub fn format_timestamp(timestamp: PrimitiveDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        timestamp.year(),
        u8::from(timestamp.month()),
        timestamp.day(),
        timestamp.hour(),
        timestamp.minute(),
        timestamp.second()
    )
}

/// Current time in [`reference_offset`].
#[must_use]
pub fn wall_clock_now() -> PrimitiveDateTime {
    wall_clock(OffsetDateTime::now_utc().to_offset(reference_offset()))
}

fn wall_clock(moment: OffsetDateTime) -> PrimitiveDateTime {
    PrimitiveDateTime::new(moment.date(), moment.time())
}

/// Start of a look-back window of `days` ending at `now`.
///
/// Negative `days` move the cutoff into the future. `None` means the cutoff
/// falls outside the representable calendar.
#[must_use]
pub fn look_back_cutoff(now: PrimitiveDateTime, days: i64) -> Option<PrimitiveDateTime> {
    let window = days.checked_mul(SECONDS_PER_DAY).map(Duration::seconds)?;
    now.checked_sub(window)
}
