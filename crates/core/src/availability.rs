//! # Availability
//!
//! Expands a provider's weekly working-hours template into bookable
//! one-hour slots and answers availability queries over them.
//!
//! ## Slot Generation Algorithm
//!
//! [`generate_slots`] works in three steps:
//!
//! 1. Select the weekday entry of the template matching the target date
//! 2. Parse its `HH:MM` boundaries; a disabled day, a malformed time, or an
//!    inverted window all short-circuit to an empty list
//! 3. Emit one slot per whole hour `h` with `start <= h:00 < end`, in
//!    ascending order
//!
//! The result is deterministic and the whole computation touches at most
//! 24 candidate hours, so callers may invoke it freely on every render.
//!
//! Degenerate configuration is never an error: an empty slot list is the
//! correct answer for a closed or misconfigured day, and the calendar pages
//! render it as "no slots available".

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::errors::{QuickServeError, QuickServeResult};
use crate::models::booking::Booking;
use crate::models::slot::Slot;
use crate::models::working_hours::WorkingHours;

/// Parse a wall-clock time in `HH:MM` format.
///
/// Returns `None` for anything malformed; slot generation treats that the
/// same as a closed day.
pub fn parse_hhmm(time_str: &str) -> Option<NaiveTime> {
    let (hour, minute) = time_str.split_once(':')?;
    let hour = hour.parse::<u32>().ok()?;
    let minute = minute.parse::<u32>().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Enumerates the one-hour slots for `date` from the weekly template.
///
/// Pure and total: identical inputs always yield the identical slot list,
/// and no input produces an error. Past dates are not special-cased here;
/// callers that need to hide already-elapsed slots use [`open_slots`].
pub fn generate_slots(hours: &WorkingHours, date: NaiveDate) -> Vec<Slot> {
    let day = hours.day(date.weekday());
    if !day.enabled {
        return Vec::new();
    }

    let (Some(start), Some(end)) = (parse_hhmm(&day.start), parse_hhmm(&day.end)) else {
        return Vec::new();
    };
    if end <= start {
        return Vec::new();
    }

    (0..24)
        .filter_map(|h| NaiveTime::from_hms_opt(h, 0, 0))
        .filter(|on_the_hour| start <= *on_the_hour && *on_the_hour < end)
        .map(Slot::starting_at)
        .collect()
}

/// Slots on `date` that are still bookable as of `now`.
///
/// Two exclusions on top of [`generate_slots`]: slots that have already
/// begun when `date` is today (a past date yields nothing at all), and
/// slots overlapping an existing booking. A booking that straddles a slot
/// boundary blocks every slot it touches.
pub fn open_slots(
    hours: &WorkingHours,
    date: NaiveDate,
    now: NaiveDateTime,
    booked: &[Slot],
) -> Vec<Slot> {
    if date < now.date() {
        return Vec::new();
    }

    let mut slots = generate_slots(hours, date);
    if date == now.date() {
        slots.retain(|slot| slot.start > now.time());
    }
    slots.retain(|slot| !booked.iter().any(|taken| slot.overlaps(taken)));
    slots
}

/// Projects active bookings onto `date` as wall-clock slots in `tz`.
///
/// Feeds the `booked` argument of [`open_slots`] from a provider's booking
/// list. Cancelled bookings are skipped.
pub fn booked_slots_on(bookings: &[Booking], tz: Tz, date: NaiveDate) -> Vec<Slot> {
    bookings
        .iter()
        .filter(|booking| booking.status.is_active())
        .filter_map(|booking| {
            let start = booking.start_time.with_timezone(&tz);
            let end = booking.end_time.with_timezone(&tz);
            (start.date_naive() == date).then(|| Slot {
                start: start.time(),
                end: end.time(),
            })
        })
        .collect()
}

/// Anchors a chosen slot to absolute UTC boundaries for submission to the
/// booking endpoint.
///
/// `tz` is the provider's timezone; a local time made nonexistent or
/// ambiguous by a DST transition is rejected as a validation error rather
/// than resolved to an arbitrary instant.
pub fn slot_bounds_utc(
    date: NaiveDate,
    slot: Slot,
    tz: Tz,
) -> QuickServeResult<(DateTime<Utc>, DateTime<Utc>)> {
    // A 23:00 slot carries a wrapped 00:00 end, which lands on the next day.
    let end_date = if slot.end <= slot.start {
        date.succ_opt().ok_or_else(|| {
            QuickServeError::Validation(format!("Date {date} is out of the supported range"))
        })?
    } else {
        date
    };

    let start = anchor(date, slot.start, tz)?;
    let end = anchor(end_date, slot.end, tz)?;
    Ok((start, end))
}

fn anchor(date: NaiveDate, time: NaiveTime, tz: Tz) -> QuickServeResult<DateTime<Utc>> {
    tz.from_local_datetime(&date.and_time(time))
        .single()
        .map(|instant| instant.with_timezone(&Utc))
        .ok_or_else(|| {
            QuickServeError::Validation(format!(
                "{date} {time} is not an unambiguous instant in {tz}"
            ))
        })
}
