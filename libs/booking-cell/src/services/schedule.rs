// libs/booking-cell/src/services/schedule.rs
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use shared_models::Appointment;

use crate::models::ScheduleStatus;

/// Parse the stored date/time strings into a concrete instant. Time accepts
/// `HH:MM` and `HH:MM:SS`; anything else is None.
pub fn parse_slot(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .ok()?;
    Some(date.and_time(time))
}

/// Classify an appointment relative to `now`. Strings that fail to parse as
/// a calendar date + time are `Unknown` rather than an error: stale or
/// malformed rows must still display.
pub fn classify(date: &str, time: &str, now: NaiveDateTime) -> ScheduleStatus {
    match parse_slot(date, time) {
        Some(instant) if instant >= now => ScheduleStatus::Upcoming,
        Some(_) => ScheduleStatus::Past,
        None => ScheduleStatus::Unknown,
    }
}

/// The earliest upcoming appointment, by parsed instant. Unknown-status
/// rows never win.
pub fn next_appointment(appointments: &[Appointment], now: NaiveDateTime) -> Option<&Appointment> {
    appointments
        .iter()
        .filter_map(|apt| parse_slot(&apt.date, &apt.time).map(|instant| (instant, apt)))
        .filter(|(instant, _)| *instant >= now)
        .min_by_key(|(instant, _)| *instant)
        .map(|(_, apt)| apt)
}
