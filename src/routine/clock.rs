// Wall-clock rules: the period threshold and header formatting

use crate::routine::product::Period;
use chrono::{DateTime, Local, Timelike};

/// Hour-of-day threshold separating the two routines.
pub const NOON_HOUR: u32 = 12;

/// Morning strictly before local noon, evening from noon onward.
pub fn period_for_hour(hour: u32) -> Period {
    if hour < NOON_HOUR {
        Period::Morning
    } else {
        Period::Evening
    }
}

pub fn current_period(now: &DateTime<Local>) -> Period {
    period_for_hour(now.hour())
}

/// Header clock, 24-hour or 12-hour per config.
pub fn format_clock(now: &DateTime<Local>, use_24h: bool) -> String {
    if use_24h {
        now.format("%H:%M").to_string()
    } else {
        now.format("%I:%M %p").to_string()
    }
}

pub fn format_date(now: &DateTime<Local>) -> String {
    now.format("%d/%m/%Y").to_string()
}
