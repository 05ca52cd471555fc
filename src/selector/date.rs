//! Date and time wheels.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Which parts of the value are editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateMode {
    /// Hour and minute
    Time,
    /// Year, month and day
    Date,
    /// Date followed by hour and minute
    #[default]
    DateAndTime,
}

impl DateMode {
    /// Wheels shown for this mode, left to right.
    pub fn fields(self) -> &'static [DateField] {
        match self {
            DateMode::Time => &[DateField::Hour, DateField::Minute],
            DateMode::Date => &[DateField::Year, DateField::Month, DateField::Day],
            DateMode::DateAndTime => &[
                DateField::Year,
                DateField::Month,
                DateField::Day,
                DateField::Hour,
                DateField::Minute,
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
}

impl DateField {
    /// Display text of this field for `value`.
    pub fn label(self, value: NaiveDateTime) -> String {
        match self {
            DateField::Year => format!("{:04}", value.year()),
            DateField::Month => value.format("%b").to_string(),
            DateField::Day => format!("{:02}", value.day()),
            DateField::Hour => format!("{:02}", value.hour()),
            DateField::Minute => format!("{:02}", value.minute()),
        }
    }
}

/// A date/time selector.
///
/// Configure it through the overlay's `date_selector_mut` before or after
/// showing; the value always stays within the minimum and maximum.
#[derive(Debug, Clone)]
pub struct DateSelector {
    value: NaiveDateTime,
    mode: DateMode,
    minimum: Option<NaiveDateTime>,
    maximum: Option<NaiveDateTime>,
    minute_interval: u32,
    focused: usize,
}

impl Default for DateSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl DateSelector {
    /// A selector on the current local time, truncated to the minute.
    pub fn new() -> Self {
        let now = Local::now().naive_local();
        let value = now
            .with_second(0)
            .and_then(|v| v.with_nanosecond(0))
            .unwrap_or(now);
        Self::with_date(value)
    }

    pub fn with_date(value: NaiveDateTime) -> Self {
        Self {
            value,
            mode: DateMode::default(),
            minimum: None,
            maximum: None,
            minute_interval: 1,
            focused: 0,
        }
    }

    pub fn date(&self) -> NaiveDateTime {
        self.value
    }

    /// Set the value, snapped to the minute interval and clamped into the allowed range.
    pub fn set_date(&mut self, value: NaiveDateTime) {
        self.value = self.clamp(self.snap(value));
    }

    pub fn mode(&self) -> DateMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: DateMode) {
        self.mode = mode;
        self.focused = 0;
    }

    pub fn minimum_date(&self) -> Option<NaiveDateTime> {
        self.minimum
    }

    pub fn set_minimum_date(&mut self, minimum: Option<NaiveDateTime>) {
        self.minimum = minimum;
        self.value = self.clamp(self.value);
    }

    pub fn maximum_date(&self) -> Option<NaiveDateTime> {
        self.maximum
    }

    pub fn set_maximum_date(&mut self, maximum: Option<NaiveDateTime>) {
        self.maximum = maximum;
        self.value = self.clamp(self.value);
    }

    pub fn minute_interval(&self) -> u32 {
        self.minute_interval
    }

    /// Set the minute wheel step. Values that don't divide 60 reset it to 1.
    pub fn set_minute_interval(&mut self, interval: u32) {
        self.minute_interval = if (1..=30).contains(&interval) && 60 % interval == 0 {
            interval
        } else {
            1
        };
        self.value = self.clamp(self.snap(self.value));
    }

    pub fn fields(&self) -> &'static [DateField] {
        self.mode.fields()
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn focused_field(&self) -> DateField {
        self.fields()[self.focused]
    }

    pub fn set_focused_index(&mut self, index: usize) {
        if index < self.fields().len() {
            self.focused = index;
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields().len();
    }

    pub fn focus_prev(&mut self) {
        let len = self.fields().len();
        self.focused = self.focused.checked_sub(1).unwrap_or(len - 1);
    }

    /// Step the focused wheel by `delta` rows.
    pub fn step(&mut self, delta: i32) {
        let shifted = self.value_after(self.focused_field(), delta);
        self.value = self.clamp(shifted);
    }

    /// The value the wheel for `field` shows `delta` rows from the center.
    ///
    /// Each field wraps within its parent (month within the year, minute
    /// within the hour); the year steps freely.
    pub fn value_after(&self, field: DateField, delta: i32) -> NaiveDateTime {
        let v = self.value;
        let delta = delta as i64;
        let (year, month, day) = (v.year(), v.month(), v.day());
        let (hour, minute) = (v.hour(), v.minute());

        let shifted = match field {
            DateField::Year => {
                let year = (year as i64 + delta)
                    .clamp(NaiveDate::MIN.year() as i64, NaiveDate::MAX.year() as i64)
                    as i32;
                build(year, month, day.min(days_in_month(year, month)), hour, minute)
            }
            DateField::Month => {
                let month = wrap(month as i64 - 1 + delta, 12) + 1;
                build(year, month, day.min(days_in_month(year, month)), hour, minute)
            }
            DateField::Day => {
                let days = days_in_month(year, month);
                let day = wrap(day as i64 - 1 + delta, days as i64) + 1;
                build(year, month, day, hour, minute)
            }
            DateField::Hour => build(year, month, day, wrap(hour as i64 + delta, 24), minute),
            DateField::Minute => {
                let interval = self.minute_interval as i64;
                let slot = wrap(minute as i64 / interval + delta, 60 / interval);
                build(year, month, day, hour, slot * self.minute_interval)
            }
        };

        shifted
            .map(|s| s.with_second(v.second()).unwrap_or(s))
            .unwrap_or(v)
    }

    /// Whether `value` lies within the minimum and maximum.
    pub fn is_in_range(&self, value: NaiveDateTime) -> bool {
        self.minimum.is_none_or(|min| value >= min) && self.maximum.is_none_or(|max| value <= max)
    }

    /// Round the minute down onto the interval the minute wheel shows.
    fn snap(&self, value: NaiveDateTime) -> NaiveDateTime {
        let minute = value.minute() / self.minute_interval * self.minute_interval;
        value.with_minute(minute).unwrap_or(value)
    }

    fn clamp(&self, value: NaiveDateTime) -> NaiveDateTime {
        let mut value = value;
        if let Some(max) = self.maximum {
            value = value.min(max);
        }
        if let Some(min) = self.minimum {
            value = value.max(min);
        }
        value
    }
}

fn wrap(value: i64, modulus: i64) -> u32 {
    value.rem_euclid(modulus) as u32
}

fn build(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some(NaiveDateTime::new(date, time))
}

/// Number of days in `month` of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        year.checked_add(1).map(|y| (y, 1))
    } else {
        Some((year, month + 1))
    };
    next.and_then(|(next_year, next_month)| NaiveDate::from_ymd_opt(next_year, next_month, 1))
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        build(year, month, day, hour, minute).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2026, 12), 31);
        assert_eq!(days_in_month(2026, 4), 30);
    }

    #[test]
    fn test_fields_per_mode() {
        assert_eq!(DateMode::Time.fields().len(), 2);
        assert_eq!(DateMode::Date.fields()[0], DateField::Year);
        assert_eq!(DateMode::default(), DateMode::DateAndTime);
        assert_eq!(DateMode::DateAndTime.fields().len(), 5);
    }

    #[test]
    fn test_month_wraps_within_year_and_clamps_day() {
        let mut date = DateSelector::with_date(at(2026, 12, 31, 8, 0));
        date.set_focused_index(1);
        date.step(2);
        assert_eq!(date.date(), at(2026, 2, 28, 8, 0));
    }

    #[test]
    fn test_day_wraps_within_month() {
        let mut date = DateSelector::with_date(at(2026, 10, 1, 0, 0));
        date.set_focused_index(2);
        date.step(-1);
        assert_eq!(date.date(), at(2026, 10, 31, 0, 0));
    }

    #[test]
    fn test_year_from_leap_day() {
        let date = DateSelector::with_date(at(2024, 2, 29, 12, 30));
        assert_eq!(date.value_after(DateField::Year, 1), at(2025, 2, 28, 12, 30));
    }

    #[test]
    fn test_minute_interval() {
        let mut date = DateSelector::with_date(at(2026, 10, 19, 9, 50));
        date.set_minute_interval(15);
        date.set_mode(DateMode::Time);
        date.focus_next();
        assert_eq!(date.focused_field(), DateField::Minute);
        date.step(1);
        assert_eq!(date.date(), at(2026, 10, 19, 9, 0));

        date.set_minute_interval(7);
        assert_eq!(date.minute_interval(), 1);
    }

    #[test]
    fn test_interval_snaps_value_to_wheel() {
        let mut date = DateSelector::with_date(at(2026, 10, 19, 9, 52));
        date.set_minute_interval(5);
        assert_eq!(date.date(), at(2026, 10, 19, 9, 50));
        assert_eq!(DateField::Minute.label(date.value_after(DateField::Minute, 0)), "50");
        assert_eq!(DateField::Minute.label(date.date()), "50");

        date.set_mode(DateMode::Time);
        date.set_focused_index(1);
        date.step(1);
        date.step(-1);
        assert_eq!(date.date(), at(2026, 10, 19, 9, 50));

        date.set_date(at(2026, 10, 19, 11, 59));
        assert_eq!(date.date(), at(2026, 10, 19, 11, 55));
    }

    #[test]
    fn test_huge_year_step_stays_in_range() {
        let mut date = DateSelector::with_date(at(2026, 12, 5, 8, 0));
        date.step(i32::MAX);
        assert_eq!(date.date().year(), NaiveDate::MAX.year());

        date.step(i32::MIN);
        assert_eq!(date.date().year(), NaiveDate::MIN.year());
        assert_eq!(days_in_month(i32::MAX, 12), 31);
    }

    #[test]
    fn test_hour_wraps() {
        let date = DateSelector::with_date(at(2026, 10, 19, 23, 5));
        assert_eq!(date.value_after(DateField::Hour, 1), at(2026, 10, 19, 0, 5));
    }

    #[test]
    fn test_range_clamps_value() {
        let mut date = DateSelector::with_date(at(2026, 10, 19, 9, 0));
        date.set_maximum_date(Some(at(2026, 10, 20, 0, 0)));
        date.set_focused_index(2);
        date.step(5);
        assert_eq!(date.date(), at(2026, 10, 20, 0, 0));

        date.set_maximum_date(None);
        date.set_minimum_date(Some(at(2026, 11, 1, 0, 0)));
        assert_eq!(date.date(), at(2026, 11, 1, 0, 0));
        assert!(date.is_in_range(date.date()));
    }

    #[test]
    fn test_labels() {
        let value = at(2026, 3, 7, 4, 9);
        assert_eq!(DateField::Year.label(value), "2026");
        assert_eq!(DateField::Month.label(value), "Mar");
        assert_eq!(DateField::Day.label(value), "07");
        assert_eq!(DateField::Minute.label(value), "09");
    }

    #[test]
    fn test_focus_wraps() {
        let mut date = DateSelector::with_date(at(2026, 1, 1, 0, 0));
        date.set_mode(DateMode::Date);
        date.focus_prev();
        assert_eq!(date.focused_field(), DateField::Day);
    }
}
