use chrono::{Duration, NaiveDate};

pub struct TimeUtils;

impl TimeUtils {
    pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1970, 1, 1) {
        Some(d) => d,
        None => unreachable!(),
    };

    /// Full date for the hover readout, e.g. `4 Nov 2016`
    pub const DISPLAY_FORMAT: &str = "%-d %b %Y";
    /// Compact date for axis ticks, e.g. `Nov 16`
    pub const TICK_FORMAT: &str = "%b %y";

    /// Calendar date -> plot x coordinate (days since the Unix epoch).
    pub fn date_to_x(date: NaiveDate) -> f64 {
        (date - Self::EPOCH).num_days() as f64
    }

    /// Plot x coordinate -> nearest calendar date.
    pub fn x_to_date(x: f64) -> NaiveDate {
        Self::EPOCH + Duration::days(x.round() as i64)
    }

    pub fn format_date(date: NaiveDate) -> String {
        date.format(Self::DISPLAY_FORMAT).to_string()
    }

    pub fn format_tick_date(date: NaiveDate) -> String {
        date.format(Self::TICK_FORMAT).to_string()
    }
}
