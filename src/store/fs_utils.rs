use crate::utils::date::file_stamp;
use chrono::NaiveDate;

/// `<prefix>_<YYYY-MM-DD>.csv`
pub fn daily_file_name(prefix: &str, day: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, file_stamp(day))
}
