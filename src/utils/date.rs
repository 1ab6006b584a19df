use chrono::NaiveDate;

/// Local calendar date at the moment of the call.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `YYYY-MM-DD`, the form used in output file names.
pub fn file_stamp(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
