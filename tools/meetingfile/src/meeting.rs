use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use recordtext::impl_record;

/// Payload written when the meeting file does not exist yet.
pub const SEED_MEETING: &str = "\
'title'='Тестовое собрание'
'description'='Описание тестового собрания'
'usersLimit'='45'
'startDate'='20.08.2023'
'startTimeFrom'='10:00:00'
'startTimeTo'='18:00:00'
'registrationAvailableUntil'='19.08.2023 10:45:30'
";

/// A scheduled meeting with a registration deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    pub title: String,
    pub description: String,
    pub users_limit: i32,
    pub start_date: NaiveDate,
    pub start_time_from: NaiveTime,
    pub start_time_to: NaiveTime,
    pub registration_available_until: NaiveDateTime,
}

impl_record!(Meeting {
    "title" => title: String,
    "description" => description: String,
    "usersLimit" => users_limit: i32,
    "startDate" => start_date: NaiveDate,
    "startTimeFrom" => start_time_from: NaiveTime,
    "startTimeTo" => start_time_to: NaiveTime,
    "registrationAvailableUntil" => registration_available_until: NaiveDateTime,
});
