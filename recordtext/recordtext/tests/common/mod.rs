#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use recordtext::impl_record;

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub title: String,
    pub description: String,
    pub users_limit: i32,
    pub start_date: NaiveDate,
    pub start_time_from: NaiveTime,
    pub start_time_to: NaiveTime,
    pub registration_available_until: NaiveDateTime,
}

impl_record!(Event {
    "title" => title: String,
    "description" => description: String,
    "usersLimit" => users_limit: i32,
    "startDate" => start_date: NaiveDate,
    "startTimeFrom" => start_time_from: NaiveTime,
    "startTimeTo" => start_time_to: NaiveTime,
    "registrationAvailableUntil" => registration_available_until: NaiveDateTime,
});

pub const EVENT_TEXT: &str = "\
'title'='Test meeting'
'description'='Description of the test meeting'
'usersLimit'='45'
'startDate'='20.08.2023'
'startTimeFrom'='10:00:00'
'startTimeTo'='18:00:00'
'registrationAvailableUntil'='19.08.2023 10:45:30'
";

pub fn event() -> Event {
    Event {
        title: "Test meeting".to_string(),
        description: "Description of the test meeting".to_string(),
        users_limit: 45,
        start_date: NaiveDate::from_ymd_opt(2023, 8, 20).unwrap(),
        start_time_from: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        start_time_to: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        registration_available_until: NaiveDate::from_ymd_opt(2023, 8, 19)
            .unwrap()
            .and_hms_opt(10, 45, 30)
            .unwrap(),
    }
}
