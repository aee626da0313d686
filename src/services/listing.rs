use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::{Appointment, Service};

pub const VALIDATION_TITLE: &str = "Validation Error";
pub const SUCCESS_TITLE: &str = "Success";
pub const SUCCESS_MESSAGE: &str = "Appointment booked successfully!";

const ROW_DATE_FORMAT: &str = "%m/%d/%Y %I:%M %p";
const INPUT_DATE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Column {
    pub title: &'static str,
    pub width: u32,
}

pub const COLUMNS: [Column; 4] = [
    Column { title: "Customer Name", width: 150 },
    Column { title: "Phone", width: 100 },
    Column { title: "Service", width: 150 },
    Column { title: "Date & Time", width: 150 },
];

/// Display cells for one appointment, in [`COLUMNS`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentRow {
    pub customer_name: String,
    pub phone: String,
    pub service: String,
    pub date_time: String,
}

impl From<&Appointment> for AppointmentRow {
    fn from(a: &Appointment) -> Self {
        Self {
            customer_name: a.customer_name.clone(),
            phone: a.phone_number.clone(),
            service: a.service.label(),
            date_time: format_date_time(&a.scheduled_at),
        }
    }
}

impl AppointmentRow {
    pub fn cells(&self) -> [&str; 4] {
        [
            self.customer_name.as_str(),
            self.phone.as_str(),
            self.service.as_str(),
            self.date_time.as_str(),
        ]
    }
}

pub fn format_date_time(dt: &NaiveDateTime) -> String {
    dt.format(ROW_DATE_FORMAT).to_string()
}

/// Parses the date-time picker value. Accepts `datetime-local` input with or
/// without seconds, and the space-separated form.
pub fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    INPUT_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Field values the form returns to after a successful booking.
#[derive(Debug, Clone, Serialize)]
pub struct FormDefaults {
    pub customer_name: String,
    pub phone_number: String,
    pub service: String,
    pub scheduled_at: String,
}

impl FormDefaults {
    pub fn at(now: NaiveDateTime) -> Self {
        Self {
            customer_name: String::new(),
            phone_number: String::new(),
            service: Service::default().label(),
            scheduled_at: now.format("%Y-%m-%dT%H:%M").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn test_row_from_appointment() {
        let appt = Appointment {
            id: 3,
            customer_name: "Jane Doe".to_string(),
            phone_number: "555-1234".to_string(),
            service: Service::HairColoring,
            scheduled_at: dt("2025-03-15 14:05"),
        };

        let row = AppointmentRow::from(&appt);
        assert_eq!(
            row.cells(),
            ["Jane Doe", "555-1234", "Hair Coloring - $80", "03/15/2025 02:05 PM"]
        );
    }

    #[test]
    fn test_format_morning_and_midnight() {
        assert_eq!(format_date_time(&dt("2025-12-01 09:30")), "12/01/2025 09:30 AM");
        assert_eq!(format_date_time(&dt("2025-12-01 00:00")), "12/01/2025 12:00 AM");
        assert_eq!(format_date_time(&dt("2025-12-01 12:00")), "12/01/2025 12:00 PM");
    }

    #[test]
    fn test_parse_date_time() {
        let expected = dt("2025-06-17 14:30");
        assert_eq!(parse_date_time("2025-06-17T14:30"), Some(expected));
        assert_eq!(parse_date_time("2025-06-17T14:30:00"), Some(expected));
        assert_eq!(parse_date_time(" 2025-06-17 14:30:00 "), Some(expected));
        assert_eq!(parse_date_time("tomorrow"), None);
        assert_eq!(parse_date_time(""), None);
        assert_eq!(parse_date_time("2025-02-30T10:00"), None);
    }

    #[test]
    fn test_columns() {
        let titles: Vec<&str> = COLUMNS.iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Customer Name", "Phone", "Service", "Date & Time"]);
        assert_eq!(COLUMNS[1].width, 100);
    }

    #[test]
    fn test_form_defaults() {
        let defaults = FormDefaults::at(dt("2025-06-16 10:00"));
        assert!(defaults.customer_name.is_empty());
        assert!(defaults.phone_number.is_empty());
        assert_eq!(defaults.service, "Haircut - $30");
        assert_eq!(defaults.scheduled_at, "2025-06-16T10:00");
    }
}
