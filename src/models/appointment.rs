use chrono::NaiveDateTime;
use serde::Serialize;

use super::Service;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    pub id: u64,
    pub customer_name: String,
    pub phone_number: String,
    pub service: Service,
    pub scheduled_at: NaiveDateTime,
}
