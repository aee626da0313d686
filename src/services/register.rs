use chrono::{Local, NaiveDateTime};

use crate::models::{Appointment, Service};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter customer name.")]
    EmptyName,

    #[error("Please enter phone number.")]
    EmptyPhone,

    #[error("Please select a service.")]
    NoServiceSelected,

    #[error("Please select a future date and time.")]
    PastDateTime,
}

impl ValidationError {
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "empty_name",
            ValidationError::EmptyPhone => "empty_phone",
            ValidationError::NoServiceSelected => "no_service_selected",
            ValidationError::PastDateTime => "past_date_time",
        }
    }
}

/// Append-only, in-memory list of booked appointments.
///
/// Not synchronized; callers sharing it across threads must wrap it.
#[derive(Debug, Default)]
pub struct AppointmentRegister {
    appointments: Vec<Appointment>,
}

impl AppointmentRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and books an appointment against the local wall clock.
    pub fn submit(
        &mut self,
        customer_name: &str,
        phone_number: &str,
        service: Option<Service>,
        scheduled_at: NaiveDateTime,
    ) -> Result<Appointment, ValidationError> {
        let now = Local::now().naive_local();
        self.submit_at(customer_name, phone_number, service, scheduled_at, now)
    }

    /// Same as [`submit`](Self::submit) with an explicit "current time".
    ///
    /// Checks run in field order and stop at the first failure. A rejected
    /// submission leaves the register untouched.
    pub fn submit_at(
        &mut self,
        customer_name: &str,
        phone_number: &str,
        service: Option<Service>,
        scheduled_at: NaiveDateTime,
        now: NaiveDateTime,
    ) -> Result<Appointment, ValidationError> {
        let (customer_name, phone_number, service) =
            Self::check_details(customer_name, phone_number, service)?;

        if scheduled_at <= now {
            return Err(ValidationError::PastDateTime);
        }

        let appointment = Appointment {
            id: self.appointments.len() as u64 + 1,
            customer_name: customer_name.to_string(),
            phone_number: phone_number.to_string(),
            service,
            scheduled_at,
        };
        self.appointments.push(appointment.clone());

        Ok(appointment)
    }

    /// Runs the checks that precede the date-time check and returns the
    /// trimmed name and phone with the selected service.
    pub fn check_details<'a>(
        customer_name: &'a str,
        phone_number: &'a str,
        service: Option<Service>,
    ) -> Result<(&'a str, &'a str, Service), ValidationError> {
        let customer_name = customer_name.trim();
        if customer_name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let phone_number = phone_number.trim();
        if phone_number.is_empty() {
            return Err(ValidationError::EmptyPhone);
        }

        let service = service.ok_or(ValidationError::NoServiceSelected)?;

        Ok((customer_name, phone_number, service))
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn get(&self, id: u64) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}
