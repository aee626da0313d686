pub mod appointment;
pub mod service;

pub use appointment::Appointment;
pub use service::Service;
