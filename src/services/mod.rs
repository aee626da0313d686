pub mod listing;
pub mod register;
