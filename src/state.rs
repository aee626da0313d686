use std::sync::{Mutex, MutexGuard};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::services::register::AppointmentRegister;

pub struct AppState {
    pub register: Mutex<AppointmentRegister>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            register: Mutex::new(AppointmentRegister::new()),
            config,
        }
    }

    pub fn register(&self) -> Result<MutexGuard<'_, AppointmentRegister>, AppError> {
        self.register.lock().map_err(|_| {
            tracing::error!("appointment register lock poisoned");
            AppError::Internal("appointment register lock poisoned".to_string())
        })
    }
}
