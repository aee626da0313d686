use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BUSINESS_NAME: &str = "Salon Appointment System";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub business_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            business_name: DEFAULT_BUSINESS_NAME.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            business_name: lookup("BUSINESS_NAME")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_BUSINESS_NAME.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.port, 3000);
        assert_eq!(config.business_name, "Salon Appointment System");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(|key| match key {
            "PORT" => Some("8081".to_string()),
            "BUSINESS_NAME" => Some("Bella's Salon".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 8081);
        assert_eq!(config.business_name, "Bella's Salon");
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_lookup(|key| match key {
            "PORT" => Some("not-a-port".to_string()),
            "BUSINESS_NAME" => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 3000);
        assert_eq!(config.business_name, "Salon Appointment System");
    }
}
