use std::fmt;

use serde::{Deserialize, Serialize};

/// Offered services, in the order they appear in the picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Service {
    #[default]
    Haircut,
    HairColoring,
    Manicure,
    Pedicure,
    Facial,
}

impl Service {
    pub const ALL: [Service; 5] = [
        Service::Haircut,
        Service::HairColoring,
        Service::Manicure,
        Service::Pedicure,
        Service::Facial,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Service::Haircut => "Haircut",
            Service::HairColoring => "Hair Coloring",
            Service::Manicure => "Manicure",
            Service::Pedicure => "Pedicure",
            Service::Facial => "Facial",
        }
    }

    /// Price in whole dollars.
    pub fn price(&self) -> u32 {
        match self {
            Service::Haircut => 30,
            Service::HairColoring => 80,
            Service::Manicure => 25,
            Service::Pedicure => 35,
            Service::Facial => 50,
        }
    }

    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Maps a picker label back to its service. Blank or unknown labels are
    /// not a selection.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        Service::ALL.into_iter().find(|s| s.matches_label(label))
    }

    fn matches_label(&self, label: &str) -> bool {
        label
            .strip_prefix(self.name())
            .and_then(|rest| rest.strip_prefix(" - $"))
            .is_some_and(|price| {
                !price.starts_with('0')
                    && price.bytes().all(|b| b.is_ascii_digit())
                    && price.parse::<u32>().ok() == Some(self.price())
            })
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ${}", self.name(), self.price())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let labels: Vec<String> = Service::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Haircut - $30",
                "Hair Coloring - $80",
                "Manicure - $25",
                "Pedicure - $35",
                "Facial - $50",
            ]
        );
    }

    #[test]
    fn test_display_matches_label() {
        for service in Service::ALL {
            assert_eq!(service.to_string(), service.label());
        }
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Service::from_label("Facial - $50"), Some(Service::Facial));
        assert_eq!(
            Service::from_label("  Hair Coloring - $80 "),
            Some(Service::HairColoring)
        );
        assert_eq!(Service::from_label(""), None);
        assert_eq!(Service::from_label("   "), None);
        assert_eq!(Service::from_label("Massage - $90"), None);
        assert_eq!(Service::from_label("haircut - $30"), None);
        assert_eq!(Service::from_label("Haircut - $030"), None);
        assert_eq!(Service::from_label("Haircut - $+30"), None);
        assert_eq!(Service::from_label("Haircut - $35"), None);
        assert_eq!(Service::from_label("Haircut"), None);
    }

    #[test]
    fn test_default_is_first_entry() {
        assert_eq!(Service::default(), Service::ALL[0]);
    }
}
