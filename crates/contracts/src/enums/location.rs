use serde::{Deserialize, Serialize};

/// Warehouse locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Calicut,
    Malappuram,
    Thrissur,
}

impl Location {
    pub fn code(&self) -> &'static str {
        match self {
            Location::Calicut => "Calicut",
            Location::Malappuram => "Malappuram",
            Location::Thrissur => "Thrissur",
        }
    }

    pub fn all() -> Vec<Location> {
        vec![Location::Calicut, Location::Malappuram, Location::Thrissur]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Calicut" => Some(Location::Calicut),
            "Malappuram" => Some(Location::Malappuram),
            "Thrissur" => Some(Location::Thrissur),
            _ => None,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
