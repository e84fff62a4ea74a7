use serde::{Deserialize, Serialize};

/// The page kinds the engine produces copy for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Location,
    LocationService,
    Reviews,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Location => "location",
            EntityKind::LocationService => "location_service",
            EntityKind::Reviews => "reviews",
        }
    }
}

/// Identifies one page. City and service are display names ("Kirkland",
/// "Bathtub Refinishing"), which is also what the templates print.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityKey {
    Location { city: String },
    LocationService { city: String, service: String },
    Reviews { city: String },
}

impl EntityKey {
    pub fn location(city: impl Into<String>) -> Self {
        EntityKey::Location { city: city.into() }
    }

    pub fn location_service(city: impl Into<String>, service: impl Into<String>) -> Self {
        EntityKey::LocationService {
            city: city.into(),
            service: service.into(),
        }
    }

    pub fn reviews(city: impl Into<String>) -> Self {
        EntityKey::Reviews { city: city.into() }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            EntityKey::Location { .. } => EntityKind::Location,
            EntityKey::LocationService { .. } => EntityKind::LocationService,
            EntityKey::Reviews { .. } => EntityKind::Reviews,
        }
    }

    pub fn city(&self) -> &str {
        match self {
            EntityKey::Location { city }
            | EntityKey::LocationService { city, .. }
            | EntityKey::Reviews { city } => city,
        }
    }

    /// The string fed to the hash. A review set hashes like its location page, so both
    /// show the same reviews; a service page hashes on `"{city}+{service}"`.
    pub fn identifier(&self) -> String {
        match self {
            EntityKey::Location { city } | EntityKey::Reviews { city } => city.clone(),
            EntityKey::LocationService { city, service } => format!("{city}+{service}"),
        }
    }
}
