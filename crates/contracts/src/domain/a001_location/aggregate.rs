use serde::{Deserialize, Serialize};

use crate::domain::common::validation::{max_length, non_empty, require_text};
use crate::domain::common::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    #[default]
    Store,
    Warehouse,
}

impl LocationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LocationKind::Store => "store",
            LocationKind::Warehouse => "warehouse",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LocationKind::Store => "Store",
            LocationKind::Warehouse => "Warehouse",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "warehouse" => LocationKind::Warehouse,
            _ => LocationKind::Store,
        }
    }
}

/// Store branch or warehouse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub kind: LocationKind,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Create / update payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LocationDto {
    pub name: String,
    pub kind: LocationKind,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
}

impl LocationDto {
    pub fn from_location(l: &Location) -> Self {
        Self {
            name: l.name.clone(),
            kind: l.kind,
            address: l.address.clone(),
            phone: l.phone.clone(),
            is_active: l.is_active,
        }
    }

    /// Trims text fields; blank optionals become `None`.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.address = self.address.as_deref().and_then(non_empty);
        self.phone = self.phone.as_deref().and_then(non_empty);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.name, "Name")?;
        max_length(&self.name, 100, "Name")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_defaults() {
        let loc: Location = serde_json::from_str(r#"{"id":1,"name":"Main"}"#).unwrap();
        assert_eq!(loc.kind, LocationKind::Store);
        assert!(loc.is_active);
    }

    #[test]
    fn test_dto_normalized_and_validate() {
        let dto = LocationDto {
            name: "  Depot ".into(),
            kind: LocationKind::Warehouse,
            address: Some("   ".into()),
            phone: Some(" 555 ".into()),
            is_active: true,
        }
        .normalized();
        assert_eq!(dto.name, "Depot");
        assert_eq!(dto.address, None);
        assert_eq!(dto.phone.as_deref(), Some("555"));
        assert!(dto.validate().is_ok());
        assert!(LocationDto::default().validate().is_err());
    }
}
