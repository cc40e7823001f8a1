use serde::{Deserialize, Serialize};

use crate::domain::common::validation::{
    max_length, non_empty, require_text, validate_optional_email,
};
use crate::domain::common::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SupplierDto {
    pub name: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

impl SupplierDto {
    pub fn from_supplier(s: &Supplier) -> Self {
        Self {
            name: s.name.clone(),
            contact_name: s.contact_name.clone(),
            phone: s.phone.clone(),
            email: s.email.clone(),
            address: s.address.clone(),
            notes: s.notes.clone(),
        }
    }

    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            contact_name: self.contact_name.as_deref().and_then(non_empty),
            phone: self.phone.as_deref().and_then(non_empty),
            email: self.email.as_deref().and_then(non_empty),
            address: self.address.as_deref().and_then(non_empty),
            notes: self.notes.as_deref().and_then(non_empty),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.name, "Name")?;
        max_length(&self.name, 200, "Name")?;
        validate_optional_email(&self.email)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let dto = SupplierDto {
            name: "Parts Co".into(),
            email: Some("sales@parts.example".into()),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        let bad = SupplierDto { email: Some("sales".into()), ..dto.clone() };
        assert_eq!(bad.validate().unwrap_err(), "Email address is not valid");

        let bad = SupplierDto { name: "".into(), ..dto };
        assert_eq!(bad.validate().unwrap_err(), "Name is required");
    }
}
