use serde::{Deserialize, Serialize};

use crate::domain::common::validation::{
    max_length, non_empty, require_text, validate_optional_email,
};
use crate::domain::common::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

impl Customer {
    /// "Name (phone)" label for pickers.
    pub fn label(&self) -> String {
        match self.phone.as_deref().filter(|p| !p.is_empty()) {
            Some(phone) => format!("{} ({})", self.name, phone),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CustomerDto {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
}

impl CustomerDto {
    pub fn from_customer(c: &Customer) -> Self {
        Self {
            name: c.name.clone(),
            phone: c.phone.clone(),
            email: c.email.clone(),
            notes: c.notes.clone(),
        }
    }

    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.as_deref().and_then(non_empty),
            email: self.email.as_deref().and_then(non_empty),
            notes: self.notes.as_deref().and_then(non_empty),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.name, "Name")?;
        max_length(&self.name, 200, "Name")?;
        validate_optional_email(&self.email)?;
        if let Some(phone) = &self.phone {
            let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
            if digits < 5 {
                return Err("Phone number looks too short".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        let mut c = Customer {
            id: 1,
            name: "Ana".into(),
            phone: Some("555-0101".into()),
            email: None,
            notes: None,
            created_at: String::new(),
        };
        assert_eq!(c.label(), "Ana (555-0101)");
        c.phone = None;
        assert_eq!(c.label(), "Ana");
    }

    #[test]
    fn test_validate_phone() {
        let dto = CustomerDto { name: "Ana".into(), phone: Some("12".into()), ..Default::default() };
        assert!(dto.validate().is_err());
        let dto = CustomerDto { phone: Some("+1 555 0101".into()), ..dto };
        assert!(dto.validate().is_ok());
    }
}
