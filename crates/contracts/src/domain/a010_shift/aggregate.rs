use serde::{Deserialize, Serialize};

use crate::domain::common::validation::require_non_negative;
use crate::domain::common::EntityId;

/// Work session of one user at one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: EntityId,
    pub user_id: EntityId,
    pub location_id: EntityId,
    #[serde(default)]
    pub location_name: Option<String>,
    pub started_at: String,
    #[serde(default)]
    pub ended_at: Option<String>,
    #[serde(default)]
    pub opening_cash: Option<f64>,
}

impl Shift {
    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }

    pub fn location_label(&self) -> String {
        self.location_name
            .clone()
            .unwrap_or_else(|| format!("Location #{}", self.location_id))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockInRequest {
    pub location_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_cash: Option<f64>,
}

impl ClockInRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.location_id <= 0 {
            return Err("Select a location".into());
        }
        if let Some(cash) = self.opening_cash {
            require_non_negative(cash, "Opening cash")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ClockOutRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_cash: Option<f64>,
}

impl ClockOutRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(cash) = self.closing_cash {
            require_non_negative(cash, "Closing cash")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_open_and_label() {
        let shift: Shift = serde_json::from_str(
            r#"{"id":1,"user_id":2,"location_id":3,"started_at":"2024-01-01T08:00:00Z"}"#,
        )
        .unwrap();
        assert!(shift.is_open());
        assert_eq!(shift.location_label(), "Location #3");
    }

    #[test]
    fn test_clock_in_validate() {
        assert!(ClockInRequest { location_id: 0, opening_cash: None }.validate().is_err());
        assert!(ClockInRequest { location_id: 1, opening_cash: Some(-1.0) }.validate().is_err());
        assert!(ClockInRequest { location_id: 1, opening_cash: Some(150.0) }.validate().is_ok());
        assert!(ClockOutRequest { closing_cash: Some(-0.01) }.validate().is_err());
    }
}
