use serde::{Deserialize, Serialize};

use crate::domain::common::validation::{max_length, require_text};
use crate::domain::common::EntityId;

/// Till, safe or bank account. The balance is maintained by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashAccount {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub location_id: Option<EntityId>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub balance: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashAccountDto {
    pub name: String,
    pub location_id: Option<EntityId>,
    pub currency: String,
}

impl Default for CashAccountDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            location_id: None,
            currency: default_currency(),
        }
    }
}

impl CashAccountDto {
    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.name, "Name")?;
        max_length(&self.name, 100, "Name")?;
        let currency = self.currency.trim();
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err("Currency must be a 3-letter code".into());
        }
        Ok(())
    }
}

/// Sum of balances per currency, in first-seen order.
pub fn totals_by_currency(accounts: &[CashAccount]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    for account in accounts.iter().filter(|a| a.is_active) {
        match totals.iter_mut().find(|(c, _)| *c == account.currency) {
            Some((_, sum)) => *sum += account.balance,
            None => totals.push((account.currency.clone(), account.balance)),
        }
    }
    for (_, sum) in totals.iter_mut() {
        *sum = crate::domain::common::round_money(*sum);
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: EntityId, currency: &str, balance: f64, is_active: bool) -> CashAccount {
        CashAccount {
            id,
            name: format!("Account {}", id),
            location_id: None,
            currency: currency.into(),
            balance,
            is_active,
        }
    }

    #[test]
    fn test_totals_by_currency() {
        let accounts = vec![
            account(1, "USD", 100.10, true),
            account(2, "EUR", 50.0, true),
            account(3, "USD", 0.20, true),
            account(4, "USD", 999.0, false),
        ];
        assert_eq!(
            totals_by_currency(&accounts),
            vec![("USD".to_string(), 100.3), ("EUR".to_string(), 50.0)]
        );
    }

    #[test]
    fn test_dto_validate() {
        let dto = CashAccountDto { name: "Till 1".into(), ..Default::default() };
        assert!(dto.validate().is_ok());
        let bad = CashAccountDto { currency: "US".into(), ..dto };
        assert_eq!(bad.validate().unwrap_err(), "Currency must be a 3-letter code");
    }
}
