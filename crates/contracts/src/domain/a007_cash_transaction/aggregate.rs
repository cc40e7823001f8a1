use serde::{Deserialize, Serialize};

use crate::domain::common::validation::{require_positive, require_text, validate_pin};
use crate::domain::common::{round_money, EntityId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[default]
    Deposit,
    Withdrawal,
    Transfer,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 3] = [
        TransactionKind::Deposit,
        TransactionKind::Withdrawal,
        TransactionKind::Transfer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::Transfer => "transfer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::Transfer => "Transfer",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "withdrawal" => TransactionKind::Withdrawal,
            "transfer" => TransactionKind::Transfer,
            _ => TransactionKind::Deposit,
        }
    }

    /// Effect on the source account balance for display.
    pub fn signed(self, amount: f64) -> f64 {
        match self {
            TransactionKind::Deposit => amount,
            TransactionKind::Withdrawal | TransactionKind::Transfer => -amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashTransaction {
    pub id: EntityId,
    pub account_id: EntityId,
    pub kind: TransactionKind,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub counter_account_id: Option<EntityId>,
    pub created_at: String,
    #[serde(default)]
    pub created_by: Option<String>,
}

/// Payload for `POST /cash-transactions/`. The PIN is checked server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashTransactionRequest {
    pub account_id: EntityId,
    pub kind: TransactionKind,
    pub amount: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_account_id: Option<EntityId>,
    pub pin: String,
}

impl CashTransactionRequest {
    pub fn normalized(mut self) -> Self {
        self.amount = round_money(self.amount);
        self.description = self.description.trim().to_string();
        if self.kind != TransactionKind::Transfer {
            self.counter_account_id = None;
        }
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        require_positive(self.amount, "Amount")?;
        require_text(&self.description, "Description")?;
        if self.kind == TransactionKind::Transfer {
            match self.counter_account_id {
                None => return Err("Select the account to transfer to".into()),
                Some(id) if id == self.account_id => {
                    return Err("Cannot transfer to the same account".into())
                }
                Some(_) => {}
            }
        }
        validate_pin(&self.pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CashTransactionRequest {
        CashTransactionRequest {
            account_id: 1,
            kind: TransactionKind::Withdrawal,
            amount: 20.0,
            description: "Change for till".into(),
            counter_account_id: Some(2),
            pin: "4321".into(),
        }
    }

    #[test]
    fn test_normalized_drops_counter_account() {
        let r = request().normalized();
        assert_eq!(r.counter_account_id, None);
        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("counter_account_id").is_none());
        assert_eq!(json["kind"], "withdrawal");
    }

    #[test]
    fn test_validate() {
        assert!(request().normalized().validate().is_ok());

        let r = CashTransactionRequest { amount: 0.0, ..request() };
        assert_eq!(r.validate().unwrap_err(), "Amount must be greater than zero");

        let r = CashTransactionRequest { pin: "12".into(), ..request() };
        assert_eq!(r.validate().unwrap_err(), "PIN must be 4 to 6 digits");

        let r = CashTransactionRequest { kind: TransactionKind::Transfer, counter_account_id: Some(1), ..request() };
        assert_eq!(r.validate().unwrap_err(), "Cannot transfer to the same account");

        let r = CashTransactionRequest { kind: TransactionKind::Transfer, counter_account_id: None, ..request() };
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_signed() {
        assert_eq!(TransactionKind::Deposit.signed(5.0), 5.0);
        assert_eq!(TransactionKind::Transfer.signed(5.0), -5.0);
    }
}
