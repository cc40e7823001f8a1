use contracts::domain::a007_cash_transaction::aggregate::{
    CashTransaction, CashTransactionRequest, TransactionKind,
};
use contracts::domain::common::validation::parse_amount;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a007_cash_transaction::api;
use crate::shared::form::parse_id;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionForm {
    pub kind: TransactionKind,
    pub amount: String,
    pub description: String,
    pub counter_account_id: String,
    pub pin: String,
}

impl TransactionForm {
    pub fn to_request(&self, account_id: i64) -> Result<CashTransactionRequest, String> {
        let request = CashTransactionRequest {
            account_id,
            kind: self.kind,
            amount: parse_amount(&self.amount, "Amount")?,
            description: self.description.clone(),
            counter_account_id: parse_id(&self.counter_account_id),
            pin: self.pin.trim().to_string(),
        }
        .normalized();
        request.validate()?;
        Ok(request)
    }
}

#[derive(Clone, Copy)]
pub struct TransactionViewModel {
    pub account_id: i64,
    pub form: RwSignal<TransactionForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl TransactionViewModel {
    pub fn new(account_id: i64) -> Self {
        Self {
            account_id,
            form: RwSignal::new(TransactionForm::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn save_command(&self, on_saved: Callback<CashTransaction>) {
        let request = match self.form.with_untracked(|f| f.to_request(self.account_id)) {
            Ok(r) => r,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let (form, error, saving) = (self.form, self.error, self.saving);
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = api::create_transaction(&request).await;
            saving.set(false);
            match result {
                Ok(tx) => on_saved.run(tx),
                Err(e) => {
                    // Never keep a rejected PIN in the form
                    form.update(|f| f.pin.clear());
                    error.set(Some(e.to_string()));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(kind: TransactionKind) -> TransactionForm {
        TransactionForm {
            kind,
            amount: "100.456".into(),
            description: " Float for the till ".into(),
            counter_account_id: String::new(),
            pin: "1234".into(),
        }
    }

    #[test]
    fn test_deposit_request() {
        let request = form(TransactionKind::Deposit).to_request(1).unwrap();
        assert_eq!(request.amount, 100.46);
        assert_eq!(request.description, "Float for the till");
        assert_eq!(request.counter_account_id, None);
    }

    #[test]
    fn test_counter_account_dropped_unless_transfer() {
        let mut f = form(TransactionKind::Withdrawal);
        f.counter_account_id = "2".into();
        assert_eq!(f.to_request(1).unwrap().counter_account_id, None);
    }

    #[test]
    fn test_transfer_needs_other_account() {
        let mut f = form(TransactionKind::Transfer);
        assert_eq!(f.to_request(1).unwrap_err(), "Select the account to transfer to");
        f.counter_account_id = "1".into();
        assert_eq!(f.to_request(1).unwrap_err(), "Cannot transfer to the same account");
        f.counter_account_id = "2".into();
        assert_eq!(f.to_request(1).unwrap().counter_account_id, Some(2));
    }

    #[test]
    fn test_amount_and_pin_checked() {
        let mut f = form(TransactionKind::Deposit);
        f.amount = "0".into();
        assert_eq!(f.to_request(1).unwrap_err(), "Amount must be greater than zero");

        let mut f = form(TransactionKind::Deposit);
        f.pin = "12".into();
        assert_eq!(f.to_request(1).unwrap_err(), "PIN must be 4 to 6 digits");
    }
}
