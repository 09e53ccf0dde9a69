use crate::domain::ports::Account;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_amount, validate_within_limit};

/// Flat fee charged by [`BankAccount::apply_fee`].
pub const ACCOUNT_FEE: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BankAccount {
    owner: String,
    balance: f64,
}

impl BankAccount {
    pub fn new(owner: impl Into<String>) -> Self {
        Self::with_balance(owner, 0.0)
    }

    pub fn with_balance(owner: impl Into<String>, balance: f64) -> Self {
        let owner = owner.into();
        tracing::debug!(owner = %owner, balance, "Opened account");
        Self { owner, balance }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Subtracts the flat fee. There is no floor: the balance may go negative.
    pub(crate) fn apply_fee(&mut self) {
        self.balance -= ACCOUNT_FEE;
        tracing::debug!(owner = %self.owner, balance = self.balance, "Applied account fee");
    }
}

impl Account for BankAccount {
    fn deposit(&mut self, amount: f64) -> Result<()> {
        if let Err(e) = validate_positive_amount("amount", amount) {
            tracing::warn!(owner = %self.owner, amount, "Deposit rejected");
            return Err(e);
        }
        self.balance += amount;
        tracing::debug!(owner = %self.owner, amount, balance = self.balance, "Deposit");
        Ok(())
    }

    fn withdraw(&mut self, amount: f64) -> Result<()> {
        if let Err(e) = validate_within_limit("amount", amount, self.balance) {
            tracing::warn!(owner = %self.owner, amount, balance = self.balance, "Withdrawal rejected");
            return Err(e);
        }
        self.balance -= amount;
        tracing::debug!(owner = %self.owner, amount, balance = self.balance, "Withdrawal");
        Ok(())
    }
}
