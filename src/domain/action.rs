use std::str::FromStr;

use crate::domain::{Error, Money};

/// A request fed to the ledger. Only the money-moving variants carry an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    OpenAccount,
    Deposit { amount: Money },
    Withdraw { amount: Money },
    RequestLoan { amount: Money },
    PayLoan,
    CloseAccount,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::OpenAccount => ActionKind::OpenAccount,
            Action::Deposit { .. } => ActionKind::Deposit,
            Action::Withdraw { .. } => ActionKind::Withdraw,
            Action::RequestLoan { .. } => ActionKind::RequestLoan,
            Action::PayLoan => ActionKind::PayLoan,
            Action::CloseAccount => ActionKind::CloseAccount,
        }
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Action::Deposit { amount }
            | Action::Withdraw { amount }
            | Action::RequestLoan { amount } => write!(f, "{},amount={}", self.kind(), amount),
            _ => write!(f, "{}", self.kind()),
        }
    }
}

/// Payload-free tag of an [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    OpenAccount,
    Deposit,
    Withdraw,
    RequestLoan,
    PayLoan,
    CloseAccount,
}

impl ActionKind {
    pub const ALL: [ActionKind; 6] = [
        ActionKind::OpenAccount,
        ActionKind::Deposit,
        ActionKind::Withdraw,
        ActionKind::RequestLoan,
        ActionKind::PayLoan,
        ActionKind::CloseAccount,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            ActionKind::OpenAccount => "openAccount",
            ActionKind::Deposit => "deposit",
            ActionKind::Withdraw => "withdraw",
            ActionKind::RequestLoan => "requestLoan",
            ActionKind::PayLoan => "payLoan",
            ActionKind::CloseAccount => "closeAccount",
        }
    }

    /// Pairs the tag with its payload, if the shapes agree.
    pub fn with_amount(self, amount: Option<Money>) -> Result<Action, Error> {
        let action = match (self, amount) {
            (ActionKind::OpenAccount, None) => Action::OpenAccount,
            (ActionKind::Deposit, Some(amount)) => Action::Deposit { amount },
            (ActionKind::Withdraw, Some(amount)) => Action::Withdraw { amount },
            (ActionKind::RequestLoan, Some(amount)) => Action::RequestLoan { amount },
            (ActionKind::PayLoan, None) => Action::PayLoan,
            (ActionKind::CloseAccount, None) => Action::CloseAccount,
            (kind, Some(amount)) => {
                return Err(Error::Ingestion(format!(
                    "{} takes no amount, got {}",
                    kind, amount
                )));
            }
            (kind, None) => {
                return Err(Error::Ingestion(format!("{} requires an amount", kind)));
            }
        };
        Ok(action)
    }
}

impl core::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ActionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| Error::UnknownAction(s.to_string()))
    }
}
