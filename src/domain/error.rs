use crate::domain::{Action, Money};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("{action} rejected: {reason}")]
    Rejected { action: Action, reason: Rejection },
}

/// Business rule that turned an action into a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("account is inactive")]
    Inactive,

    #[error("loan of {0} is outstanding")]
    LoanOutstanding(Money),

    #[error("balance of {0} is not zero")]
    BalanceNotZero(Money),
}
