pub mod account;
pub mod action;
pub mod error;
pub mod ledger;
pub mod money;
pub mod traits;

pub use account::AccountState;
pub use action::{Action, ActionKind};
pub use error::{Error, Rejection};
pub use money::Money;
pub use traits::{ActionStream, DeadLetterQueue, OutputRepository};
