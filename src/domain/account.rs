use crate::domain::{ActionKind, Money};

/// The whole ledger state. Transitions copy it, never mutate it in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountState {
    pub is_active: bool, // accepts operations other than opening
    pub balance: Money,  // may go negative after repaying a loan
    pub loan: Money,     // outstanding principal, zero when none
}

impl AccountState {
    /// Shape every closed account is reset to.
    pub const CLOSED: Self = Self {
        is_active: false,
        balance: Money::ZERO,
        loan: Money::ZERO,
    };

    /// Balance credited when an account is opened.
    pub const OPENING_BALANCE: Money = Money::from_major(500);

    /// Empty starting state; whether it starts active is up to the caller.
    pub fn initial(is_active: bool) -> Self {
        Self {
            is_active,
            ..Self::CLOSED
        }
    }

    /// Whether any loan principal is outstanding.
    pub fn has_loan(&self) -> bool {
        !self.loan.is_zero()
    }

    /// Whether a presentation layer should offer `kind` for this state.
    pub fn offers(&self, kind: ActionKind) -> bool {
        match kind {
            ActionKind::OpenAccount => !self.is_active,
            _ => self.is_active,
        }
    }

    /// Every kind [`AccountState::offers`] allows, in declaration order.
    pub fn offered(&self) -> impl Iterator<Item = ActionKind> + '_ {
        ActionKind::ALL
            .into_iter()
            .filter(move |kind| self.offers(*kind))
    }
}
