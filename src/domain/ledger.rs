//! The account state machine.
//!
//! Both entry points are pure: they take the current state by value and hand
//! back the next one. Rejected actions leave the state exactly as it was.

use crate::domain::{AccountState, Action, Money, Rejection};

/// Next state for `action`, or the business rule that rejected it.
pub fn apply(state: AccountState, action: Action) -> Result<AccountState, Rejection> {
    if !state.is_active && action != Action::OpenAccount {
        return Err(Rejection::Inactive);
    }

    match action {
        Action::OpenAccount => Ok(AccountState {
            balance: AccountState::OPENING_BALANCE,
            is_active: true,
            ..state
        }),
        Action::Deposit { amount } => Ok(AccountState {
            balance: state.balance + amount,
            ..state
        }),
        Action::Withdraw { amount } => Ok(AccountState {
            balance: state.balance - amount,
            ..state
        }),
        Action::RequestLoan { amount } => {
            if state.has_loan() {
                return Err(Rejection::LoanOutstanding(state.loan));
            }
            Ok(AccountState {
                loan: amount,
                balance: state.balance + amount,
                ..state
            })
        }
        Action::PayLoan => Ok(AccountState {
            balance: state.balance - state.loan,
            loan: Money::ZERO,
            ..state
        }),
        Action::CloseAccount => {
            if state.has_loan() {
                return Err(Rejection::LoanOutstanding(state.loan));
            }
            if !state.balance.is_zero() {
                return Err(Rejection::BalanceNotZero(state.balance));
            }
            Ok(AccountState::CLOSED)
        }
    }
}

/// Next state for `action`; a rejected action returns `state` unchanged.
pub fn transition(state: AccountState, action: Action) -> AccountState {
    apply(state, action).unwrap_or(state)
}
