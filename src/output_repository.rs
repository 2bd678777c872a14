use std::io::{self, Write};

use crate::domain::{AccountState, ActionKind, OutputRepository};

/// Writes the last rendered state as CSV to stdout on flush.
#[derive(Default, Debug)]
pub struct StdOutOutput {
    state: Option<AccountState>,
}

impl StdOutOutput {
    pub fn new() -> Self {
        Self { state: None }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "balance,loan,active,offers")?;
        if let Some(state) = &self.state {
            let offers: Vec<&str> = state.offered().map(|kind: ActionKind| kind.tag()).collect();
            writeln!(
                out,
                "{},{},{},{}",
                state.balance,
                state.loan,
                state.is_active,
                offers.join(";")
            )?;
        }
        Ok(())
    }
}

impl OutputRepository for StdOutOutput {
    fn render(&mut self, state: &AccountState) {
        self.state = Some(*state);
    }

    fn flush(&mut self) {
        let stdout = io::stdout();
        if let Err(e) = self.write_to(&mut stdout.lock()) {
            tracing::error!(%e, "failed to write account state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Money;

    fn rendered(state: AccountState) -> String {
        let mut output = StdOutOutput::new();
        output.render(&state);
        let mut buf = Vec::new();
        output.write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn renders_active_state_with_offered_operations() {
        let state = AccountState {
            is_active: true,
            balance: Money::from_major(5600),
            loan: Money::from_major(5000),
        };
        assert_eq!(
            rendered(state),
            "balance,loan,active,offers\n\
             5600.0000,5000.0000,true,deposit;withdraw;requestLoan;payLoan;closeAccount\n"
        );
    }

    #[test]
    fn renders_closed_state() {
        assert_eq!(
            rendered(AccountState::CLOSED),
            "balance,loan,active,offers\n0.0000,0.0000,false,openAccount\n"
        );
    }

    #[test]
    fn header_only_before_anything_is_rendered() {
        let mut buf = Vec::new();
        StdOutOutput::new().write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "balance,loan,active,offers\n");
    }
}
