use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::Level;

use crate::domain::AccountState;

#[derive(Parser, Debug)]
#[command(
    name = "bank_ledger",
    version,
    about = "Replays account actions through the ledger state machine",
    long_about = None
)]
pub struct Config {
    /// Path to the actions CSV file to replay
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Whether the account starts active, before any openAccount
    #[arg(long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
    pub initial_active: bool,

    /// Most verbose level written to stderr
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: Level,
}

impl Config {
    pub fn initial_state(&self) -> AccountState {
        AccountState::initial(self.initial_active)
    }
}
