use crate::domain::{DeadLetterQueue, Error};

/// Logs every rejected or unreadable action at `warn`.
#[derive(Default, Debug)]
pub struct StdErrDLQ {}

impl DeadLetterQueue for StdErrDLQ {
    fn report(&self, error: &Error) {
        tracing::warn!(%error, "dead letter");
    }
}
