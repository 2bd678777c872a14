use crate::domain::{
    AccountState, Action, ActionStream, DeadLetterQueue, Error, OutputRepository, ledger,
};

use futures::StreamExt;

/// Holds the current account state and feeds it through the ledger one
/// action at a time.
#[derive(Debug)]
pub struct Engine<I, O, D>
where
    I: ActionStream,
    O: OutputRepository,
    D: DeadLetterQueue,
{
    ingestion: I,
    output_repository: O,
    dlq: D,
    state: AccountState,
}

impl<I, O, D> Engine<I, O, D>
where
    I: ActionStream,
    O: OutputRepository,
    D: DeadLetterQueue,
{
    pub fn new(ingestion: I, output_repository: O, dlq: D, initial: AccountState) -> Self {
        Self {
            ingestion,
            output_repository,
            dlq,
            state: initial,
        }
    }

    /// Replays every action from the ingestion stream.
    ///
    /// Rejected and malformed actions go to the dead-letter queue. An unknown
    /// action aborts the replay and is returned to the caller.
    pub async fn process(&mut self) -> Result<(), Error> {
        let mut res = self.ingestion.stream();

        while let Some(action) = res.next().await {
            match action {
                Ok(action) => {
                    if let Err(e) = self.dispatch(action) {
                        self.dlq.report(&e);
                    }
                }
                Err(e @ Error::UnknownAction(_)) => return Err(e),
                Err(e) => self.dlq.report(&e),
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, action: Action) -> Result<(), Error> {
        let next = ledger::apply(self.state, action)
            .map_err(|reason| Error::Rejected { action, reason })?;

        tracing::debug!(%action, before = ?self.state, after = ?next, "applied");
        self.state = next;
        Ok(())
    }

    pub fn state(&self) -> AccountState {
        self.state
    }

    pub fn flush(&mut self) {
        self.output_repository.render(&self.state);
        self.output_repository.flush();
    }
}
