use futures::Stream;

use crate::domain::{AccountState, Action, Error};

pub trait ActionStream {
    type Actions: Stream<Item = Result<Action, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::Actions;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}

pub trait OutputRepository {
    fn render(&mut self, state: &AccountState);
    fn flush(&mut self);
}
