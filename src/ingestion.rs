use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::pin::Pin;

use futures::stream::{self, Stream};
use serde::Deserialize;

use crate::domain::{Action, ActionKind, ActionStream, Error, Money};

/// Reads an action script with a `type, amount` header.
pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Result<Self, Error> {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Ok(Self { reader: Some(rdr) })
    }
}

impl CsvReader<File> {
    pub fn open(path: &Path) -> Result<Self, Error> {
        Self::new(File::open(path)?)
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "type")]
    kind: String,
    amount: Option<String>,
}

impl TryFrom<CsvRow> for Action {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        // The tag decides first, so an unknown action is never masked by a bad amount.
        let kind = row.kind.parse::<ActionKind>()?;
        let amount = match row.amount.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(Money::from_decimal_str(raw).ok_or_else(|| {
                Error::Ingestion(format!("Invalid amount for {}: {}", kind, raw))
            })?),
        };
        kind.with_amount(amount)
    }
}

impl<R: Read + Send + 'static> ActionStream for CsvReader<R> {
    type Actions = Pin<Box<dyn Stream<Item = Result<Action, Error>> + Send>>;

    fn stream(&mut self) -> Self::Actions {
        // Taking the reader lets the iterator own its data and be 'static.
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                return Box::pin(stream::iter(Vec::<Result<Action, Error>>::new()));
            }
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Action::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use futures::StreamExt;

    use super::*;

    async fn collect(script: &'static str) -> Vec<Result<Action, Error>> {
        let mut reader = CsvReader::new(Cursor::new(script)).unwrap();
        reader.stream().collect().await
    }

    #[tokio::test]
    async fn reads_actions_with_and_without_amounts() {
        let rows = collect(
            "type, amount\n\
             openAccount,\n\
             deposit, 150\n\
             withdraw, 50.5\n\
             requestLoan, 5000\n\
             payLoan\n\
             closeAccount,\n",
        )
        .await;

        let actions: Vec<Action> = rows.into_iter().map(Result::unwrap).collect();
        assert_eq!(
            actions,
            vec![
                Action::OpenAccount,
                Action::Deposit {
                    amount: Money::from_major(150)
                },
                Action::Withdraw {
                    amount: Money(505_000)
                },
                Action::RequestLoan {
                    amount: Money::from_major(5000)
                },
                Action::PayLoan,
                Action::CloseAccount,
            ]
        );
    }

    #[tokio::test]
    async fn malformed_rows_do_not_stop_the_stream() {
        let rows = collect(
            "type, amount\n\
             deposit,\n\
             withdraw, lots\n\
             payLoan, 10\n\
             deposit, 1\n",
        )
        .await;

        assert_eq!(rows.len(), 4);
        assert!(rows[..3].iter().all(|r| matches!(r, Err(Error::Ingestion(_)))));
        assert!(matches!(rows[3], Ok(Action::Deposit { .. })));
    }

    #[tokio::test]
    async fn unknown_tag_surfaces_as_unknown_action() {
        let rows = collect("type, amount\ntransfer, 10\n").await;
        assert!(matches!(&rows[0], Err(Error::UnknownAction(tag)) if tag == "transfer"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = CsvReader::open(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(Error::IO(_))));
    }

    #[tokio::test]
    async fn unknown_tag_wins_over_unparseable_amount() {
        let rows = collect("type, amount\ntransfer, lots\n").await;
        assert!(matches!(&rows[0], Err(Error::UnknownAction(tag)) if tag == "transfer"));
    }

    #[tokio::test]
    async fn tags_are_matched_exactly() {
        let rows = collect("type, amount\nDEPOSIT, 150\n").await;
        assert!(matches!(&rows[0], Err(Error::UnknownAction(tag)) if tag == "DEPOSIT"));
    }

    #[tokio::test]
    async fn stream_is_consumed_once() {
        let mut reader = CsvReader::new(Cursor::new("type, amount\npayLoan\n")).unwrap();
        assert_eq!(reader.stream().count().await, 1);
        assert_eq!(reader.stream().count().await, 0);
    }
}
