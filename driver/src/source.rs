use futures::FutureExt;

use common::records::InputRecord;

use crate::DriverError;

/// Where recorded input comes from.
pub trait RecordSource: Send {
    /// The next record, `None` once the source is exhausted.
    fn next_record<'f, 'own>(
        &'own mut self,
    ) -> futures::future::BoxFuture<'f, Result<Option<InputRecord>, DriverError>>
    where
        'own: 'f;
}

/// One JSON encoded [`InputRecord`] per line. Blank lines are ignored, lines
/// that do not decode are logged and skipped.
pub struct JsonLinesSource<R> {
    lines: tokio::io::Lines<tokio::io::BufReader<R>>,
    line_number: usize,
}

impl<R> JsonLinesSource<R>
where
    R: tokio::io::AsyncRead + Unpin,
{
    pub fn new(reader: R) -> Self {
        use tokio::io::AsyncBufReadExt;

        Self {
            lines: tokio::io::BufReader::new(reader).lines(),
            line_number: 0,
        }
    }
}

impl JsonLinesSource<tokio::fs::File> {
    pub async fn open<P>(path: P) -> Result<Self, DriverError>
    where
        P: AsRef<std::path::Path>,
    {
        let file = tokio::fs::File::open(path.as_ref()).await?;
        Ok(Self::new(file))
    }
}

impl JsonLinesSource<tokio::io::Stdin> {
    pub fn stdin() -> Self {
        Self::new(tokio::io::stdin())
    }
}

impl<R> RecordSource for JsonLinesSource<R>
where
    R: tokio::io::AsyncRead + Unpin + Send,
{
    fn next_record<'f, 'own>(
        &'own mut self,
    ) -> futures::future::BoxFuture<'f, Result<Option<InputRecord>, DriverError>>
    where
        'own: 'f,
    {
        async move {
            while let Some(line) = self.lines.next_line().await? {
                self.line_number += 1;

                if line.trim().is_empty() {
                    continue;
                }

                match serde_json::from_str(&line) {
                    Ok(record) => return Ok(Some(record)),
                    Err(e) => {
                        tracing::warn!(line = self.line_number, "Skipping malformed record: {}", e);
                    }
                }
            }

            Ok(None)
        }
        .boxed()
    }
}
