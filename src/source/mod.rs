pub mod command;
pub mod file;
pub mod record;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::app::ResultEvent;

pub use command::CommandSource;
pub use file::FileSource;
pub use record::decode_line;

/// Producer of decoded results for the pane.
#[async_trait]
pub trait ResultSource: Send + Sync {
    /// Stream every result over the channel, bracketed by
    /// `Started` and `Finished` events.
    async fn stream(&self, tx: mpsc::UnboundedSender<ResultEvent>) -> Result<()>;

    /// Display name (file path or command line).
    fn name(&self) -> &str;
}

/// Where the pane reads results from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    File(PathBuf),
    Command(Vec<String>),
}

impl SourceSpec {
    /// Resolve command-line arguments: `<file>` or `-- <cmd> [args..]`,
    /// falling back to the configured command.
    pub fn from_args(args: &[String], configured: Option<Vec<String>>) -> Option<SourceSpec> {
        match args {
            [] => configured.map(SourceSpec::Command),
            [flag, command @ ..] if flag == "--" => {
                if command.is_empty() {
                    None
                } else {
                    Some(SourceSpec::Command(command.to_vec()))
                }
            }
            [path] => Some(SourceSpec::File(PathBuf::from(path))),
            _ => None,
        }
    }
}

/// Construct the source described by `spec`.
pub fn open(spec: SourceSpec) -> Arc<dyn ResultSource> {
    match spec {
        SourceSpec::File(path) => Arc::new(FileSource::new(path)),
        SourceSpec::Command(argv) => Arc::new(CommandSource::new(argv)),
    }
}

/// Read the next `\n`-terminated line, replacing invalid UTF-8 so one bad
/// byte never ends the stream. `Ok(None)` at end of input.
async fn read_line_lossy<R>(reader: &mut R, buf: &mut Vec<u8>) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    if reader.read_until(b'\n', buf).await? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Decode `line` and forward it. Returns false once the receiver is gone.
fn forward_line(line: &str, tx: &mpsc::UnboundedSender<ResultEvent>) -> bool {
    match decode_line(line) {
        Some(result) => tx.send(ResultEvent::Result(result)).is_ok(),
        None => true,
    }
}
