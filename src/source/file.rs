use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::BufReader;
use tokio::sync::mpsc;

use crate::app::ResultEvent;

use super::{ResultSource, forward_line, read_line_lossy};

/// Replays an NDJSON file written by a reporter.
pub struct FileSource {
    path: PathBuf,
    display: String,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        let display = path.to_string_lossy().to_string();
        Self { path, display }
    }
}

#[async_trait]
impl ResultSource for FileSource {
    async fn stream(&self, tx: mpsc::UnboundedSender<ResultEvent>) -> Result<()> {
        let file = File::open(&self.path)
            .await
            .with_context(|| format!("failed to open {}", self.display))?;

        let _ = tx.send(ResultEvent::Started {
            source: self.display.clone(),
        });

        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        while let Some(line) = read_line_lossy(&mut reader, &mut buf)
            .await
            .with_context(|| format!("failed to read {}", self.display))?
        {
            if !forward_line(&line, &tx) {
                return Ok(());
            }
        }

        let _ = tx.send(ResultEvent::Finished);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.display
    }
}
