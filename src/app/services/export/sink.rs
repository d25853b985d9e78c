//! Delivery of the serialized workbook
//!
//! A [`DeliverySink`] accepts a named binary payload. The file-system sink
//! writes it into the output directory; the memory sink keeps it for
//! inspection by tests and embedding callers.

use crate::error::Result;
use std::future::Future;
use std::path::PathBuf;
use tracing::debug;

/// Accepts a named binary payload and reports where it went
pub trait DeliverySink {
    fn deliver(
        &mut self,
        file_name: &str,
        payload: Vec<u8>,
    ) -> impl Future<Output = Result<String>> + Send;
}

/// Writes payloads as files under `output_dir`, creating it if needed
#[derive(Debug, Clone)]
pub struct FileSystemSink {
    output_dir: PathBuf,
}

impl FileSystemSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }
}

impl DeliverySink for FileSystemSink {
    async fn deliver(&mut self, file_name: &str, payload: Vec<u8>) -> Result<String> {
        tokio::fs::create_dir_all(&self.output_dir).await?;
        let path = self.output_dir.join(file_name);
        tokio::fs::write(&path, &payload).await?;
        debug!("Wrote {} bytes to {}", payload.len(), path.display());
        Ok(path.display().to_string())
    }
}

/// One payload handed to a [`MemorySink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub file_name: String,
    pub payload: Vec<u8>,
}

/// Keeps delivered payloads in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    deliveries: Vec<Delivery>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }
}

impl DeliverySink for MemorySink {
    async fn deliver(&mut self, file_name: &str, payload: Vec<u8>) -> Result<String> {
        self.deliveries.push(Delivery {
            file_name: file_name.to_string(),
            payload,
        });
        Ok(file_name.to_string())
    }
}
