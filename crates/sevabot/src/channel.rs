// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line-oriented stdin/stdout channel adapter.
//!
//! A local transport for development and manual testing. Each stdin line is
//! one inbound message:
//!
//! - `<sender@host> <text>` - text from an explicit counterparty (use the
//!   configured operator id to exercise admin commands)
//! - `attach <mime> <path>` - a document attachment read from disk
//! - anything else - text from the default counterparty
//!
//! Outbound messages are printed to stdout. The real messaging transport
//! implements the same [`ChannelAdapter`] seam out of tree.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tracing::info;

use sevabot_core::{
    AdapterType, ChannelAdapter, CounterpartyId, HealthStatus, InboundMessage, MessageId,
    OutboundMessage, PendingDocument, PluginAdapter, SevabotError,
};

pub struct StdioChannel {
    default_sender: CounterpartyId,
    lines: Mutex<Lines<BufReader<Stdin>>>,
    next_id: AtomicU64,
}

impl StdioChannel {
    pub fn new(default_sender: CounterpartyId) -> Self {
        Self {
            default_sender,
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
            next_id: AtomicU64::new(1),
        }
    }
}

fn parse_line(default_sender: &CounterpartyId, id: u64, line: &str) -> InboundMessage {
    let (sender, rest) = match line.split_once(' ') {
        Some((first, rest)) if first.contains('@') => {
            (CounterpartyId(first.to_string()), rest.trim())
        }
        _ => (default_sender.clone(), line),
    };

    let document = rest.strip_prefix("attach ").and_then(|spec| {
        let (mime, path) = spec.split_once(' ')?;
        let path = path.trim();
        let data = std::fs::read(path).ok()?;
        let filename = std::path::Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "attachment".to_string());
        Some(PendingDocument {
            mime_type: mime.to_string(),
            filename,
            data,
        })
    });

    let text = if document.is_some() {
        None
    } else {
        Some(rest.to_string())
    };

    InboundMessage {
        id: MessageId(format!("stdio-{id}")),
        sender_id: sender,
        text,
        document,
        is_group: false,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }
}

#[async_trait]
impl PluginAdapter for StdioChannel {
    fn name(&self) -> &str {
        "stdio"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Channel
    }

    async fn health_check(&self) -> Result<HealthStatus, SevabotError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), SevabotError> {
        Ok(())
    }
}

#[async_trait]
impl ChannelAdapter for StdioChannel {
    async fn connect(&mut self) -> Result<(), SevabotError> {
        info!(default_sender = %self.default_sender, "stdio channel ready");
        Ok(())
    }

    async fn send(&self, msg: OutboundMessage) -> Result<MessageId, SevabotError> {
        match &msg.media {
            Some(media) => println!(
                "[sevabot -> {}] {}\n  (media: {} {}, {} bytes)",
                msg.recipient_id,
                msg.text,
                media.mime_type,
                media.filename,
                media.data.len()
            ),
            None => println!("[sevabot -> {}] {}", msg.recipient_id, msg.text),
        }
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        Ok(MessageId(format!("stdio-out-{id}")))
    }

    async fn receive(&self) -> Result<InboundMessage, SevabotError> {
        let mut lines = self.lines.lock().await;
        let line = lines.next_line().await.map_err(|e| SevabotError::Channel {
            message: "failed to read from stdin".to_string(),
            source: Some(Box::new(e)),
        })?;
        let Some(line) = line else {
            return Err(SevabotError::Channel {
                message: "stdin closed".to_string(),
                source: None,
            });
        };
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        Ok(parse_line(&self.default_sender, id, line.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_sender() -> CounterpartyId {
        CounterpartyId("local@c.us".to_string())
    }

    #[test]
    fn bare_text_comes_from_default_sender() {
        let msg = parse_line(&default_sender(), 1, "hello");
        assert_eq!(msg.sender_id, default_sender());
        assert_eq!(msg.text.as_deref(), Some("hello"));
        assert!(msg.document.is_none());
        assert!(!msg.is_group);
    }

    #[test]
    fn explicit_sender_prefix_is_recognized() {
        let msg = parse_line(&default_sender(), 2, "918080032223@c.us status WO-1-AAAAAA done");
        assert_eq!(msg.sender_id.as_str(), "918080032223@c.us");
        assert_eq!(msg.text.as_deref(), Some("status WO-1-AAAAAA done"));
    }

    #[test]
    fn attach_line_loads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.pdf");
        std::fs::write(&path, b"%PDF-1.4 test").unwrap();

        let line = format!("attach application/pdf {}", path.display());
        let msg = parse_line(&default_sender(), 3, &line);
        let doc = msg.document.unwrap();
        assert_eq!(doc.mime_type, "application/pdf");
        assert_eq!(doc.filename, "scan.pdf");
        assert_eq!(doc.data, b"%PDF-1.4 test");
        assert!(msg.text.is_none());
    }

    #[test]
    fn attach_with_missing_file_degrades_to_text() {
        let msg = parse_line(&default_sender(), 4, "attach application/pdf /no/such/file.pdf");
        assert!(msg.document.is_none());
        assert_eq!(
            msg.text.as_deref(),
            Some("attach application/pdf /no/such/file.pdf")
        );
    }
}
