// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Channel adapter trait for the messaging transport.
//!
//! The underlying transport (connection handling, attachment download,
//! typing indicators, authentication) lives behind this seam; the intake
//! core only consumes delivered events and emits outbound messages.

use async_trait::async_trait;

use crate::error::SevabotError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{InboundMessage, MessageId, OutboundMessage};

/// Adapter for the bidirectional messaging channel.
#[async_trait]
pub trait ChannelAdapter: PluginAdapter {
    /// Establishes a connection to the messaging platform.
    async fn connect(&mut self) -> Result<(), SevabotError>;

    /// Sends a message through the channel.
    async fn send(&self, msg: OutboundMessage) -> Result<MessageId, SevabotError>;

    /// Receives the next inbound message from the channel.
    ///
    /// Attachments are already downloaded by the adapter; the intake core
    /// never touches transport-level media handles.
    async fn receive(&self) -> Result<InboundMessage, SevabotError>;
}
