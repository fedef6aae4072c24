// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for external collaborators.

pub mod adapter;
pub mod channel;
pub mod responder;
pub mod storage;

pub use adapter::PluginAdapter;
pub use channel::ChannelAdapter;
pub use responder::FallbackResponder;
pub use storage::StorageAdapter;
