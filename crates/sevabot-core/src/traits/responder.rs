// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fallback responder trait for unrecognized free text.

use async_trait::async_trait;

use crate::error::SevabotError;
use crate::types::CounterpartyId;

/// Natural-language fallback for free text that matches no command, no
/// catalog entry, and no active session mode.
///
/// An implementation typically delegates to an upstream model. Returning
/// `Ok(None)` (or an empty reply) signals "nothing actionable" and lets the
/// engine fall back into the staff-contact flow instead.
#[async_trait]
pub trait FallbackResponder: Send + Sync + 'static {
    async fn reply(
        &self,
        sender: &CounterpartyId,
        text: &str,
    ) -> Result<Option<String>, SevabotError>;
}
