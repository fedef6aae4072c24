// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `sevabot serve` command implementation.
//!
//! Wires the SQLite storage adapter, the channel adapter, and the intake
//! engine, then drives the main event loop: inbound channel messages and
//! expired session timers are fed to the engine until the channel closes or
//! a shutdown signal arrives.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use sevabot_config::model::SevabotConfig;
use sevabot_core::{ChannelAdapter, CounterpartyId, PluginAdapter, SevabotError, StorageAdapter};
use sevabot_intake::IntakeEngine;
use sevabot_storage::SqliteStorage;

use crate::channel::StdioChannel;

const TIMER_QUEUE_DEPTH: usize = 256;

/// Runs the `sevabot serve` command until shutdown.
pub async fn run(config: SevabotConfig) -> Result<(), SevabotError> {
    init_tracing(&config.agent.log_level);
    info!("starting sevabot serve");

    let storage = {
        let storage = SqliteStorage::new(config.storage.clone());
        storage.initialize().await?;
        Arc::new(storage)
    };
    info!(
        database = config.storage.database_path.as_str(),
        "storage initialized"
    );

    let channel: Arc<dyn ChannelAdapter> = {
        let mut channel = StdioChannel::new(CounterpartyId("local@c.us".to_string()));
        channel.connect().await?;
        Arc::new(channel)
    };

    let (timer_tx, mut timer_rx) = mpsc::channel(TIMER_QUEUE_DEPTH);
    // The LLM fallback responder is an external collaborator; none is
    // compiled into this binary, so unmatched free text goes to staff contact.
    let engine = IntakeEngine::new(channel.clone(), storage.clone(), None, &config, timer_tx);

    let cancel = install_signal_handler();
    info!(
        operator = config.channel.operator_id.as_str(),
        "sevabot ready"
    );

    loop {
        tokio::select! {
            inbound = channel.receive() => match inbound {
                Ok(msg) => {
                    if let Err(e) = engine.handle_message(msg).await {
                        error!(error = %e, "message handling failed");
                    }
                }
                Err(e) => {
                    warn!(error = %e, "channel closed");
                    break;
                }
            },
            Some(fire) = timer_rx.recv() => {
                debug!(counterparty = %fire.counterparty_id, kind = ?fire.kind, "timer fired");
                if let Err(e) = engine.handle_timer(fire).await {
                    error!(error = %e, "timer handling failed");
                }
            }
            _ = cancel.cancelled() => {
                info!("shutdown requested");
                break;
            }
        }
    }

    storage.shutdown().await?;
    info!("sevabot serve shutdown complete");
    Ok(())
}

/// Installs signal handlers for SIGTERM and SIGINT.
///
/// Returns a [`CancellationToken`] that is cancelled when either signal is
/// received.
fn install_signal_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let token_clone = token.clone();

    tokio::spawn(async move {
        let ctrl_c = tokio::signal::ctrl_c();

        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let sigterm = signal(SignalKind::terminate());
            match sigterm {
                Ok(mut sigterm) => {
                    tokio::select! {
                        _ = ctrl_c => {
                            info!("received SIGINT (Ctrl+C), initiating shutdown");
                        }
                        _ = sigterm.recv() => {
                            info!("received SIGTERM, initiating shutdown");
                        }
                    }
                }
                Err(e) => {
                    warn!(error = %e, "failed to install SIGTERM handler");
                    let _ = ctrl_c.await;
                    info!("received SIGINT (Ctrl+C), initiating shutdown");
                }
            }
        }

        #[cfg(not(unix))]
        {
            let _ = ctrl_c.await;
            info!("received Ctrl+C, initiating shutdown");
        }

        token_clone.cancel();
    });

    token
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "sevabot={log_level},sevabot_intake={log_level},sevabot_storage={log_level},warn"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
