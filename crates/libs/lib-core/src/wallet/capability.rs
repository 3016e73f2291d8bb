//! The wallet surface the session drives.
//!
//! In the browser this is the injected `window.solana` object (Phantom); tests use an
//! in-memory double.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;

/// Out-of-band change reported by the wallet itself (e.g. account switch in the extension).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    Connected(String),
    Disconnected,
}

pub type EventSender = UnboundedSender<WalletEvent>;

/// Handle returned by [`WalletCapability::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Failure reported by the wallet (rejected request, locked extension, ...).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct CapabilityError {
    pub message: String,
}

impl CapabilityError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A single injected wallet.
///
/// Futures are not `Send`: browser wallets live on the JS event loop.
#[async_trait(?Send)]
pub trait WalletCapability {
    /// Human readable wallet name, for logs
    fn name(&self) -> &str;

    /// Address the wallet already exposes (previously authorized site), if any
    fn current_address(&self) -> Option<String>;

    /// Ask the wallet to connect; resolves to the public address
    async fn connect(&self) -> Result<String, CapabilityError>;

    async fn disconnect(&self) -> Result<(), CapabilityError>;

    /// Start forwarding "connect"/"disconnect" notifications to `events`
    fn subscribe(&self, events: EventSender) -> SubscriptionId;

    /// Stop forwarding and release the sender registered under `id`
    fn unsubscribe(&self, id: SubscriptionId);
}
