//! # Wallet Connection
//!
//! - [`capability`] - the [`WalletCapability`] trait implemented by the browser bindings
//! - [`state`] - [`WalletState`] (`Disconnected`, `Connecting`, `Connected`, `Disconnecting`)
//! - [`session`] - [`WalletSession`] lifecycle and the [`SessionEvents`] consumer

pub mod capability;
pub mod session;
pub mod state;
mod timer;

#[cfg(test)]
mod mock;

pub use capability::{CapabilityError, EventSender, SubscriptionId, WalletCapability, WalletEvent};
pub use session::{SessionEvents, WalletSession};
pub use state::WalletState;
