//! # Wallet Session
//!
//! Owns the connection lifecycle for one injected wallet. Created once by the app root
//! and handed to views; there is no global wallet state.
//!
//! ## Flow
//!
//! ```text
//! WalletSession::start(capability)
//!     ├── subscribe(tx) ──▶ wallet pushes WalletEvent on tx
//!     └── SessionEvents(rx) ──run()/drain()──▶ state
//!
//! connect()/disconnect() ──(timeout)──▶ capability ──▶ state
//! drop(session) ──▶ unsubscribe
//! ```
//!
//! State is published through a `tokio::sync::watch` channel so any number of views
//! can follow it. At most one wallet call is in flight at a time; that slot is tracked
//! apart from the published state, so wallet notifications never release it.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use shared::utils::truncate_address;

use super::capability::{SubscriptionId, WalletCapability, WalletEvent};
use super::state::WalletState;
use super::timer::with_timeout;
use crate::config::Config;
use crate::error::{AppError, Result};

/// Wallet call currently awaiting the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Connect,
    Disconnect,
}

/// Clears the pending slot when the call settles or its future is dropped.
struct PendingGuard<'a>(&'a Cell<Option<Pending>>);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(None);
    }
}

pub struct WalletSession {
    capability: Option<Rc<dyn WalletCapability>>,
    state: Rc<watch::Sender<WalletState>>,
    pending: Rc<Cell<Option<Pending>>>,
    subscription: Option<SubscriptionId>,
    timeout: Duration,
}

/// Consumer side of the wallet's notification channel.
pub struct SessionEvents {
    events: mpsc::UnboundedReceiver<WalletEvent>,
    state: Rc<watch::Sender<WalletState>>,
    pending: Rc<Cell<Option<Pending>>>,
}

impl WalletSession {
    /// Start a session over `capability` (`None` when no wallet is installed).
    ///
    /// Subscribes to the wallet's notifications exactly once; the subscription is
    /// released when the session is dropped.
    pub fn start(
        capability: Option<Rc<dyn WalletCapability>>,
        config: &Config,
    ) -> (Self, SessionEvents) {
        let initial = capability
            .as_ref()
            .and_then(|wallet| wallet.current_address())
            .filter(|address| !address.is_empty())
            .map(|address| WalletState::Connected { address })
            .unwrap_or_default();

        let (state, _) = watch::channel(initial);
        let state = Rc::new(state);
        let pending = Rc::new(Cell::new(None));

        // Without a wallet the sender is dropped here and the event stream ends at once.
        let (tx, rx) = mpsc::unbounded_channel();
        let subscription = capability.as_ref().map(|wallet| {
            let id = wallet.subscribe(tx);
            debug!(wallet = wallet.name(), ?id, "subscribed to wallet events");
            id
        });

        let session = Self {
            capability,
            state: state.clone(),
            pending: pending.clone(),
            subscription,
            timeout: config.connect_timeout(),
        };
        let events = SessionEvents {
            events: rx,
            state,
            pending,
        };
        (session, events)
    }

    pub fn is_available(&self) -> bool {
        self.capability.is_some()
    }

    pub fn wallet_name(&self) -> Option<&str> {
        self.capability.as_deref().map(|wallet| wallet.name())
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> WalletState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state change.
    pub fn watch(&self) -> watch::Receiver<WalletState> {
        self.state.subscribe()
    }

    /// Connect to the wallet and return its address.
    ///
    /// # Errors
    ///
    /// - [`AppError::WalletUnavailable`] when no wallet is installed
    /// - [`AppError::ConnectInProgress`] / [`AppError::DisconnectInProgress`] when another
    ///   wallet call is in flight
    /// - [`AppError::ConnectionFailed`] / [`AppError::ConnectionTimedOut`]; state returns to
    ///   `Disconnected` unless the wallet reported a connection meanwhile
    pub async fn connect(&self) -> Result<String> {
        let Some(wallet) = self.capability.clone() else {
            warn!("connect requested but no wallet extension is installed");
            return Err(AppError::WalletUnavailable);
        };

        let _pending = self.begin(Pending::Connect, wallet.name())?;
        let current = self.state.borrow().address().map(str::to_string);
        if let Some(address) = current {
            return Ok(address);
        }

        self.state.send_replace(WalletState::Connecting);
        debug!(wallet = wallet.name(), "connecting");
        match with_timeout(self.timeout, wallet.connect()).await {
            Some(Ok(address)) if !address.is_empty() => {
                info!(wallet = wallet.name(), address = %truncate_address(&address), "wallet connected");
                self.state.send_replace(WalletState::Connected {
                    address: address.clone(),
                });
                Ok(address)
            }
            Some(Ok(_)) => {
                self.abandon_connect();
                warn!(wallet = wallet.name(), "wallet returned an empty address");
                Err(AppError::ConnectionFailed("wallet returned an empty address".to_string()))
            }
            Some(Err(err)) => {
                self.abandon_connect();
                warn!(wallet = wallet.name(), error = %err, "wallet connection failed");
                Err(AppError::ConnectionFailed(err.message))
            }
            None => {
                self.abandon_connect();
                let millis = self.timeout_millis();
                warn!(wallet = wallet.name(), millis, "wallet connection timed out");
                Err(AppError::ConnectionTimedOut(millis))
            }
        }
    }

    /// Disconnect from the wallet.
    ///
    /// State is `Disconnecting` while the call is pending. On failure the previous
    /// `Connected` state is restored, so the UI keeps showing the address the wallet is
    /// still connected with.
    pub async fn disconnect(&self) -> Result<()> {
        let Some(wallet) = self.capability.clone() else {
            return Err(AppError::WalletUnavailable);
        };

        let _pending = self.begin(Pending::Disconnect, wallet.name())?;
        let current = self.state.borrow().address().map(str::to_string);
        let Some(address) = current else {
            return Ok(());
        };

        self.state.send_replace(WalletState::Disconnecting {
            address: address.clone(),
        });
        let failure = match with_timeout(self.timeout, wallet.disconnect()).await {
            Some(Ok(())) => {
                self.state.send_replace(WalletState::Disconnected);
                info!(wallet = wallet.name(), "wallet disconnected");
                return Ok(());
            }
            Some(Err(err)) => {
                warn!(wallet = wallet.name(), error = %err, "wallet disconnection failed, keeping session");
                err.message
            }
            None => {
                let millis = self.timeout_millis();
                warn!(wallet = wallet.name(), millis, "wallet disconnection timed out, keeping session");
                format!("timed out after {millis} ms")
            }
        };

        self.state.send_if_modified(|state| {
            if state.is_disconnecting() {
                *state = WalletState::Connected { address };
                true
            } else {
                false
            }
        });
        Err(AppError::DisconnectionFailed(failure))
    }

    /// Claim the pending slot or report the call already holding it.
    fn begin(&self, call: Pending, wallet: &str) -> Result<PendingGuard<'_>> {
        match self.pending.get() {
            Some(Pending::Connect) => {
                debug!(wallet, ?call, "ignored, connect already in flight");
                Err(AppError::ConnectInProgress)
            }
            Some(Pending::Disconnect) => {
                debug!(wallet, ?call, "ignored, disconnect already in flight");
                Err(AppError::DisconnectInProgress)
            }
            None => {
                self.pending.set(Some(call));
                Ok(PendingGuard(&self.pending))
            }
        }
    }

    /// Leave `Connecting` after a failed attempt, keeping a connection the wallet reported
    /// on its own meanwhile.
    fn abandon_connect(&self) {
        self.state.send_if_modified(|state| {
            if state.is_connecting() {
                *state = WalletState::Disconnected;
                true
            } else {
                false
            }
        });
    }

    fn timeout_millis(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

impl Drop for WalletSession {
    fn drop(&mut self) {
        if let (Some(wallet), Some(id)) = (&self.capability, self.subscription.take()) {
            wallet.unsubscribe(id);
            debug!(wallet = wallet.name(), ?id, "unsubscribed from wallet events");
        }
    }
}

impl SessionEvents {
    /// Apply every notification already queued; returns how many were applied.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Apply notifications until the wallet side of the channel is released.
    pub async fn run(mut self) {
        while let Some(event) = self.events.recv().await {
            self.apply(event);
        }
        debug!("wallet event stream closed");
    }

    fn apply(&self, event: WalletEvent) {
        match event {
            WalletEvent::Connected(address) if !address.is_empty() => {
                debug!(address = %truncate_address(&address), "wallet reported connect");
                self.state.send_replace(WalletState::Connected { address });
            }
            WalletEvent::Connected(_) => {
                debug!("wallet reported connect without an address, ignored");
            }
            // The pending connect settles the state itself.
            WalletEvent::Disconnected if self.pending.get() == Some(Pending::Connect) => {
                debug!("wallet reported disconnect during connect, ignored");
            }
            WalletEvent::Disconnected => {
                debug!("wallet reported disconnect");
                self.state.send_replace(WalletState::Disconnected);
            }
        }
    }
}
