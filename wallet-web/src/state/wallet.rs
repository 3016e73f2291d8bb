//! Wallet state management
//!
//! The [`WalletSession`] lives here for the lifetime of the app; views read the mirrored
//! [`WalletState`] signal and call [`WalletContext::connect`] / [`WalletContext::disconnect`].

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::config::core_config;
use lib_core::wallet::{WalletSession, WalletState};
use lib_core::AppError;
use shared::utils::truncate_address;

use crate::services::phantom;

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
    session: StoredValue<Rc<WalletSession>, LocalStorage>,
    install_url: StoredValue<String>,
}

impl WalletContext {
    pub fn is_connected(&self) -> bool {
        self.wallet.with(|state| state.is_connected())
    }

    /// A connect or disconnect call is pending
    pub fn is_busy(&self) -> bool {
        self.wallet.with(|state| state.is_busy())
    }

    pub fn address(&self) -> Option<String> {
        self.wallet.with(|state| state.address().map(|s| s.to_string()))
    }

    /// Start a connection attempt; opens the install page when no wallet is present.
    pub fn connect(&self) {
        let session = self.session.get_value();
        let install_url = self.install_url.get_value();
        if !session.is_available() {
            open_install_page(&install_url);
            return;
        }

        spawn_local(async move {
            match session.connect().await {
                Ok(address) => log::info!("Wallet connected: {}", truncate_address(&address)),
                Err(e) => log_wallet_error("connect", &e),
            }
        });
    }

    pub fn disconnect(&self) {
        let session = self.session.get_value();

        spawn_local(async move {
            match session.disconnect().await {
                Ok(()) => log::info!("Wallet disconnected"),
                Err(e) => log_wallet_error("disconnect", &e),
            }
        });
    }
}

fn log_wallet_error(action: &str, err: &AppError) {
    match err {
        AppError::ConnectInProgress | AppError::DisconnectInProgress => {
            log::debug!("Wallet {} ignored: {}", action, err)
        }
        e if e.is_wallet_error() => log::warn!("Wallet {} failed: {}", action, e),
        e => log::error!("Unexpected error during wallet {}: {}", action, e),
    }
}

fn open_install_page(url: &str) {
    log::info!("No wallet installed, opening {}", url);
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            log::warn!("Failed to open install page: {:?}", e);
        }
    }
}

/// Start the wallet session and mirror its state into a signal.
pub fn provide_wallet_context() -> WalletContext {
    let config = core_config();
    let (session, events) = WalletSession::start(phantom::detect(), config);
    match session.wallet_name() {
        Some(name) => log::info!("Wallet detected: {}", name),
        None => log::info!("No wallet extension detected"),
    }

    let wallet = RwSignal::new(session.state());
    let mut updates = session.watch();

    spawn_local(events.run());
    spawn_local(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            wallet.set(state);
        }
    });

    let context = WalletContext {
        wallet,
        session: StoredValue::new_local(Rc::new(session)),
        install_url: StoredValue::new(config.wallet_install_url.clone()),
    };
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
