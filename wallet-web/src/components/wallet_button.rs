//! Wallet connect/disconnect button

use leptos::prelude::*;
use lib_core::wallet::WalletState;

use crate::state::wallet::use_wallet_context;

pub const CONNECT_LABEL: &str = "Conectar Wallet";
pub const CONNECTING_LABEL: &str = "Conectando...";
pub const DISCONNECTING_LABEL: &str = "Desconectando...";

/// Button label for a connection state.
pub fn button_label(state: &WalletState) -> String {
    match state {
        WalletState::Connecting => CONNECTING_LABEL.to_string(),
        WalletState::Disconnecting { .. } => DISCONNECTING_LABEL.to_string(),
        _ => state
            .display_address()
            .unwrap_or_else(|| CONNECT_LABEL.to_string()),
    }
}

#[component]
pub fn WalletButton() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    let on_click = move |_| {
        if wallet_ctx.is_connected() {
            wallet_ctx.disconnect();
        } else {
            wallet_ctx.connect();
        }
    };

    view! {
        <button
            class=move || if wallet_ctx.is_connected() { "btn btn-outline" } else { "btn" }
            disabled=move || wallet_ctx.is_busy()
            title=move || wallet_ctx.address().unwrap_or_default()
            on:click=on_click
        >
            <span class="btn-icon">"👛"</span>
            {move || wallet_ctx.wallet.with(button_label)}
        </button>
    }
}
