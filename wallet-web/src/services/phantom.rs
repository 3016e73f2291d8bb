//! Phantom wallet binding via wasm-bindgen
//!
//! Wraps the injected `window.solana` provider as a [`WalletCapability`] so the shared
//! [`lib_core::wallet::WalletSession`] can drive it.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use js_sys::Reflect;
use lib_core::wallet::{CapabilityError, EventSender, SubscriptionId, WalletCapability, WalletEvent};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
export function detectSolanaProvider() {
    if (!window.solana) {
        return null;
    }
    return {
        isPhantom: window.solana.isPhantom === true,
        name: window.solana.isPhantom ? 'Phantom' : (window.solana.name || 'Solana'),
    };
}

export function solanaPublicKey() {
    if (window.solana && window.solana.publicKey) {
        return window.solana.publicKey.toString();
    }
    return null;
}

export async function solanaConnect() {
    const response = await window.solana.connect();
    return { publicKey: response.publicKey.toString() };
}

export async function solanaDisconnect() {
    await window.solana.disconnect();
}

export function solanaOn(event, callback) {
    window.solana.on(event, callback);
}

export function solanaOff(event, callback) {
    if (typeof window.solana.off === 'function') {
        window.solana.off(event, callback);
    } else if (typeof window.solana.removeListener === 'function') {
        window.solana.removeListener(event, callback);
    }
}
")]
extern "C" {
    fn detectSolanaProvider() -> JsValue;

    fn solanaPublicKey() -> Option<String>;

    #[wasm_bindgen(catch)]
    async fn solanaConnect() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn solanaDisconnect() -> Result<JsValue, JsValue>;

    fn solanaOn(event: &str, callback: &Closure<dyn FnMut()>);

    fn solanaOff(event: &str, callback: &Closure<dyn FnMut()>);
}

/// What the page reports about the injected provider
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedProvider {
    pub name: String,
    pub is_phantom: bool,
}

/// Registered `connect`/`disconnect` handlers for one subscriber
struct Listeners {
    on_connect: Closure<dyn FnMut()>,
    on_disconnect: Closure<dyn FnMut()>,
}

pub struct PhantomCapability {
    name: String,
    listeners: RefCell<HashMap<SubscriptionId, Listeners>>,
    next_id: Cell<u64>,
}

impl PhantomCapability {
    fn new(provider: DetectedProvider) -> Self {
        Self {
            name: provider.name,
            listeners: RefCell::new(HashMap::new()),
            next_id: Cell::new(0),
        }
    }
}

/// Look for an injected Solana provider; `None` means no wallet extension is installed.
pub fn detect() -> Option<Rc<dyn WalletCapability>> {
    let value = detectSolanaProvider();
    if value.is_null() || value.is_undefined() {
        log::info!("No Solana wallet provider found");
        return None;
    }

    let provider: DetectedProvider = match serde_wasm_bindgen::from_value(value) {
        Ok(provider) => provider,
        Err(e) => {
            log::warn!("Unreadable wallet provider info: {}", e);
            return None;
        }
    };
    if !provider.is_phantom {
        log::info!("Using non-Phantom Solana provider: {}", provider.name);
    }

    Some(Rc::new(PhantomCapability::new(provider)))
}

fn js_error(err: JsValue) -> CapabilityError {
    let message = err
        .as_string()
        .or_else(|| {
            Reflect::get(&err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", err));
    CapabilityError::new(message)
}

#[async_trait(?Send)]
impl WalletCapability for PhantomCapability {
    fn name(&self) -> &str {
        &self.name
    }

    fn current_address(&self) -> Option<String> {
        solanaPublicKey()
    }

    async fn connect(&self) -> Result<String, CapabilityError> {
        let result = solanaConnect().await.map_err(js_error)?;
        let public_key = Reflect::get(&result, &JsValue::from_str("publicKey"))
            .map_err(|_| CapabilityError::new("Failed to get publicKey from result"))?;
        public_key
            .as_string()
            .ok_or_else(|| CapabilityError::new("PublicKey is not a string"))
    }

    async fn disconnect(&self) -> Result<(), CapabilityError> {
        solanaDisconnect().await.map_err(js_error)?;
        Ok(())
    }

    fn subscribe(&self, events: EventSender) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let connected = events.clone();
        let on_connect = Closure::<dyn FnMut()>::new(move || {
            if let Some(address) = solanaPublicKey() {
                let _ = connected.send(WalletEvent::Connected(address));
            }
        });
        let on_disconnect = Closure::<dyn FnMut()>::new(move || {
            let _ = events.send(WalletEvent::Disconnected);
        });

        solanaOn("connect", &on_connect);
        solanaOn("disconnect", &on_disconnect);
        self.listeners.borrow_mut().insert(
            id,
            Listeners {
                on_connect,
                on_disconnect,
            },
        );
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        // Dropping the closures also drops their senders, which ends the session's event stream
        if let Some(listeners) = self.listeners.borrow_mut().remove(&id) {
            solanaOff("connect", &listeners.on_connect);
            solanaOff("disconnect", &listeners.on_disconnect);
        }
    }
}
