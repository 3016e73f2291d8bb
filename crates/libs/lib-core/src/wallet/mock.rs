//! In-memory wallet double for session tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::Notify;

use super::capability::{CapabilityError, EventSender, SubscriptionId, WalletCapability, WalletEvent};

#[derive(Default)]
pub(crate) struct MockWallet {
    address: RefCell<Option<String>>,
    connect_result: RefCell<Option<Result<String, CapabilityError>>>,
    disconnect_error: RefCell<Option<CapabilityError>>,
    gate: RefCell<Option<Rc<Notify>>>,
    hang: Cell<bool>,
    pub connect_calls: Cell<u32>,
    pub disconnect_calls: Cell<u32>,
    subscribers: RefCell<Vec<(SubscriptionId, EventSender)>>,
    next_id: Cell<u64>,
}

impl MockWallet {
    /// Wallet whose connect resolves to `address`.
    pub fn approving(address: &str) -> Rc<Self> {
        let wallet = Self::default();
        *wallet.connect_result.borrow_mut() = Some(Ok(address.to_string()));
        Rc::new(wallet)
    }

    /// Wallet that already exposes `address` before any connect call.
    pub fn authorized(address: &str) -> Rc<Self> {
        let wallet = Self::approving(address);
        *wallet.address.borrow_mut() = Some(address.to_string());
        wallet
    }

    pub fn rejecting(message: &str) -> Rc<Self> {
        let wallet = Self::default();
        *wallet.connect_result.borrow_mut() = Some(Err(CapabilityError::new(message)));
        Rc::new(wallet)
    }

    pub fn fail_disconnect(&self, message: &str) {
        *self.disconnect_error.borrow_mut() = Some(CapabilityError::new(message));
    }

    /// Make every call pend forever.
    pub fn hang(&self) {
        self.hang.set(true);
    }

    /// Hold connect until the returned notifier fires.
    pub fn gate(&self) -> Rc<Notify> {
        let notify = Rc::new(Notify::new());
        *self.gate.borrow_mut() = Some(notify.clone());
        notify
    }

    /// Push a notification to every live subscriber.
    pub fn emit(&self, event: WalletEvent) {
        for (_, sender) in self.subscribers.borrow().iter() {
            let _ = sender.send(event.clone());
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    async fn wait_if_held(&self) {
        let gate = self.gate.borrow().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if self.hang.get() {
            futures::future::pending::<()>().await;
        }
    }
}

#[async_trait(?Send)]
impl WalletCapability for MockWallet {
    fn name(&self) -> &str {
        "Mock"
    }

    fn current_address(&self) -> Option<String> {
        self.address.borrow().clone()
    }

    async fn connect(&self) -> Result<String, CapabilityError> {
        self.connect_calls.set(self.connect_calls.get() + 1);
        self.wait_if_held().await;

        let result = self
            .connect_result
            .borrow()
            .clone()
            .unwrap_or_else(|| Err(CapabilityError::new("no account")));
        if let Ok(address) = &result {
            *self.address.borrow_mut() = Some(address.clone());
        }
        result
    }

    async fn disconnect(&self) -> Result<(), CapabilityError> {
        self.disconnect_calls.set(self.disconnect_calls.get() + 1);
        self.wait_if_held().await;

        if let Some(err) = self.disconnect_error.borrow().clone() {
            return Err(err);
        }
        *self.address.borrow_mut() = None;
        Ok(())
    }

    fn subscribe(&self, events: EventSender) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, events));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(sub, _)| *sub != id);
    }
}
