use serde::Serialize;
use shared::utils::truncate_address;

/// Wallet connection state
///
/// ```text
/// Disconnected ──connect──▶ Connecting ──ok──▶ Connected ──disconnect──▶ Disconnecting
///      ▲                        │                  ▲                          │
///      ├──────fail/timeout──────┘                  └────────fail/timeout──────┤
///      └─────────────────────────ok / wallet event────────────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WalletState {
    #[default]
    Disconnected,
    Connecting,
    Connected { address: String },
    /// Disconnect requested for `address`, waiting on the wallet
    Disconnecting { address: String },
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, WalletState::Connecting)
    }

    pub fn is_disconnecting(&self) -> bool {
        matches!(self, WalletState::Disconnecting { .. })
    }

    /// A wallet call is pending; the UI should not start another one.
    pub fn is_busy(&self) -> bool {
        self.is_connecting() || self.is_disconnecting()
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address } => Some(address),
            _ => None,
        }
    }

    /// Shortened address for the wallet button, e.g. `abcd...wxyz`
    pub fn display_address(&self) -> Option<String> {
        self.address().map(truncate_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let state = WalletState::Connected {
            address: "abcd1234wxyz".to_string(),
        };
        assert!(state.is_connected());
        assert!(!state.is_connecting());
        assert!(!state.is_busy());
        assert_eq!(state.address(), Some("abcd1234wxyz"));
        assert_eq!(state.display_address().as_deref(), Some("abcd...wxyz"));

        assert_eq!(WalletState::default(), WalletState::Disconnected);
        assert_eq!(WalletState::Connecting.address(), None);
        assert!(WalletState::Connecting.is_connecting());
        assert!(WalletState::Connecting.is_busy());
    }

    #[test]
    fn test_disconnecting_hides_address() {
        let state = WalletState::Disconnecting {
            address: "abcd1234wxyz".to_string(),
        };
        assert!(state.is_disconnecting());
        assert!(state.is_busy());
        assert!(!state.is_connected());
        assert_eq!(state.display_address(), None);
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(WalletState::Connected {
            address: "abc".to_string(),
        })
        .unwrap();
        assert_eq!(json["status"], "connected");
        assert_eq!(json["address"], "abc");

        let json = serde_json::to_value(WalletState::Disconnecting {
            address: "abc".to_string(),
        })
        .unwrap();
        assert_eq!(json["status"], "disconnecting");
    }
}
