//! UI Components

pub mod kyc_badge;
pub mod navbar;
pub mod wallet_button;

pub use kyc_badge::KycBadge;
pub use navbar::{AppHeader, Navbar};
pub use wallet_button::WalletButton;
