//! Page modules

pub mod dashboard;
pub mod exchange;
pub mod landing;

pub use dashboard::DashboardPage;
pub use exchange::ExchangePage;
pub use landing::LandingPage;
