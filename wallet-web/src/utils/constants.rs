//! Application constants

/// Entries shown in the dashboard activity feed
pub const ACTIVITY_LIMIT: usize = 4;

/// Rows in the leaderboard preview
pub const LEADERBOARD_LIMIT: usize = 3;

pub const TOKEN_SYMBOL: &str = "ECO";

pub const EXCHANGE_NOTICE: &str = "Los intercambios se procesan en la blockchain de Solana. \
    Asegúrate de tener tu wallet Phantom conectada para recibir los fondos.";

pub const EXCHANGE_ABOUT: &str = "Las tasas de cambio se actualizan en tiempo real. \
    Los intercambios a criptomonedas se procesan instantáneamente en Solana. \
    Los retiros a moneda fiat pueden tardar 1-3 días hábiles.";
