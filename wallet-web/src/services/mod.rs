//! Browser integrations

pub mod phantom;
