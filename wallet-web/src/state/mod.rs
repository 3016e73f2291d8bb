//! App-wide contexts provided at the root component

pub mod data;
pub mod wallet;
