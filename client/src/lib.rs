//! Client-side data layer for the lottery contract.
//!
//! The contract holds every piece of consequential state (tickets, rounds,
//! randomness, payouts); this crate owns the wallet session, turns contract
//! responses into view models, reconstructs the recent-winners feed from
//! per-round queries, and maps raw provider failures to user-facing errors.
//! A UI sits directly on [`LotteryClient`].

pub mod client;
pub mod config;
pub mod error;
pub mod history;
pub mod provider;
pub mod session;
pub mod view;

pub use client::LotteryClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use provider::{Provider, ProviderError, TxOutcome};
pub use session::Session;
