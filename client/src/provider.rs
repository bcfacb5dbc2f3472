use cosmwasm_std::{Binary, Coin};
use lottery_interface::msg::{ExecuteMsg, QueryMsg};
use lottery_interface::types::WalletAddress;
use thiserror::Error;

/// Failure surfaced by a wallet provider. Wallet and RPC errors arrive as
/// opaque strings; classification into the user-facing taxonomy happens in
/// [`crate::error`], not here.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("wallet provider not found")]
    WalletNotFound,

    #[error("{0}")]
    Call(String),
}

/// Receipt of a submitted transaction, after the provider has waited for
/// inclusion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxOutcome {
    pub tx_hash: String,
    pub height: u64,
}

/// The wallet-injected provider the client talks through.
///
/// Every method suspends the calling flow until the provider responds; no
/// local timeout is imposed and calls are never issued in parallel.
pub trait Provider {
    /// Id of the chain the wallet is currently connected to.
    fn chain_id(&self) -> Result<u64, ProviderError>;

    /// Account that signs transactions in this session.
    fn sender(&self) -> Result<WalletAddress, ProviderError>;

    /// Read-only contract call.
    fn query(&self, msg: &QueryMsg) -> Result<Binary, ProviderError>;

    /// Signed contract call with attached funds. Blocks until the
    /// transaction is confirmed or rejected.
    fn execute(&self, msg: &ExecuteMsg, funds: &[Coin]) -> Result<TxOutcome, ProviderError>;
}
