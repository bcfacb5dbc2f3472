use lottery_interface::types::WalletAddress;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::provider::Provider;

/// An established wallet connection.
///
/// The session owns the provider for its whole lifetime; there is no
/// module-level provider/signer state. Constructing a `Session` is the only
/// way to reach the contract, so "not connected" is unrepresentable.
#[derive(Debug)]
pub struct Session<P> {
    provider: P,
    account: WalletAddress,
    chain_id: u64,
}

impl<P: Provider> Session<P> {
    /// Connect through the given provider. Fails if the wallet reports a
    /// chain other than the configured one; no session is left behind in
    /// that case.
    pub fn connect(provider: P, config: &ClientConfig) -> Result<Self, ClientError> {
        let chain_id = provider.chain_id()?;
        if chain_id != config.expected_chain_id {
            return Err(ClientError::WrongNetwork {
                expected: config.expected_chain_id,
                actual: chain_id,
            });
        }
        let account = provider.sender()?;
        debug!(chain_id, account = %account, "wallet session established");
        Ok(Session {
            provider,
            account,
            chain_id,
        })
    }

    pub fn account(&self) -> WalletAddress {
        self.account
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Tear down the session, handing the provider back to the caller.
    pub fn disconnect(self) -> P {
        debug!(account = %self.account, "wallet session closed");
        self.provider
    }
}
