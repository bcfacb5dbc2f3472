use serde::{Deserialize, Serialize};

/// Deployment parameters of the lottery front end. `Default` matches the
/// testnet deployment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Chain the contract is deployed on; connecting to anything else fails.
    pub expected_chain_id: u64,
    /// Human-readable network label for UI display.
    pub network_name: String,
    /// Denom of the native token tickets are paid in.
    pub native_denom: String,
    /// Per-wallet ticket cap enforced before submitting a purchase.
    pub max_tickets_per_wallet: u32,
    /// How many rounds behind the current one the winner feed looks.
    pub winner_lookback: u64,
    /// How many winner-bearing rounds the feed shows, newest first.
    pub recent_rounds_shown: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            expected_chain_id: 50312,
            network_name: "Somnia Testnet".to_string(),
            native_denom: "stt".to_string(),
            max_tickets_per_wallet: 2,
            winner_lookback: 5,
            recent_rounds_shown: 2,
        }
    }
}
