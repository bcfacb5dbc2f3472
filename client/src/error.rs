use cosmwasm_std::StdError;
use thiserror::Error;

use crate::provider::ProviderError;

/// Contract revert reasons the UI knows how to phrase. Anything else is
/// surfaced through the generic fallback message.
const REVERT_REASONS: &[&str] = &[
    "Not enough participants",
    "Round still active",
    "Drawing already complete",
    "Not enough funds",
    "Round already completed",
];

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("wallet provider not found")]
    WalletNotFound,

    #[error("request rejected by user")]
    Rejected,

    #[error("wrong network: expected chain {expected}, connected to {actual}")]
    WrongNetwork { expected: u64, actual: u64 },

    #[error("insufficient funds in wallet")]
    InsufficientFunds,

    #[error("gas estimation failed")]
    GasEstimation,

    #[error("contract reverted: {reason}")]
    Revert { reason: String },

    #[error("caller is not the contract owner")]
    NotOwner,

    #[error("round is not currently active")]
    RoundClosed,

    #[error("round is still active")]
    RoundStillActive,

    #[error("drawing already complete for this round")]
    DrawingComplete,

    #[error("not enough participants: {have} of {need} required")]
    NotEnoughParticipants { have: u32, need: u32 },

    #[error("ticket count must be at least 1")]
    ZeroTicketCount,

    #[error("per-wallet ticket limit: own {owned}, requested {requested}, cap {max}")]
    TicketLimit { owned: u32, requested: u32, max: u32 },

    #[error("only {remaining} tickets remaining, requested {requested}")]
    NotEnoughTicketsRemaining { requested: u32, remaining: u32 },

    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("malformed participants response: {addresses} addresses, {counts} ticket counts")]
    MismatchedParticipants { addresses: usize, counts: usize },

    #[error("{0}")]
    Provider(String),
}

impl From<ProviderError> for ClientError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::WalletNotFound => ClientError::WalletNotFound,
            ProviderError::Call(raw) => classify_call_failure(&raw),
        }
    }
}

/// Classify a raw wallet/RPC failure by substring. Providers do not expose
/// a structured error surface, so this is the whole taxonomy.
fn classify_call_failure(raw: &str) -> ClientError {
    if raw.contains("user rejected") || raw.contains("user denied") {
        return ClientError::Rejected;
    }
    if raw.contains("insufficient funds") {
        return ClientError::InsufficientFunds;
    }
    for reason in REVERT_REASONS {
        if raw.contains(reason) {
            return ClientError::Revert {
                reason: (*reason).to_string(),
            };
        }
    }
    if raw.contains("gas") {
        return ClientError::GasEstimation;
    }
    ClientError::Provider(raw.to_string())
}

impl ClientError {
    /// The message a UI shows for this failure. Always produced; a raw
    /// provider error never reaches the user unclassified.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::WalletNotFound => {
                "Wallet provider not found. Please install a wallet".to_string()
            }
            ClientError::Rejected => "Transaction cancelled by user".to_string(),
            ClientError::WrongNetwork { .. } => {
                "Connected to the wrong network. Please switch networks in your wallet".to_string()
            }
            ClientError::InsufficientFunds => "Insufficient funds in your wallet".to_string(),
            ClientError::GasEstimation => {
                "Gas estimation failed. Transaction might fail".to_string()
            }
            ClientError::Revert { reason } => match reason.as_str() {
                "Not enough participants" => {
                    "Cannot draw winners: not enough participants".to_string()
                }
                "Round still active" => {
                    "Cannot draw winners because the round is still active".to_string()
                }
                "Drawing already complete" => {
                    "Winners have already been drawn for this round".to_string()
                }
                "Not enough funds" => "Not enough funds in the contract to withdraw".to_string(),
                "Round already completed" => "Cannot reset a completed round".to_string(),
                other => format!("Transaction failed: {other}"),
            },
            ClientError::NotOwner => {
                "You must be the contract owner to perform this action".to_string()
            }
            ClientError::RoundClosed => "Lottery round is not currently active".to_string(),
            ClientError::RoundStillActive => {
                "Cannot draw winners because the round is still active".to_string()
            }
            ClientError::DrawingComplete => {
                "Winners have already been drawn for this round".to_string()
            }
            ClientError::NotEnoughParticipants { have, need } => {
                format!("Cannot draw winners: {have} participants joined, {need} required")
            }
            ClientError::ZeroTicketCount => "Please select at least one ticket".to_string(),
            ClientError::TicketLimit { owned, max, .. } => format!(
                "You can only buy up to {max} tickets per round. You already have {owned} tickets"
            ),
            ClientError::NotEnoughTicketsRemaining { remaining, .. } => format!(
                "Not enough tickets available in the pool. Only {remaining} tickets remaining"
            ),
            ClientError::InvalidAmount => "Please enter a valid amount".to_string(),
            ClientError::MismatchedParticipants { .. }
            | ClientError::Std(_)
            | ClientError::Provider(_) => {
                "Something went wrong. Please try again".to_string()
            }
        }
    }
}
