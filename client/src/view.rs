//! View models handed to the UI layer.
//!
//! All of these are ephemeral: rebuilt from contract queries on every
//! refresh, never persisted.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;
use lottery_interface::msg::RoundResponse;
use lottery_interface::types::{display_amount, Position, WalletAddress};

/// One distinct wallet in the active round.
#[cw_serde]
pub struct Participant {
    pub address: WalletAddress,
    pub tickets: u32,
}

/// A winner reconstructed from a past round. Derived, not stored: only
/// materialized for non-sentinel slots.
#[cw_serde]
pub struct WinnerRecord {
    pub round: u64,
    pub address: WalletAddress,
    pub position: Position,
    /// Prize in base units of the native token.
    pub prize: Uint128,
}

impl WinnerRecord {
    pub fn display_prize(&self) -> String {
        display_amount(self.prize)
    }
}

/// Winners of a single round, grouped for display.
#[cw_serde]
pub struct RoundWinners {
    pub round_id: u64,
    pub winners: Vec<WinnerRecord>,
}

/// Everything the main screen shows, assembled by
/// [`crate::LotteryClient::dashboard`].
#[cw_serde]
pub struct Dashboard {
    pub round: RoundResponse,
    pub contract_balance: Uint128,
    pub ticket_price: Uint128,
    /// Tickets held by the connected account in the active round.
    pub user_tickets: u32,
    pub participants: Vec<Participant>,
    /// Most recent winner-bearing rounds, newest first.
    pub recent_winners: Vec<RoundWinners>,
}
