//! Message surface of the externally deployed lottery contract.
//!
//! The contract itself (ticket accounting, randomness, payouts) lives
//! on-chain and is consumed as a black box; these types only describe its
//! wire interface so clients can issue queries and transactions against it.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::types::{Position, WalletAddress};

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Snapshot of the round currently accepting tickets.
    #[returns(RoundResponse)]
    CurrentRound {},
    /// Winner slots of a past round. Up to three entries, ordered by rank;
    /// the zero address marks a slot with no winner assigned.
    #[returns(WinnersResponse)]
    Winners { round_id: u64 },
    /// Fixed prize paid for a rank.
    #[returns(PrizeResponse)]
    PrizeAmount { position: Position },
    /// Participants of the active round, as parallel arrays of addresses
    /// and per-address ticket counts.
    #[returns(ParticipantsResponse)]
    AllParticipants {},
    #[returns(TicketPriceResponse)]
    TicketPrice {},
    #[returns(BalanceResponse)]
    ContractBalance {},
    /// Minimum participants required before winners can be drawn.
    #[returns(MinParticipantsResponse)]
    MinParticipants {},
    #[returns(TicketCountResponse)]
    TicketsForParticipant { address: WalletAddress },
    #[returns(OwnerResponse)]
    Owner {},
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Buy tickets for the active round. Attached funds must equal
    /// `count × ticket price`.
    BuyTickets { count: u32 },
    /// Draw winners for a closed round. Owner only.
    DrawWinners {},
    /// Top up the prize pool. Owner only; amount is the attached funds.
    DepositFunds {},
    /// Withdraw from the contract balance. Owner only.
    WithdrawFunds { amount: Uint128 },
    /// Start a fresh round. Owner only.
    ResetRound {},
}

#[cw_serde]
pub struct RoundResponse {
    pub round_id: u64,
    pub is_active: bool,
    pub total_tickets: u32,
    pub tickets_remaining: u32,
    pub participants_count: u32,
    pub drawing_complete: bool,
}

#[cw_serde]
pub struct WinnersResponse {
    pub winners: Vec<WalletAddress>,
}

#[cw_serde]
pub struct PrizeResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct ParticipantsResponse {
    pub addresses: Vec<WalletAddress>,
    pub ticket_counts: Vec<u32>,
}

#[cw_serde]
pub struct TicketPriceResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct BalanceResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct MinParticipantsResponse {
    pub min_participants: u32,
}

#[cw_serde]
pub struct TicketCountResponse {
    pub count: u32,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: WalletAddress,
}
