use cosmwasm_std::{from_json, Coin, StdError, Uint128};
use lottery_interface::msg::{
    BalanceResponse, ExecuteMsg, MinParticipantsResponse, OwnerResponse, ParticipantsResponse,
    PrizeResponse, QueryMsg, RoundResponse, TicketCountResponse, TicketPriceResponse,
    WinnersResponse,
};
use lottery_interface::types::{Position, WalletAddress};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::history;
use crate::provider::{Provider, TxOutcome};
use crate::session::Session;
use crate::view::{Dashboard, Participant};

/// Typed client over the lottery contract, bound to one wallet session.
#[derive(Debug)]
pub struct LotteryClient<P: Provider> {
    session: Session<P>,
    config: ClientConfig,
}

impl<P: Provider> LotteryClient<P> {
    /// Establish a session and bind the client to it.
    pub fn connect(provider: P, config: ClientConfig) -> Result<Self, ClientError> {
        let session = Session::connect(provider, &config)?;
        Ok(LotteryClient { session, config })
    }

    pub fn account(&self) -> WalletAddress {
        self.session.account()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session<P> {
        &self.session
    }

    /// Close the session, returning the provider.
    pub fn disconnect(self) -> P {
        self.session.disconnect()
    }

    fn query<T: DeserializeOwned>(&self, msg: &QueryMsg) -> Result<T, ClientError> {
        let raw = self.session.provider().query(msg)?;
        Ok(from_json(&raw)?)
    }

    // ─── Reads ───

    pub fn current_round(&self) -> Result<RoundResponse, ClientError> {
        self.query(&QueryMsg::CurrentRound {})
    }

    /// Winner slots of a past round, sentinel entries included.
    pub fn winners(&self, round_id: u64) -> Result<Vec<WalletAddress>, ClientError> {
        let res: WinnersResponse = self.query(&QueryMsg::Winners { round_id })?;
        Ok(res.winners)
    }

    pub fn prize_amount(&self, position: Position) -> Result<Uint128, ClientError> {
        let res: PrizeResponse = self.query(&QueryMsg::PrizeAmount { position })?;
        Ok(res.amount)
    }

    /// Participants of the active round. The contract answers with parallel
    /// arrays; a length mismatch is a malformed response, not a partial one.
    pub fn participants(&self) -> Result<Vec<Participant>, ClientError> {
        let res: ParticipantsResponse = self.query(&QueryMsg::AllParticipants {})?;
        if res.addresses.len() != res.ticket_counts.len() {
            return Err(ClientError::MismatchedParticipants {
                addresses: res.addresses.len(),
                counts: res.ticket_counts.len(),
            });
        }
        Ok(res
            .addresses
            .into_iter()
            .zip(res.ticket_counts)
            .map(|(address, tickets)| Participant { address, tickets })
            .collect())
    }

    pub fn ticket_price(&self) -> Result<Uint128, ClientError> {
        let res: TicketPriceResponse = self.query(&QueryMsg::TicketPrice {})?;
        Ok(res.amount)
    }

    pub fn contract_balance(&self) -> Result<Uint128, ClientError> {
        let res: BalanceResponse = self.query(&QueryMsg::ContractBalance {})?;
        Ok(res.amount)
    }

    pub fn min_participants(&self) -> Result<u32, ClientError> {
        let res: MinParticipantsResponse = self.query(&QueryMsg::MinParticipants {})?;
        Ok(res.min_participants)
    }

    pub fn tickets_for(&self, address: WalletAddress) -> Result<u32, ClientError> {
        let res: TicketCountResponse =
            self.query(&QueryMsg::TicketsForParticipant { address })?;
        Ok(res.count)
    }

    pub fn owner(&self) -> Result<WalletAddress, ClientError> {
        let res: OwnerResponse = self.query(&QueryMsg::Owner {})?;
        Ok(res.owner)
    }

    /// Whether the connected account is the contract owner.
    pub fn is_owner(&self) -> Result<bool, ClientError> {
        Ok(self.owner()? == self.session.account())
    }

    // ─── Writes ───

    /// Buy tickets for the active round. Preflights the round state, the
    /// per-wallet cap and the remaining pool before the wallet is asked to
    /// sign, and attaches exactly `count × ticket price` as funds.
    pub fn buy_tickets(&self, count: u32) -> Result<TxOutcome, ClientError> {
        if count == 0 {
            return Err(ClientError::ZeroTicketCount);
        }
        let round = self.current_round()?;
        if !round.is_active {
            return Err(ClientError::RoundClosed);
        }

        let owned = self
            .tickets_for(self.session.account())
            .unwrap_or_else(|err| {
                warn!(%err, "could not fetch caller ticket count, assuming 0");
                0
            });
        if owned.saturating_add(count) > self.config.max_tickets_per_wallet {
            return Err(ClientError::TicketLimit {
                owned,
                requested: count,
                max: self.config.max_tickets_per_wallet,
            });
        }
        if count > round.tickets_remaining {
            return Err(ClientError::NotEnoughTicketsRemaining {
                requested: count,
                remaining: round.tickets_remaining,
            });
        }

        let price = self.ticket_price()?;
        let cost = price
            .checked_mul(Uint128::from(count))
            .map_err(StdError::overflow)?;
        debug!(count, cost = %cost, "submitting ticket purchase");
        let funds = [Coin {
            denom: self.config.native_denom.clone(),
            amount: cost,
        }];
        Ok(self
            .session
            .provider()
            .execute(&ExecuteMsg::BuyTickets { count }, &funds)?)
    }

    /// Trigger the winner draw for the closed round. Owner only; the round
    /// and participant preconditions are checked client-side first so the
    /// user gets a message without paying for a doomed transaction.
    pub fn draw_winners(&self) -> Result<TxOutcome, ClientError> {
        self.ensure_owner()?;
        let round = self.current_round()?;
        if round.is_active {
            return Err(ClientError::RoundStillActive);
        }
        if round.drawing_complete {
            return Err(ClientError::DrawingComplete);
        }
        let need = self.min_participants()?;
        if round.participants_count < need {
            return Err(ClientError::NotEnoughParticipants {
                have: round.participants_count,
                need,
            });
        }
        debug!(round = round.round_id, "drawing winners");
        Ok(self
            .session
            .provider()
            .execute(&ExecuteMsg::DrawWinners {}, &[])?)
    }

    /// Top up the prize pool. Owner only.
    pub fn deposit_funds(&self, amount: Uint128) -> Result<TxOutcome, ClientError> {
        self.ensure_owner()?;
        if amount.is_zero() {
            return Err(ClientError::InvalidAmount);
        }
        let funds = [Coin {
            denom: self.config.native_denom.clone(),
            amount,
        }];
        Ok(self
            .session
            .provider()
            .execute(&ExecuteMsg::DepositFunds {}, &funds)?)
    }

    /// Withdraw from the contract balance. Owner only.
    pub fn withdraw_funds(&self, amount: Uint128) -> Result<TxOutcome, ClientError> {
        self.ensure_owner()?;
        if amount.is_zero() {
            return Err(ClientError::InvalidAmount);
        }
        Ok(self
            .session
            .provider()
            .execute(&ExecuteMsg::WithdrawFunds { amount }, &[])?)
    }

    /// Start a fresh round. Owner only.
    pub fn reset_round(&self) -> Result<TxOutcome, ClientError> {
        self.ensure_owner()?;
        Ok(self
            .session
            .provider()
            .execute(&ExecuteMsg::ResetRound {}, &[])?)
    }

    fn ensure_owner(&self) -> Result<(), ClientError> {
        if self.is_owner()? {
            Ok(())
        } else {
            Err(ClientError::NotOwner)
        }
    }

    // ─── Aggregation ───

    /// Fetch everything the main screen shows.
    ///
    /// Only the round snapshot is required; the caller's ticket count, the
    /// participant list and the winner feed are best-effort — their failures
    /// are logged and the section comes back empty rather than failing the
    /// whole refresh.
    pub fn dashboard(&self) -> Result<Dashboard, ClientError> {
        let round = self.current_round()?;
        let contract_balance = self.contract_balance()?;
        let ticket_price = self.ticket_price()?;

        let user_tickets = self
            .tickets_for(self.session.account())
            .unwrap_or_else(|err| {
                warn!(%err, "could not fetch caller ticket count");
                0
            });

        let participants = self.participants().unwrap_or_else(|err| {
            warn!(%err, "could not fetch participants");
            Vec::new()
        });

        let records = history::reconstruct_winners(
            round.round_id,
            self.config.winner_lookback,
            |round_id| self.winners(round_id),
            |position| self.prize_amount(position),
        );
        let recent_winners = history::group_recent(&records, self.config.recent_rounds_shown);

        Ok(Dashboard {
            round,
            contract_balance,
            ticket_price,
            user_tickets,
            participants,
            recent_winners,
        })
    }
}
