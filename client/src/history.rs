//! Winner history reconstruction.
//!
//! The contract only exposes per-round winner lists and per-rank prize
//! constants; the recent-winners feed is rebuilt client-side on every
//! refresh by walking a bounded window of past rounds. The walk is
//! best-effort: a round whose query fails is omitted and the rest of the
//! window is still processed. Stateless and idempotent; fetches are issued
//! strictly one at a time.

use std::fmt::Display;

use cosmwasm_std::Uint128;
use lottery_interface::types::{Position, WalletAddress};
use tracing::warn;

use crate::view::{RoundWinners, WinnerRecord};

/// Walk rounds `max(1, current - lookback) ..= current`, newest first, and
/// collect one [`WinnerRecord`] per non-sentinel winner slot.
///
/// Failure policy: a failed winner fetch drops that round only; a failed
/// prize fetch drops the remainder of that round, keeping records already
/// collected. No retries — a dropped round stays absent until the next
/// refresh.
pub fn reconstruct_winners<W, F, E>(
    current_round_id: u64,
    lookback: u64,
    mut fetch_winners: W,
    mut fetch_prize: F,
) -> Vec<WinnerRecord>
where
    W: FnMut(u64) -> Result<Vec<WalletAddress>, E>,
    F: FnMut(Position) -> Result<Uint128, E>,
    E: Display,
{
    let mut records = Vec::new();
    if current_round_id == 0 {
        return records;
    }
    let start_round = current_round_id.saturating_sub(lookback).max(1);

    for round in (start_round..=current_round_id).rev() {
        let winners = match fetch_winners(round) {
            Ok(winners) => winners,
            Err(err) => {
                warn!(round, %err, "could not fetch winners for round, skipping");
                continue;
            }
        };
        for (slot, address) in winners.into_iter().enumerate() {
            // The contract returns at most three slots; ignore anything past
            // the third rank.
            let Some(position) = Position::from_index(slot) else {
                break;
            };
            if address.is_zero() {
                continue;
            }
            match fetch_prize(position) {
                Ok(prize) => records.push(WinnerRecord {
                    round,
                    address,
                    position,
                    prize,
                }),
                Err(err) => {
                    warn!(round, rank = position.rank(), %err,
                        "could not resolve prize, dropping rest of round");
                    break;
                }
            }
        }
    }
    records
}

/// Group records by round for display: rounds newest first, limited to the
/// `max_rounds` most recent rounds that actually contain winners. The result
/// does not depend on the input order of `records`.
pub fn group_recent(records: &[WinnerRecord], max_rounds: usize) -> Vec<RoundWinners> {
    let mut rounds: Vec<u64> = records.iter().map(|r| r.round).collect();
    rounds.sort_unstable_by(|a, b| b.cmp(a));
    rounds.dedup();
    rounds.truncate(max_rounds);

    rounds
        .into_iter()
        .map(|round_id| RoundWinners {
            round_id,
            winners: records
                .iter()
                .filter(|r| r.round == round_id)
                .cloned()
                .collect(),
        })
        .collect()
}
