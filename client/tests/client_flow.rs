//! Integration tests for the lottery client.
//!
//! These exercise [`LotteryClient`] end to end against a mock provider
//! backed by in-memory contract state, the same way the UI drives it:
//! connect, refresh the dashboard, buy tickets, run the admin actions.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use cosmwasm_std::{to_json_binary, Binary, Coin, Uint128};
use lottery_client::{ClientConfig, ClientError, LotteryClient, Provider, ProviderError, TxOutcome};
use lottery_interface::msg::{
    BalanceResponse, ExecuteMsg, MinParticipantsResponse, OwnerResponse, ParticipantsResponse,
    PrizeResponse, QueryMsg, RoundResponse, TicketCountResponse, TicketPriceResponse,
    WinnersResponse,
};
use lottery_interface::types::{Position, WalletAddress};

// ─── Constants ───

const TICKET_PRICE: u128 = 250_000_000_000_000_000; // 0.25 whole tokens
const FIRST_PRIZE: u128 = 2_500_000_000_000_000_000;
const SECOND_PRIZE: u128 = 1_500_000_000_000_000_000;
const THIRD_PRIZE: u128 = 1_000_000_000_000_000_000;

fn addr(n: u8) -> WalletAddress {
    let mut bytes = [0u8; 20];
    bytes[19] = n;
    WalletAddress::new(bytes)
}

// ─── Mock provider ───

/// In-memory stand-in for the deployed contract plus the wallet in front
/// of it. Queries are answered from the fields below; executes are recorded
/// instead of applied.
#[derive(Debug)]
struct MockState {
    round: RoundResponse,
    winners_by_round: BTreeMap<u64, Vec<WalletAddress>>,
    /// Rounds whose winner query fails with an RPC error.
    failing_rounds: BTreeSet<u64>,
    participants: ParticipantsResponse,
    tickets_by_wallet: BTreeMap<WalletAddress, u32>,
    owner: WalletAddress,
    contract_balance: u128,
    min_participants: u32,
    /// Error every execute fails with, if set.
    execute_failure: Option<String>,
}

#[derive(Debug)]
struct MockProvider {
    chain_id: u64,
    sender: WalletAddress,
    state: MockState,
    executed: RefCell<Vec<(ExecuteMsg, Vec<Coin>)>>,
}

impl MockProvider {
    fn new(sender: WalletAddress, state: MockState) -> Self {
        MockProvider {
            chain_id: ClientConfig::default().expected_chain_id,
            sender,
            state,
            executed: RefCell::new(Vec::new()),
        }
    }
}

impl Provider for MockProvider {
    fn chain_id(&self) -> Result<u64, ProviderError> {
        Ok(self.chain_id)
    }

    fn sender(&self) -> Result<WalletAddress, ProviderError> {
        Ok(self.sender)
    }

    fn query(&self, msg: &QueryMsg) -> Result<Binary, ProviderError> {
        let state = &self.state;
        match msg {
            QueryMsg::CurrentRound {} => encode(&state.round),
            QueryMsg::Winners { round_id } => {
                if state.failing_rounds.contains(round_id) {
                    return Err(ProviderError::Call(format!(
                        "rpc error: missing trie node for round {round_id}"
                    )));
                }
                encode(&WinnersResponse {
                    winners: state
                        .winners_by_round
                        .get(round_id)
                        .cloned()
                        .unwrap_or_default(),
                })
            }
            QueryMsg::PrizeAmount { position } => {
                let amount = match position {
                    Position::First => FIRST_PRIZE,
                    Position::Second => SECOND_PRIZE,
                    Position::Third => THIRD_PRIZE,
                };
                encode(&PrizeResponse {
                    amount: Uint128::new(amount),
                })
            }
            QueryMsg::AllParticipants {} => encode(&state.participants),
            QueryMsg::TicketPrice {} => encode(&TicketPriceResponse {
                amount: Uint128::new(TICKET_PRICE),
            }),
            QueryMsg::ContractBalance {} => encode(&BalanceResponse {
                amount: Uint128::new(state.contract_balance),
            }),
            QueryMsg::MinParticipants {} => encode(&MinParticipantsResponse {
                min_participants: state.min_participants,
            }),
            QueryMsg::TicketsForParticipant { address } => encode(&TicketCountResponse {
                count: state.tickets_by_wallet.get(address).copied().unwrap_or(0),
            }),
            QueryMsg::Owner {} => encode(&OwnerResponse { owner: state.owner }),
        }
    }

    fn execute(&self, msg: &ExecuteMsg, funds: &[Coin]) -> Result<TxOutcome, ProviderError> {
        if let Some(raw) = &self.state.execute_failure {
            return Err(ProviderError::Call(raw.clone()));
        }
        self.executed
            .borrow_mut()
            .push((msg.clone(), funds.to_vec()));
        Ok(TxOutcome {
            tx_hash: format!("0xtx{:04}", self.executed.borrow().len()),
            height: 100 + self.executed.borrow().len() as u64,
        })
    }
}

fn encode<T: serde::Serialize>(res: &T) -> Result<Binary, ProviderError> {
    to_json_binary(res).map_err(|e| ProviderError::Call(e.to_string()))
}

fn base_state(owner: WalletAddress) -> MockState {
    MockState {
        round: RoundResponse {
            round_id: 5,
            is_active: true,
            total_tickets: 10,
            tickets_remaining: 6,
            participants_count: 3,
            drawing_complete: false,
        },
        winners_by_round: BTreeMap::new(),
        failing_rounds: BTreeSet::new(),
        participants: ParticipantsResponse {
            addresses: vec![addr(1), addr(2), addr(3)],
            ticket_counts: vec![2, 1, 1],
        },
        tickets_by_wallet: BTreeMap::new(),
        owner,
        contract_balance: 20_000_000_000_000_000_000,
        min_participants: 3,
        execute_failure: None,
    }
}

fn connect(provider: MockProvider) -> LotteryClient<MockProvider> {
    LotteryClient::connect(provider, ClientConfig::default()).unwrap()
}

// ─── Session ───

#[test]
fn connect_rejects_wrong_network() {
    let mut provider = MockProvider::new(addr(1), base_state(addr(9)));
    provider.chain_id = 1;

    let err = LotteryClient::connect(provider, ClientConfig::default()).unwrap_err();
    match err {
        ClientError::WrongNetwork { expected, actual } => {
            assert_eq!(expected, ClientConfig::default().expected_chain_id);
            assert_eq!(actual, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn disconnect_returns_the_provider() {
    let client = connect(MockProvider::new(addr(1), base_state(addr(9))));
    assert_eq!(client.account(), addr(1));
    let provider = client.disconnect();
    assert!(provider.executed.borrow().is_empty());
}

// ─── Dashboard ───

#[test]
fn dashboard_aggregates_round_participants_and_winner_feed() {
    let mut state = base_state(addr(9));
    // Winner history: round 4 has a sentinel in the second slot, round 3
    // fails at the RPC level, rounds 1-2 have full winner sets.
    state
        .winners_by_round
        .insert(4, vec![addr(0xA), WalletAddress::ZERO, addr(0xC)]);
    state
        .winners_by_round
        .insert(2, vec![addr(0xD), addr(0xE), addr(0xF)]);
    state.winners_by_round.insert(1, vec![addr(0x1A)]);
    state.failing_rounds.insert(3);
    state.tickets_by_wallet.insert(addr(1), 1);

    let client = connect(MockProvider::new(addr(1), state));
    let dashboard = client.dashboard().unwrap();

    assert_eq!(dashboard.round.round_id, 5);
    assert_eq!(dashboard.ticket_price, Uint128::new(TICKET_PRICE));
    assert_eq!(dashboard.user_tickets, 1);
    assert_eq!(dashboard.participants.len(), 3);
    assert_eq!(dashboard.participants[0].address, addr(1));
    assert_eq!(dashboard.participants[0].tickets, 2);

    // Feed: newest first, limited to the 2 most recent winner-bearing
    // rounds. Round 3 failed and is simply absent; round 1 falls off.
    assert_eq!(dashboard.recent_winners.len(), 2);
    assert_eq!(dashboard.recent_winners[0].round_id, 4);
    assert_eq!(dashboard.recent_winners[1].round_id, 2);

    let round4 = &dashboard.recent_winners[0].winners;
    assert_eq!(round4.len(), 2);
    assert_eq!(round4[0].address, addr(0xA));
    assert_eq!(round4[0].position, Position::First);
    assert_eq!(round4[0].prize, Uint128::new(FIRST_PRIZE));
    assert_eq!(round4[0].display_prize(), "2.5");
    assert_eq!(round4[1].address, addr(0xC));
    assert_eq!(round4[1].position, Position::Third);
    assert_eq!(round4[1].prize, Uint128::new(THIRD_PRIZE));

    assert_eq!(dashboard.recent_winners[1].winners.len(), 3);
}

#[test]
fn mismatched_participant_arrays_fail_the_read_but_not_the_dashboard() {
    let mut state = base_state(addr(9));
    state.participants.ticket_counts.push(7);
    let client = connect(MockProvider::new(addr(1), state));

    assert!(matches!(
        client.participants().unwrap_err(),
        ClientError::MismatchedParticipants {
            addresses: 3,
            counts: 4
        }
    ));

    // The dashboard treats the participant list as best-effort.
    let dashboard = client.dashboard().unwrap();
    assert!(dashboard.participants.is_empty());
    assert_eq!(dashboard.round.round_id, 5);
}

// ─── Ticket purchase ───

#[test]
fn buy_tickets_attaches_exact_cost() {
    let client = connect(MockProvider::new(addr(1), base_state(addr(9))));
    let outcome = client.buy_tickets(2).unwrap();
    assert!(!outcome.tx_hash.is_empty());

    let provider = client.disconnect();
    let executed = provider.executed.borrow();
    assert_eq!(executed.len(), 1);
    let (msg, funds) = &executed[0];
    assert_eq!(*msg, ExecuteMsg::BuyTickets { count: 2 });
    assert_eq!(funds.len(), 1);
    assert_eq!(funds[0].denom, "stt");
    assert_eq!(funds[0].amount, Uint128::new(2 * TICKET_PRICE));
}

#[test]
fn buy_tickets_enforces_per_wallet_cap() {
    let mut state = base_state(addr(9));
    state.tickets_by_wallet.insert(addr(1), 2);
    let client = connect(MockProvider::new(addr(1), state));

    let err = client.buy_tickets(1).unwrap_err();
    match err {
        ClientError::TicketLimit {
            owned,
            requested,
            max,
        } => {
            assert_eq!((owned, requested, max), (2, 1, 2));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    // The wallet was never asked to sign.
    assert!(client.disconnect().executed.borrow().is_empty());
}

#[test]
fn buy_tickets_respects_remaining_pool_and_round_state() {
    let mut state = base_state(addr(9));
    state.round.tickets_remaining = 1;
    let client = connect(MockProvider::new(addr(1), state));
    assert!(matches!(
        client.buy_tickets(2).unwrap_err(),
        ClientError::NotEnoughTicketsRemaining {
            requested: 2,
            remaining: 1
        }
    ));

    let mut state = base_state(addr(9));
    state.round.is_active = false;
    let client = connect(MockProvider::new(addr(1), state));
    assert!(matches!(
        client.buy_tickets(1).unwrap_err(),
        ClientError::RoundClosed
    ));

    let client = connect(MockProvider::new(addr(1), base_state(addr(9))));
    assert!(matches!(
        client.buy_tickets(0).unwrap_err(),
        ClientError::ZeroTicketCount
    ));
}

#[test]
fn rejected_purchase_maps_to_user_message() {
    let mut state = base_state(addr(9));
    state.execute_failure =
        Some("MetaMask Tx Signature: user denied transaction signature".to_string());
    let client = connect(MockProvider::new(addr(1), state));

    let err = client.buy_tickets(1).unwrap_err();
    assert!(matches!(err, ClientError::Rejected));
    assert_eq!(err.user_message(), "Transaction cancelled by user");
}

// ─── Admin actions ───

#[test]
fn admin_actions_require_the_owner_account() {
    let client = connect(MockProvider::new(addr(1), base_state(addr(9))));
    for err in [
        client.draw_winners().unwrap_err(),
        client.deposit_funds(Uint128::new(1)).unwrap_err(),
        client.withdraw_funds(Uint128::new(1)).unwrap_err(),
        client.reset_round().unwrap_err(),
    ] {
        assert!(matches!(err, ClientError::NotOwner));
    }
    assert!(client.disconnect().executed.borrow().is_empty());
}

#[test]
fn draw_winners_preflights_round_state() {
    // Round still active.
    let client = connect(MockProvider::new(addr(9), base_state(addr(9))));
    assert!(matches!(
        client.draw_winners().unwrap_err(),
        ClientError::RoundStillActive
    ));

    // Too few participants.
    let mut state = base_state(addr(9));
    state.round.is_active = false;
    state.round.participants_count = 2;
    let client = connect(MockProvider::new(addr(9), state));
    assert!(matches!(
        client.draw_winners().unwrap_err(),
        ClientError::NotEnoughParticipants { have: 2, need: 3 }
    ));

    // Happy path.
    let mut state = base_state(addr(9));
    state.round.is_active = false;
    let client = connect(MockProvider::new(addr(9), state));
    client.draw_winners().unwrap();
    let executed = client.disconnect().executed.into_inner();
    assert_eq!(executed[0].0, ExecuteMsg::DrawWinners {});
    assert!(executed[0].1.is_empty());
}

#[test]
fn withdraw_revert_is_classified_for_the_user() {
    let mut state = base_state(addr(9));
    state.execute_failure = Some("execution reverted: Not enough funds".to_string());
    let client = connect(MockProvider::new(addr(9), state));

    let err = client.withdraw_funds(Uint128::new(10)).unwrap_err();
    match &err {
        ClientError::Revert { reason } => assert_eq!(reason, "Not enough funds"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        err.user_message(),
        "Not enough funds in the contract to withdraw"
    );
}

#[test]
fn deposit_attaches_funds_and_withdraw_does_not() {
    let client = connect(MockProvider::new(addr(9), base_state(addr(9))));
    client.deposit_funds(Uint128::new(42)).unwrap();
    client.withdraw_funds(Uint128::new(7)).unwrap();
    client.reset_round().unwrap();

    let executed = client.disconnect().executed.into_inner();
    assert_eq!(executed.len(), 3);

    assert_eq!(executed[0].0, ExecuteMsg::DepositFunds {});
    assert_eq!(executed[0].1[0].amount, Uint128::new(42));

    assert_eq!(
        executed[1].0,
        ExecuteMsg::WithdrawFunds {
            amount: Uint128::new(7)
        }
    );
    assert!(executed[1].1.is_empty());

    assert_eq!(executed[2].0, ExecuteMsg::ResetRound {});
}
