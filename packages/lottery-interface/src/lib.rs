pub mod msg;
pub mod types;

pub use msg::{ExecuteMsg, QueryMsg, RoundResponse};
pub use types::{display_amount, AddressError, Position, WalletAddress};
