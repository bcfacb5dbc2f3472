use std::fmt;
use std::str::FromStr;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, Uint128};
use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Number of decimal places of the chain's native token.
const NATIVE_DECIMALS: u32 = 18;

#[derive(Error, Debug, PartialEq)]
pub enum AddressError {
    #[error("invalid address length: expected 20 bytes, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// A 20-byte wallet identifier, rendered as `0x`-prefixed hex.
///
/// The all-zero value is the sentinel the lottery contract returns for
/// "no winner assigned to this slot".
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WalletAddress([u8; 20]);

impl WalletAddress {
    pub const ZERO: WalletAddress = WalletAddress([0u8; 20]);

    pub const fn new(bytes: [u8; 20]) -> Self {
        WalletAddress(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Whether this is the "no winner in this slot" sentinel.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Truncated form for display: `0x1234...abcd`.
    pub fn short(&self) -> String {
        let full = self.to_string();
        format!("{}...{}", &full[..6], &full[full.len() - 4..])
    }
}

impl From<[u8; 20]> for WalletAddress {
    fn from(bytes: [u8; 20]) -> Self {
        WalletAddress(bytes)
    }
}

impl FromStr for WalletAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex_part = s.strip_prefix("0x").unwrap_or(s);
        let raw = hex::decode(hex_part)?;
        let bytes: [u8; 20] = raw
            .try_into()
            .map_err(|v: Vec<u8>| AddressError::InvalidLength(v.len()))?;
        Ok(WalletAddress(bytes))
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WalletAddress({})", self)
    }
}

impl Serialize for WalletAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for WalletAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl JsonSchema for WalletAddress {
    fn schema_name() -> String {
        "WalletAddress".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        String::json_schema(gen)
    }
}

/// Rank within a round's winner list. The contract pays a fixed prize per
/// rank and returns at most three winner slots per round.
#[cw_serde]
#[derive(Copy, Eq, Hash)]
pub enum Position {
    First,
    Second,
    Third,
}

impl Position {
    /// Map a 0-based slot index in the contract's winner list to a rank.
    /// Slots beyond the third have no rank.
    pub fn from_index(index: usize) -> Option<Position> {
        match index {
            0 => Some(Position::First),
            1 => Some(Position::Second),
            2 => Some(Position::Third),
            _ => None,
        }
    }

    /// 1-based rank.
    pub fn rank(&self) -> u8 {
        match self {
            Position::First => 1,
            Position::Second => 2,
            Position::Third => 3,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Position::First => "1st",
            Position::Second => "2nd",
            Position::Third => "3rd",
        };
        f.write_str(label)
    }
}

/// Render a base-unit amount (10^18 per whole token) as a decimal string,
/// e.g. 250000000000000000 → "0.25".
pub fn display_amount(amount: Uint128) -> String {
    match Decimal::from_atomics(amount, NATIVE_DECIMALS) {
        Ok(d) => d.to_string(),
        // Amount exceeds Decimal's range; fall back to raw base units.
        Err(_) => amount.to_string(),
    }
}
