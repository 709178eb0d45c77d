use serde::{Deserialize, Serialize};

use crate::error::AddressError;

/// Wallet address as handed over by the connection provider
///
/// The client never derives or verifies keys; the address is an opaque,
/// non-empty identifier used to scope balance and compliance fetches.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn parse(value: &str) -> Result<Self, AddressError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(AddressError::Empty);
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Connection state as reported by the wallet provider
///
/// Normalized on construction: a disconnected account never carries an
/// address, so no consumer can read one past a disconnect.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    pub is_connected: bool,
    pub address: Option<Address>,
}

impl AccountState {
    pub fn new(is_connected: bool, address: Option<Address>) -> Self {
        Self {
            is_connected,
            address: if is_connected { address } else { None },
        }
    }

    pub fn connected(address: Address) -> Self {
        Self {
            is_connected: true,
            address: Some(address),
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }

    #[inline]
    pub fn has_address(&self) -> bool {
        self.address.is_some()
    }
}
