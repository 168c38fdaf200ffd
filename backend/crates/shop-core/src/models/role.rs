use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Application role of a user.
///
/// Every account starts as `Unset` and picks `Merchant` or `Client` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Sells products
    Merchant,
    /// Buys products
    Client,
    /// No role chosen yet
    #[default]
    Unset,
}

impl Role {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Merchant => "merchant",
            Self::Client => "client",
            Self::Unset => "unset",
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Only `Unset -> Merchant` and `Unset -> Client` are legal.
    pub fn can_transition_to(&self, next: Role) -> bool {
        matches!(
            (self, next),
            (Self::Unset, Self::Merchant) | (Self::Unset, Self::Client)
        )
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "merchant" => Ok(Self::Merchant),
            "client" => Ok(Self::Client),
            "unset" => Ok(Self::Unset),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
