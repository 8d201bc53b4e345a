//! Pool assets and swap direction.

use core::fmt;

use serde::{Deserialize, Serialize};

/// One of the two assets held by a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Asset {
    /// Asset A, the price base.
    A,
    /// Asset B, the price quote.
    B,
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// Which asset a trader sells to the pool.
///
/// # Examples
///
/// ```
/// use dex_core::domain::{Asset, SwapDirection};
///
/// let d = SwapDirection::AToB;
/// assert_eq!(d.asset_in(), Asset::A);
/// assert_eq!(d.asset_out(), Asset::B);
/// assert_eq!(d.reverse(), SwapDirection::BToA);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapDirection {
    /// Sell asset A, receive asset B.
    AToB,
    /// Sell asset B, receive asset A.
    BToA,
}

impl SwapDirection {
    /// The asset paid into the pool.
    #[must_use]
    pub const fn asset_in(&self) -> Asset {
        match self {
            Self::AToB => Asset::A,
            Self::BToA => Asset::B,
        }
    }

    /// The asset paid out of the pool.
    #[must_use]
    pub const fn asset_out(&self) -> Asset {
        match self {
            Self::AToB => Asset::B,
            Self::BToA => Asset::A,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reverse(&self) -> Self {
        match self {
            Self::AToB => Self::BToA,
            Self::BToA => Self::AToB,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.asset_in(), self.asset_out())
    }
}
