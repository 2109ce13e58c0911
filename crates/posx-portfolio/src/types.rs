use serde::{Deserialize, Serialize};

/// LONG or SHORT. Decides the PnL sign convention.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Long,
    Short,
}

impl Direction {
    /// Both directions, long first (report order).
    pub const ALL: [Direction; 2] = [Direction::Long, Direction::Short];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Long => "long",
            Direction::Short => "short",
        }
    }

    /// Direction of a hedge against this position.
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Long => Direction::Short,
            Direction::Short => Direction::Long,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" => Ok(Direction::Long),
            "short" => Ok(Direction::Short),
            other => Err(format!(
                "invalid direction '{other}'. expected one of: long | short"
            )),
        }
    }
}

/// A single executed fill (the averaging atom).
///
/// `amount` is notional in quote currency; the base quantity is implied as
/// `amount / price`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fill {
    pub price: f64,
    pub amount: f64,
}

impl Fill {
    pub fn new(price: f64, amount: f64) -> Self {
        Self { price, amount }
    }

    /// Base quantity bought by this fill.
    pub fn quantity(&self) -> f64 {
        self.amount / self.price
    }
}

/// Derived position over a set of fills. Never stored, always recomputed.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Position {
    pub average_price: f64,
    pub quantity: f64,
}

impl Position {
    /// average_price * quantity, i.e. Σ amount of the fills it came from.
    pub fn cost_basis(&self) -> f64 {
        self.average_price * self.quantity
    }
}
