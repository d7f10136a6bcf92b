//! Price samples retained for display

use rust_decimal::Decimal;

/// Price stored in an empty slot before any quote arrived
pub const PLACEHOLDER_PRICE: Decimal = Decimal::ZERO;

/// Price stored when the fetch for that round failed
pub const ERROR_PRICE: Decimal = Decimal::NEGATIVE_ONE;

/// Timestamp shown for placeholder slots
pub const PLACEHOLDER_TIMESTAMP: &str = "-";

/// Display hint derived from the price delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    /// Unchanged, no baseline, or not a real quote
    #[default]
    Neutral,
    /// Price rose against the previous real quote
    Up,
    /// Price fell against the previous real quote
    Down,
}

impl Tint {
    /// Tint for `new` compared against the last real price
    pub fn between(previous: Option<Decimal>, new: Decimal) -> Self {
        let Some(previous) = previous else {
            return Tint::Neutral;
        };

        if is_sentinel(previous) || is_sentinel(new) {
            return Tint::Neutral;
        }

        match new.cmp(&previous) {
            std::cmp::Ordering::Greater => Tint::Up,
            std::cmp::Ordering::Less => Tint::Down,
            std::cmp::Ordering::Equal => Tint::Neutral,
        }
    }
}

/// What a sample's price represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Placeholder,
    Failed,
    Quote,
}

/// One retained price point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Spot price, or one of the sentinel prices
    pub price: Decimal,
    /// Local wall clock at fetch time (`HH:MM:SS`), `-` for placeholders
    pub timestamp: String,
    /// Color hint for the renderer
    pub tint: Tint,
}

impl Sample {
    /// Empty slot shown before enough quotes have arrived
    pub fn placeholder() -> Self {
        Self {
            price: PLACEHOLDER_PRICE,
            timestamp: PLACEHOLDER_TIMESTAMP.to_string(),
            tint: Tint::Neutral,
        }
    }

    /// Slot for a round whose fetch failed
    pub fn failed(timestamp: impl Into<String>) -> Self {
        Self {
            price: ERROR_PRICE,
            timestamp: timestamp.into(),
            tint: Tint::Neutral,
        }
    }

    /// A real quote
    ///
    /// A sentinel price is stored untinted regardless of `tint`.
    pub fn quote(price: Decimal, timestamp: impl Into<String>, tint: Tint) -> Self {
        let tint = if is_sentinel(price) {
            Tint::Neutral
        } else {
            tint
        };

        Self {
            price,
            timestamp: timestamp.into(),
            tint,
        }
    }

    pub fn kind(&self) -> SampleKind {
        if self.price == PLACEHOLDER_PRICE {
            SampleKind::Placeholder
        } else if self.price == ERROR_PRICE {
            SampleKind::Failed
        } else {
            SampleKind::Quote
        }
    }

    pub fn is_quote(&self) -> bool {
        self.kind() == SampleKind::Quote
    }
}

fn is_sentinel(price: Decimal) -> bool {
    price == PLACEHOLDER_PRICE || price == ERROR_PRICE
}
