/// Mathematically undefined position operations.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Averaging over an empty fill list.
    NoFills,
    /// A fill price that cannot yield a quantity (zero, negative, or non-finite).
    NonPositivePrice { index: usize, price: f64 },
    /// Total quantity is zero: no average price, no price to solve for.
    ZeroQuantity,
    /// An add-on that exactly cancels the position leaves no blended average.
    ZeroBlendedQuantity,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoFills => write!(f, "domain error: no fills"),
            Self::NonPositivePrice { index, price } => write!(
                f,
                "domain error: fill #{} price must be > 0, got {price}",
                index + 1
            ),
            Self::ZeroQuantity => write!(f, "domain error: total quantity is zero"),
            Self::ZeroBlendedQuantity => write!(
                f,
                "domain error: resulting quantity after add-on is zero"
            ),
        }
    }
}

impl std::error::Error for DomainError {}
