//! Response DTOs that decorate stored models with values derived for display.

pub(crate) mod exercise;
pub(crate) mod food;
pub(crate) mod plan;
pub(crate) mod session;

/// Rounds to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(78.456), 78.46);
        assert_eq!(round2(12.0), 12.0);
    }
}
