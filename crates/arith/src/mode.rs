//! Rounding modes.

use std::fmt;
use std::str::FromStr;

use crate::error::ArithError;

/// How to break a value that falls between two multiples of an increment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Toward zero.
    Trunc,
    /// Toward negative infinity.
    Floor,
    /// Toward positive infinity.
    Ceil,
    /// To the nearest multiple; ties away from zero.
    #[default]
    HalfExpand,
}

impl RoundingMode {
    /// Name as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            RoundingMode::Trunc => "trunc",
            RoundingMode::Floor => "floor",
            RoundingMode::Ceil => "ceil",
            RoundingMode::HalfExpand => "halfExpand",
        }
    }

    /// Rounds `quantity` to a multiple of `increment`, which must be positive.
    ///
    /// Integer-only, so no precision is lost for any `i128` input short of
    /// the extremes, where the result saturates.
    pub fn round(self, quantity: i128, increment: i128) -> i128 {
        debug_assert!(increment > 0);
        let mut quotient = quantity / increment;
        let remainder = quantity % increment;
        if remainder == 0 {
            return quantity;
        }
        let sign = if remainder < 0 { -1 } else { 1 };
        let doubled = (remainder * 2).abs();
        match self {
            RoundingMode::Trunc => {}
            RoundingMode::Floor => {
                if sign < 0 {
                    quotient += sign;
                }
            }
            RoundingMode::Ceil => {
                if sign > 0 {
                    quotient += sign;
                }
            }
            RoundingMode::HalfExpand => {
                if doubled >= increment {
                    quotient += sign;
                }
            }
        }
        quotient.saturating_mul(increment)
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingMode {
    type Err = ArithError;

    /// Accepts `halfExpand`, `half-expand` and `half_expand` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "trunc" => Ok(RoundingMode::Trunc),
            "floor" => Ok(RoundingMode::Floor),
            "ceil" => Ok(RoundingMode::Ceil),
            "halfexpand" => Ok(RoundingMode::HalfExpand),
            _ => Err(ArithError::UnknownRoundingMode {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_expand_ad_hoc() {
        let round = |q, i| RoundingMode::HalfExpand.round(q, i);
        assert_eq!(26, round(20, 13));
        assert_eq!(0, round(29, 60));
        assert_eq!(60, round(30, 60));
        assert_eq!(60, round(31, 60));
        assert_eq!(-60, round(-30, 60));
        assert_eq!(0, round(-29, 60));
    }

    #[test]
    fn table() {
        // (quantity, trunc, floor, ceil, halfExpand) at increment 10.
        let rows: [(i128, i128, i128, i128, i128); 7] = [
            (-15, -10, -20, -10, -20),
            (-5, 0, -10, 0, -10),
            (4, 0, 0, 10, 0),
            (5, 0, 0, 10, 10),
            (6, 0, 0, 10, 10),
            (15, 10, 10, 20, 20),
            (20, 20, 20, 20, 20),
        ];
        for (q, trunc, floor, ceil, half) in rows {
            assert_eq!(RoundingMode::Trunc.round(q, 10), trunc, "trunc {q}");
            assert_eq!(RoundingMode::Floor.round(q, 10), floor, "floor {q}");
            assert_eq!(RoundingMode::Ceil.round(q, 10), ceil, "ceil {q}");
            assert_eq!(RoundingMode::HalfExpand.round(q, 10), half, "halfExpand {q}");
        }
    }

    #[test]
    fn names() {
        assert_eq!("halfExpand".parse::<RoundingMode>().unwrap(), RoundingMode::HalfExpand);
        assert_eq!("half-expand".parse::<RoundingMode>().unwrap(), RoundingMode::HalfExpand);
        assert_eq!("FLOOR".parse::<RoundingMode>().unwrap(), RoundingMode::Floor);
        assert!("halfEven".parse::<RoundingMode>().is_err());
        assert_eq!(RoundingMode::default(), RoundingMode::HalfExpand);
    }
}
