use serde::{Serialize, Deserialize};

/// How a final prediction is rounded before error and deltas are computed.
///
/// Rounding lets a continuous model reach an exact zero error: once the
/// rounded prediction equals the target, training stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Use predictions as computed.
    #[default]
    Exact,
    /// Round half away from zero to this many decimal places. Values that
    /// cannot be scaled without overflowing are returned unchanged.
    Decimals(u32),
}

impl Rounding {
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Rounding::Exact => x,
            Rounding::Decimals(places) => {
                let Ok(places) = i32::try_from(places) else {
                    return x;
                };
                let factor = 10f64.powi(places);
                let scaled = x * factor;
                if !factor.is_finite() || !scaled.is_finite() {
                    return x;
                }
                scaled.round() / factor
            }
        }
    }

    pub fn apply_all(self, v: &[f64]) -> Vec<f64> {
        v.iter().map(|&x| self.apply(x)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_is_identity() {
        assert_eq!(Rounding::Exact.apply(0.123456789), 0.123456789);
    }

    #[test]
    fn decimals_round_to_places() {
        assert_eq!(Rounding::Decimals(2).apply(7.9904), 7.99);
        assert_eq!(Rounding::Decimals(1).apply(0.96), 1.0);
        assert_eq!(Rounding::Decimals(0).apply(-2.5), -3.0);
    }

    #[test]
    fn unscalable_values_are_left_alone() {
        assert_eq!(Rounding::Decimals(309).apply(1.25), 1.25);
        assert_eq!(Rounding::Decimals(400).apply(1.25), 1.25);
        assert_eq!(Rounding::Decimals(u32::MAX).apply(1.25), 1.25);
        assert_eq!(Rounding::Decimals(2).apply(1e307), 1e307);
        assert_eq!(Rounding::Decimals(2).apply(-1e307), -1e307);
    }

    #[test]
    fn nan_passes_through() {
        assert!(Rounding::Decimals(2).apply(f64::NAN).is_nan());
    }

    #[test]
    fn deserializes_from_snake_case() {
        let r: Rounding = serde_json::from_str(r#"{"decimals":2}"#).unwrap();
        assert_eq!(r, Rounding::Decimals(2));
        let r: Rounding = serde_json::from_str(r#""exact""#).unwrap();
        assert_eq!(r, Rounding::Exact);
    }
}
