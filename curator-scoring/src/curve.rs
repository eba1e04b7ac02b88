//! Shared scoring curves used by the dimension scorers.

/// Gaussian bump peaking at `optimal`: `e^(-(x - optimal)² / 2σ²)`.
/// Range: 0.0 – 1.0.
pub fn gaussian(x: f64, optimal: f64, sigma: f64) -> f64 {
    if sigma <= 0.0 {
        return if x == optimal { 1.0 } else { 0.0 };
    }
    let diff = x - optimal;
    (-(diff * diff) / (2.0 * sigma * sigma)).exp()
}

/// Log-normal-shaped bump peaking at `optimal`: `e^(-ln²(x/optimal) / 2)`.
/// Zero for non-positive inputs. Asymmetric: tolerates overshoot better
/// than undershoot on a multiplicative scale.
pub fn log_normal_peak(x: f64, optimal: f64) -> f64 {
    if x <= 0.0 || optimal <= 0.0 {
        return 0.0;
    }
    let ln_ratio = (x / optimal).ln();
    (-(ln_ratio * ln_ratio) / 2.0).exp()
}

/// Linear normalization of `x` into [0, 1] over `[min, max]`, clamped.
pub fn linear_normalize(x: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.5;
    }
    ((x - min) / (max - min)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaussian_peaks_at_optimal() {
        assert_eq!(gaussian(1500.0, 1500.0, 900.0), 1.0);
        assert!(gaussian(100.0, 1500.0, 900.0) < gaussian(1000.0, 1500.0, 900.0));
    }

    #[test]
    fn log_normal_is_zero_below_zero() {
        assert_eq!(log_normal_peak(0.0, 0.05), 0.0);
        assert_eq!(log_normal_peak(-1.0, 0.05), 0.0);
        assert_eq!(log_normal_peak(0.05, 0.05), 1.0);
    }

    #[test]
    fn linear_normalize_clamps() {
        assert_eq!(linear_normalize(30.0, 5.0, 25.0), 1.0);
        assert_eq!(linear_normalize(0.0, 5.0, 25.0), 0.0);
        assert_eq!(linear_normalize(15.0, 5.0, 25.0), 0.5);
    }
}
