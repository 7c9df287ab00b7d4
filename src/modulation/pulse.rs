//! GFSK frequency-smoothing pulse.

use crate::constants::{BT, SAMPLES_PER_SYMBOL};

/// Evaluate the Gaussian smoothing pulse at time `t`, in symbol periods
/// relative to the symbol center:
///
/// `p(t) = 0.5 * (erf(k*bt*(t+0.5)) - erf(k*bt*(t-0.5)))`
///
/// with `k = pi * sqrt(2 / ln 2)`. The pulse integrates to one over the
/// central symbol and decays to zero within 1.5 symbols either side.
pub fn gfsk_pulse(bt: f32, t: f32) -> f32 {
    let k = std::f32::consts::PI * (2.0 / f32::ln(2.0)).sqrt();
    let arg1 = k * bt * (t + 0.5);
    let arg2 = k * bt * (t - 0.5);
    0.5 * (libm::erff(arg1) - libm::erff(arg2))
}

/// Sample the pulse over its three-symbol support at the output rate.
pub fn smoothing_pulse() -> Vec<f32> {
    let length = 3 * SAMPLES_PER_SYMBOL;
    (0..length)
        .map(|i| {
            let t = i as f32 / SAMPLES_PER_SYMBOL as f32 - 1.5;
            gfsk_pulse(BT, t)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_has_three_symbol_support() {
        let pulse = smoothing_pulse();
        assert_eq!(pulse.len(), 3 * SAMPLES_PER_SYMBOL);
    }

    #[test]
    fn pulse_peaks_at_the_center() {
        let center = gfsk_pulse(BT, 0.0);
        assert!(center > 0.9 && center <= 1.0);
        assert!(gfsk_pulse(BT, 1.0) < center);
        assert!(gfsk_pulse(BT, -1.0) < center);
    }

    #[test]
    fn pulse_is_symmetric() {
        for i in 1..10 {
            let t = i as f32 * 0.15;
            let diff = (gfsk_pulse(BT, t) - gfsk_pulse(BT, -t)).abs();
            assert!(diff < 1e-6, "asymmetry at t={t}: {diff}");
        }
    }

    #[test]
    fn tails_vanish() {
        assert!(gfsk_pulse(BT, 1.5).abs() < 1e-3);
        assert!(gfsk_pulse(BT, -1.5).abs() < 1e-3);
    }

    #[test]
    fn samples_are_nonnegative_and_bounded() {
        for sample in smoothing_pulse() {
            assert!(sample >= 0.0 && sample <= 1.0);
        }
    }
}
