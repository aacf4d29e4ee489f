//! Core units, constants, and the thrust-to-weight helper shared across the Ignition Atlas workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Standard gravity at Earth's surface (m/s²).
    pub const G0: f64 = 9.80665;
    /// Rounded surface gravity used for published engine weights (m/s²).
    ///
    /// The reference tables quote thrust-to-weight ratios against 9.81, not
    /// [`G0`]. Swapping the two shifts several ratios by one.
    pub const GRAVITY_M_S2: f64 = 9.81;
    /// Newtons per kilonewton.
    pub const NEWTONS_PER_KN: f64 = 1_000.0;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::{GRAVITY_M_S2, NEWTONS_PER_KN};

    /// Convert kilonewtons to newtons.
    #[inline]
    pub fn kn_to_n(v: f64) -> f64 {
        v * NEWTONS_PER_KN
    }

    /// Convert newtons to kilonewtons.
    #[inline]
    pub fn n_to_kn(v: f64) -> f64 {
        v / NEWTONS_PER_KN
    }

    /// Weight in newtons of a mass in kilograms at [`GRAVITY_M_S2`].
    #[inline]
    pub fn kg_to_weight_n(mass_kg: f64) -> f64 {
        mass_kg * GRAVITY_M_S2
    }
}

/// Engine performance figures derived from catalog inputs.
pub mod performance {
    use super::units::{kg_to_weight_n, kn_to_n};

    /// Thrust-to-weight ratio of an engine, rounded to the nearest integer.
    ///
    /// `round(thrust_kn * 1000 / (dry_weight_kg * 9.81))`. Callers pass
    /// positive, finite figures; anything else is a data defect and yields
    /// whatever the float arithmetic produces (saturating on the cast).
    #[inline]
    pub fn thrust_to_weight_ratio(thrust_kn: f64, dry_weight_kg: f64) -> u32 {
        (kn_to_n(thrust_kn) / kg_to_weight_n(dry_weight_kg)).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::performance::thrust_to_weight_ratio;
    use super::units::{kg_to_weight_n, kn_to_n, n_to_kn};

    #[test]
    fn raptor_ratio_matches_published_figure() {
        // 2_200_000 / 15_696 = 140.16
        assert_eq!(thrust_to_weight_ratio(2200.0, 1600.0), 140);
    }

    #[test]
    fn rd171m_ratio_matches_published_figure() {
        // 7_904_000 / 93_195 = 84.81
        assert_eq!(thrust_to_weight_ratio(7904.0, 9500.0), 85);
    }

    #[test]
    fn ratio_rounds_to_nearest() {
        // 981 N of weight: 4.383 rounds down, 4.587 rounds up.
        assert_eq!(thrust_to_weight_ratio(4.3, 100.0), 4);
        assert_eq!(thrust_to_weight_ratio(4.5, 100.0), 5);
    }

    #[test]
    fn conversions_are_inverse() {
        assert_eq!(kn_to_n(2.5), 2_500.0);
        assert_eq!(n_to_kn(2_500.0), 2.5);
        assert!((kg_to_weight_n(100.0) - 981.0).abs() < 1e-9);
    }
}
