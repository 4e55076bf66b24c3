//! Regime-aware Nusselt number and friction factor correlations.
//!
//! Between the laminar and turbulent thresholds both quantities are linearly
//! interpolated between their values at the two thresholds, using the same
//! fraction for each. The result is continuous in Reynolds number, which keeps
//! junction temperature monotonic in flow rate.

use serde::Serialize;

/// Reynolds number below which flow is laminar.
pub const LAMINAR_LIMIT: f64 = 2300.0;

/// Reynolds number above which flow is turbulent.
pub const TURBULENT_LIMIT: f64 = 4000.0;

/// Fully developed laminar Nusselt number for constant wall heat flux.
pub const LAMINAR_NUSSELT: f64 = 4.36;

/// Flow regime of the coolant in the channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    /// `Re < 2300`: constant Nusselt number and `f = 64/Re`.
    Laminar,
    /// `2300 ≤ Re ≤ 4000`: linear blend of the laminar and turbulent values.
    Transitional,
    /// `Re > 4000`: Dittus–Boelter heating and Blasius friction.
    Turbulent,
}

impl Regime {
    /// Classifies a Reynolds number.
    ///
    /// Both thresholds belong to the transitional band.
    #[must_use]
    pub fn classify(reynolds: f64) -> Self {
        if reynolds < LAMINAR_LIMIT {
            Self::Laminar
        } else if reynolds > TURBULENT_LIMIT {
            Self::Turbulent
        } else {
            Self::Transitional
        }
    }

    /// Returns the lowercase regime name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Laminar => "laminar",
            Self::Transitional => "transitional",
            Self::Turbulent => "turbulent",
        }
    }
}

/// Convection and friction for one Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correlation {
    pub regime: Regime,
    pub nusselt: f64,
    /// Darcy friction factor.
    pub friction_factor: f64,
}

/// Evaluates the correlations at a Reynolds and Prandtl number.
///
/// `reynolds` must be strictly positive; non-positive flow is rejected during
/// input validation.
#[must_use]
pub fn correlate(reynolds: f64, prandtl: f64) -> Correlation {
    let regime = Regime::classify(reynolds);

    let (nusselt, friction_factor) = match regime {
        Regime::Laminar => (LAMINAR_NUSSELT, laminar_friction(reynolds)),
        Regime::Turbulent => (
            dittus_boelter(reynolds, prandtl),
            blasius_friction(reynolds),
        ),
        Regime::Transitional => {
            let fraction = (reynolds - LAMINAR_LIMIT) / (TURBULENT_LIMIT - LAMINAR_LIMIT);
            (
                lerp(
                    LAMINAR_NUSSELT,
                    dittus_boelter(TURBULENT_LIMIT, prandtl),
                    fraction,
                ),
                lerp(
                    laminar_friction(LAMINAR_LIMIT),
                    blasius_friction(TURBULENT_LIMIT),
                    fraction,
                ),
            )
        }
    };

    Correlation {
        regime,
        nusselt,
        friction_factor,
    }
}

fn dittus_boelter(reynolds: f64, prandtl: f64) -> f64 {
    0.023 * reynolds.powf(0.8) * prandtl.powf(0.4)
}

fn laminar_friction(reynolds: f64) -> f64 {
    64.0 / reynolds
}

fn blasius_friction(reynolds: f64) -> f64 {
    0.3164 * reynolds.powf(-0.25)
}

fn lerp(start: f64, end: f64, fraction: f64) -> f64 {
    start + fraction * (end - start)
}
