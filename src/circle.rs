use crate::math::to_degrees;
use num_complex::Complex64;
use num_traits::clamp;
use serde::{Deserialize, Serialize};

/// Receiving-end power circle in the three-phase (P, Q) plane (MW, MVAr).
///
/// Locus of feasible operating points for fixed end-voltage magnitudes and
/// line impedance. For an inductive line the center sits in the third
/// quadrant and the operating point lies on the circle at angle `beta -
/// delta` from the center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerCircle {
    /// Center abscissa (MW).
    pub cx: f64,

    /// Center ordinate (MVAr).
    pub cy: f64,

    /// Radius (MVA).
    pub radius: f64,

    /// Impedance angle beta = arg(Z) (deg).
    pub beta: f64,

    /// Load angle delta at the operating point (deg).
    pub delta: f64,
}

/// Builds the receiving-end power circle for the line impedance `z`, the
/// per-phase end-voltage magnitudes and the delivered power `p_mw`.
///
/// The load angle is recovered from the steady-state transfer relation
///
/// ```text
/// P/phase = (|Vs||Vr|/|Z|) cos(beta - delta) - (|Vr|^2/|Z|) cos(beta)
/// ```
///
/// The acos argument is clamped to [-1, 1]: operating points at or past the
/// static limit would otherwise push it out of the domain through roundoff.
pub fn make_power_circle(z: Complex64, vr_ph: f64, vs_ph: f64, p_mw: f64) -> PowerCircle {
    let z_mag = z.norm();
    let beta = z.arg();

    let vr2_over_z = vr_ph * vr_ph / z_mag;
    let cx = -vr2_over_z * beta.cos() * 3e-6;
    let cy = -vr2_over_z * beta.sin() * 3e-6;
    let radius = vs_ph * vr_ph / z_mag * 3e-6;

    let term1 = p_mw / 3.0 * 1e6 + vr2_over_z * beta.cos();
    let cos_bd = clamp(term1 * z_mag / (vs_ph * vr_ph), -1.0, 1.0);
    let delta = beta - cos_bd.acos();

    PowerCircle {
        cx,
        cy,
        radius,
        beta: to_degrees(beta),
        delta: to_degrees(delta),
    }
}

/// Apparent-power circle about the origin with its (P, Q) operating point,
/// one per line end, for the combined circle figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApparentCircle {
    /// Radius |S| (MVA).
    pub s_mva: f64,

    /// Operating point abscissa P (MW).
    pub p_mw: f64,

    /// Operating point ordinate Q (MVAr).
    pub q_mvar: f64,
}

impl ApparentCircle {
    pub fn new(p_mw: f64, q_mvar: f64) -> Self {
        Self {
            s_mva: (p_mw * p_mw + q_mvar * q_mvar).sqrt(),
            p_mw,
            q_mvar,
        }
    }
}
