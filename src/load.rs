use crate::math::phase_voltage;
use crate::report::format_polar;
use derive_builder::Builder;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Load power factor descriptor.
///
/// The magnitude carried by `Lagging`/`Leading` is cos(phi) and is restricted
/// to [0.5, 0.99] at the input boundary. `Unity` fixes it at 1.0 regardless
/// of any slider value the UI may hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PowerFactor {
    /// Inductive load, current trails voltage.
    Lagging(f64),
    /// Resistive load.
    Unity,
    /// Capacitive load, current leads voltage.
    Leading(f64),
}

impl PowerFactor {
    /// cos(phi) magnitude.
    pub fn magnitude(&self) -> f64 {
        match *self {
            PowerFactor::Lagging(m) | PowerFactor::Leading(m) => m,
            PowerFactor::Unity => 1.0,
        }
    }

    /// Load angle phi (rad), negative for a leading power factor.
    pub fn phi(&self) -> f64 {
        match *self {
            PowerFactor::Unity => 0.0,
            PowerFactor::Lagging(m) => m.acos(),
            PowerFactor::Leading(m) => -m.acos(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            PowerFactor::Lagging(_) => "Lagging",
            PowerFactor::Unity => "Unity",
            PowerFactor::Leading(_) => "Leading",
        }
    }
}

/// Operating conditions at the receiving (load) end of the line.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(default, build_fn(validate = "Self::validate"))]
pub struct ReceivingEndCondition {
    /// Line-to-line voltage (kV).
    pub vr_kv: f64,

    /// Active power demand (MW).
    pub pr_mw: f64,

    pub pf: PowerFactor,
}

impl Default for ReceivingEndCondition {
    fn default() -> Self {
        Self {
            vr_kv: 220.0,
            pr_mw: 150.0,
            pf: PowerFactor::Lagging(0.85),
        }
    }
}

impl ReceivingEndConditionBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(vr_kv) = self.vr_kv {
            if vr_kv <= 0.0 {
                return Err(format!("receiving voltage must be positive ({})", vr_kv));
            }
        }
        if let Some(pr_mw) = self.pr_mw {
            if pr_mw < 0.0 {
                return Err(format!("receiving power must not be negative ({})", pr_mw));
            }
        }
        if let Some(pf) = self.pf {
            match pf {
                PowerFactor::Lagging(m) | PowerFactor::Leading(m) => {
                    if !(0.5..=0.99).contains(&m) {
                        return Err(format!(
                            "power factor magnitude must be within [0.5, 0.99] ({})",
                            m
                        ));
                    }
                }
                PowerFactor::Unity => {}
            }
        }
        Ok(())
    }
}

/// Receiving-end quantities resolved from the operating conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceivingEnd {
    /// Load angle phi (rad).
    pub phi: f64,

    /// Reactive power demand (MVAr), negative for a leading load.
    pub qr_mvar: f64,

    /// Apparent power demand (MVA).
    pub sr_mva: f64,

    /// Per-phase voltage magnitude (V), taken as the phase reference.
    pub vr_ph: f64,

    /// Per-phase current phasor (A) relative to the voltage reference.
    pub ir: Complex64,
}

/// Resolves the receiving-end phasors from the load conditions.
///
/// The receiving voltage is the phase reference, so the current phasor sits
/// at `-phi`: a lagging load draws current that trails the voltage. The
/// current degenerates to zero at no load.
pub fn make_receiving_end(cond: &ReceivingEndCondition) -> ReceivingEnd {
    let phi = cond.pf.phi();
    let qr_mvar = cond.pr_mw * phi.tan();
    let sr_mva = (cond.pr_mw * cond.pr_mw + qr_mvar * qr_mvar).sqrt();

    let vr_ph = phase_voltage(cond.vr_kv);

    let ir_mag = if cond.pr_mw > 0.0 {
        (cond.pr_mw * 1e6 / 3.0) / (vr_ph * cond.pf.magnitude())
    } else {
        0.0
    };
    let ir = Complex64::from_polar(ir_mag, -phi);

    log::debug!("Ir: {}", format_polar(&ir));

    ReceivingEnd {
        phi,
        qr_mvar,
        sr_mva,
        vr_ph,
        ir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unity_load_draws_no_reactive_power() {
        let cond = ReceivingEndConditionBuilder::default()
            .pf(PowerFactor::Unity)
            .build()
            .unwrap();
        let re = make_receiving_end(&cond);
        assert_eq!(re.qr_mvar, 0.0);
        assert_eq!(re.sr_mva, cond.pr_mw);
        assert_eq!(re.ir.im, 0.0);
    }

    #[test]
    fn leading_load_has_negative_reactive_power() {
        let cond = ReceivingEndConditionBuilder::default()
            .pf(PowerFactor::Leading(0.9))
            .build()
            .unwrap();
        let re = make_receiving_end(&cond);
        assert!(re.qr_mvar < 0.0);
        assert!(re.phi < 0.0);
        // Leading current leads the voltage reference.
        assert!(re.ir.arg() > 0.0);
    }

    #[test]
    fn no_load_current_is_zero() {
        let cond = ReceivingEndConditionBuilder::default()
            .pr_mw(0.0)
            .build()
            .unwrap();
        let re = make_receiving_end(&cond);
        assert_eq!(re.ir, Complex64::default());
        assert_eq!(re.sr_mva, 0.0);
    }

    #[test]
    fn lagging_220kv_150mw_case() {
        let cond = ReceivingEndConditionBuilder::default().build().unwrap();
        let re = make_receiving_end(&cond);

        assert!((re.vr_ph - 127017.06).abs() < 0.5);
        assert!((re.qr_mvar - 92.9617).abs() < 1e-3);
        assert!((re.sr_mva - 176.4706).abs() < 1e-3);
        // (150e6/3) / (127017.06 * 0.85)
        assert!((re.ir.norm() - 463.115).abs() < 0.05);
        // Lagging current trails the voltage reference.
        assert!(re.ir.arg() < 0.0);
    }

    #[test]
    fn rejects_out_of_range_power_factor() {
        let res = ReceivingEndConditionBuilder::default()
            .pf(PowerFactor::Lagging(0.4))
            .build();
        assert!(res.is_err());

        let res = ReceivingEndConditionBuilder::default()
            .pf(PowerFactor::Leading(0.999))
            .build();
        assert!(res.is_err());
    }
}
