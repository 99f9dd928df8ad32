use crate::abcd::{make_abcd, TwoPort};
use crate::line::LineParameters;
use crate::load::{ReceivingEnd, ReceivingEndCondition};
use crate::math::{line_voltage_kv, to_degrees};
use crate::report::{format_polar, format_rect};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Sending-end solution of the nominal-pi ABCD model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendingEnd {
    pub abcd: TwoPort,

    /// Sending voltage phasor (V/phase).
    pub vs: Complex64,

    /// No-load component `A*Vr` of the sending voltage (V/phase).
    pub vs_no_load: Complex64,

    /// Load-drop component `B*Ir` of the sending voltage (V/phase).
    pub vs_load_drop: Complex64,

    /// Sending current phasor (A/phase).
    pub is: Complex64,

    /// Sending line-to-line voltage magnitude (kV).
    pub vs_line_kv: f64,

    /// Three-phase sending complex power (VA).
    pub ss: Complex64,

    /// Sending active power (MW).
    pub ps_mw: f64,

    /// Sending reactive power (MVAr).
    pub qs_mvar: f64,

    /// Sending apparent power (MVA).
    pub ss_mva: f64,

    /// Sending power factor.
    pub pf_s: f64,

    /// Transmission efficiency (%).
    pub efficiency: f64,

    /// Voltage regulation (%).
    pub regulation: f64,

    /// Load angle between the end voltages (deg).
    pub load_angle: f64,
}

/// Evaluates the nominal-pi ABCD model.
///
/// The receiving voltage is the phase reference. The receiving current is
/// recovered from the complex power by the passive sign convention,
/// `Ir = conj(Sr/Vr)`, rather than from the power-factor magnitude, so the
/// transfer relation applies to the exact phasor pair.
pub fn run_pi(line: &LineParameters, cond: &ReceivingEndCondition, re: &ReceivingEnd) -> SendingEnd {
    let abcd = make_abcd(line);

    let vr = Complex64::new(re.vr_ph, 0.0);
    let sr_ph = Complex64::new(cond.pr_mw, re.qr_mvar) * 1e6 / 3.0;
    let ir = (sr_ph / vr).conj();

    let vs_no_load = abcd.a * vr;
    let vs_load_drop = abcd.b * ir;
    let (vs, is) = abcd.send(vr, ir);

    let ss = 3.0 * vs * is.conj();

    log::debug!("Vs: {}", format_polar(&vs));
    log::debug!("Is: {}", format_polar(&is));
    log::debug!("Ss: {}", format_rect(&ss));
    let ps_mw = ss.re / 1e6;
    let qs_mvar = ss.im / 1e6;
    let ss_mva = ss.norm() / 1e6;

    let pf_s = if ss_mva > 0.0 { ps_mw / ss_mva } else { 1.0 };
    let efficiency = if ps_mw > 0.0 {
        cond.pr_mw / ps_mw * 100.0
    } else {
        0.0
    };

    let vs_line_kv = line_voltage_kv(vs.norm());
    let regulation = (vs_line_kv - cond.vr_kv) / cond.vr_kv * 100.0;
    let load_angle = to_degrees(vs.arg());

    SendingEnd {
        abcd,
        vs,
        vs_no_load,
        vs_load_drop,
        is,
        vs_line_kv,
        ss,
        ps_mw,
        qs_mvar,
        ss_mva,
        pf_s,
        efficiency,
        regulation,
        load_angle,
    }
}
