use crate::circle::{make_power_circle, ApparentCircle, PowerCircle};
use crate::line::LineParameters;
use crate::load::{make_receiving_end, PowerFactor, ReceivingEndCondition};
use crate::pi::{run_pi, SendingEnd};
use crate::series::run_series;
use crate::triangle::PowerTriangle;
use serde::{Deserialize, Serialize};

/// Line model variant.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum Model {
    /// Series I^2 R / I^2 X loss addition; no shunt, no phase coupling.
    /// Valid for short lines only.
    SimplifiedSeries,
    /// Nominal-pi ABCD two-port model for medium-length lines.
    NominalPi,
}

/// Evaluation options.
pub struct EvalOpt {
    pub model: Model,

    /// Nominal sending line-to-line voltage (kV). Reported for the
    /// simplified model, which computes no sending phasor of its own.
    /// The nominal-pi model ignores it.
    pub vs_kv: Option<f64>,
}

impl Default for EvalOpt {
    fn default() -> Self {
        Self {
            model: Model::NominalPi,
            vs_kv: None,
        }
    }
}

/// Result record of one line evaluation. Pure data, consumed by the report
/// renderer, the CLI JSON output, or an external plotting collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub model: Model,

    // Receiving end.
    pub vr_kv: f64,
    pub pr_mw: f64,
    pub qr_mvar: f64,
    pub sr_mva: f64,
    pub pf_r: PowerFactor,

    // Sending end.
    pub ps_mw: f64,
    pub qs_mvar: f64,
    pub ss_mva: f64,
    pub pf_s: f64,
    pub vs_line_kv: Option<f64>,

    // Performance.
    pub p_loss_mw: f64,
    pub q_loss_mvar: f64,
    pub efficiency: f64,
    pub regulation: Option<f64>,
    pub load_angle: Option<f64>,

    /// Full phasor solution, nominal-pi model only.
    pub sending: Option<SendingEnd>,

    // Geometry for the rendering collaborator.
    pub receiving_triangle: PowerTriangle,
    pub sending_triangle: PowerTriangle,
    pub receiving_limit: ApparentCircle,
    pub sending_limit: ApparentCircle,
    pub power_circle: Option<PowerCircle>,
}

/// Runs one line performance evaluation.
///
/// Dispatches on the selected model. The two variants intentionally disagree
/// on sending-end values for the same inputs (the simplified model ignores
/// shunt admittance and phase coupling); they are kept distinct rather than
/// reconciled.
pub fn run_eval(line: &LineParameters, cond: &ReceivingEndCondition, opt: &EvalOpt) -> Evaluation {
    log::debug!("model: {:?}", opt.model);

    let re = make_receiving_end(cond);

    let receiving_triangle = PowerTriangle::new(cond.pr_mw, re.qr_mvar);
    let receiving_limit = ApparentCircle::new(cond.pr_mw, re.qr_mvar);

    match opt.model {
        Model::SimplifiedSeries => {
            let sl = run_series(line, &re, cond.pr_mw);

            Evaluation {
                model: opt.model,
                vr_kv: cond.vr_kv,
                pr_mw: cond.pr_mw,
                qr_mvar: re.qr_mvar,
                sr_mva: re.sr_mva,
                pf_r: cond.pf,
                ps_mw: sl.ps_mw,
                qs_mvar: sl.qs_mvar,
                ss_mva: sl.ss_mva,
                pf_s: sl.pf_s,
                vs_line_kv: opt.vs_kv,
                p_loss_mw: sl.p_loss_mw,
                q_loss_mvar: sl.q_loss_mvar,
                efficiency: sl.efficiency,
                regulation: None,
                load_angle: None,
                sending: None,
                receiving_triangle,
                sending_triangle: PowerTriangle::new(sl.ps_mw, sl.qs_mvar),
                receiving_limit,
                sending_limit: ApparentCircle::new(sl.ps_mw, sl.qs_mvar),
                power_circle: None,
            }
        }
        Model::NominalPi => {
            let se = run_pi(line, cond, &re);
            let circle = make_power_circle(line.z(), re.vr_ph, se.vs.norm(), cond.pr_mw);

            Evaluation {
                model: opt.model,
                vr_kv: cond.vr_kv,
                pr_mw: cond.pr_mw,
                qr_mvar: re.qr_mvar,
                sr_mva: re.sr_mva,
                pf_r: cond.pf,
                ps_mw: se.ps_mw,
                qs_mvar: se.qs_mvar,
                ss_mva: se.ss_mva,
                pf_s: se.pf_s,
                vs_line_kv: Some(se.vs_line_kv),
                p_loss_mw: se.ps_mw - cond.pr_mw,
                q_loss_mvar: se.qs_mvar - re.qr_mvar,
                efficiency: se.efficiency,
                regulation: Some(se.regulation),
                load_angle: Some(se.load_angle),
                sending_triangle: PowerTriangle::new(se.ps_mw, se.qs_mvar),
                sending_limit: ApparentCircle::new(se.ps_mw, se.qs_mvar),
                sending: Some(se),
                receiving_triangle,
                receiving_limit,
                power_circle: Some(circle),
            }
        }
    }
}
