use crate::line::LineParameters;
use crate::load::ReceivingEnd;
use serde::{Deserialize, Serialize};

/// Sending-end powers from the simplified series-impedance model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesLoss {
    /// Series I^2 R loss (MW).
    pub p_loss_mw: f64,

    /// Series I^2 X reactive absorption (MVAr).
    pub q_loss_mvar: f64,

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
}

/// Evaluates the simplified series-loss model.
///
/// Adds the three-phase I^2 R and I^2 X losses of the series branch to the
/// receiving powers. The shunt admittance and the phase coupling between
/// voltage drop and power flow are ignored, which holds only for short
/// lines. `xc` on the line, if set, is not used here.
pub fn run_series(line: &LineParameters, re: &ReceivingEnd, pr_mw: f64) -> SeriesLoss {
    let ir_sq = re.ir.norm_sqr();

    let p_loss_mw = 3.0 * ir_sq * line.r / 1e6;
    let q_loss_mvar = 3.0 * ir_sq * line.x / 1e6;

    let ps_mw = pr_mw + p_loss_mw;
    let qs_mvar = re.qr_mvar + q_loss_mvar;
    let ss_mva = (ps_mw * ps_mw + qs_mvar * qs_mvar).sqrt();

    let pf_s = if ss_mva > 0.0 { ps_mw / ss_mva } else { 1.0 };
    let efficiency = if ps_mw > 0.0 {
        pr_mw / ps_mw * 100.0
    } else {
        0.0
    };

    SeriesLoss {
        p_loss_mw,
        q_loss_mvar,
        ps_mw,
        qs_mvar,
        ss_mva,
        pf_s,
        efficiency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::LineParametersBuilder;
    use crate::load::{make_receiving_end, ReceivingEndConditionBuilder};

    #[test]
    fn lagging_150mw_default_line() {
        let line = LineParametersBuilder::default().build().unwrap();
        let cond = ReceivingEndConditionBuilder::default().build().unwrap();
        let re = make_receiving_end(&cond);

        let sl = run_series(&line, &re, cond.pr_mw);

        // 3 * 463.1^2 * 10 / 1e6 and the X counterpart
        assert!((sl.p_loss_mw - 6.434).abs() < 5e-3);
        assert!((sl.q_loss_mvar - 32.17).abs() < 2e-2);
        assert!((sl.ps_mw - 156.43).abs() < 1e-2);
        assert!((sl.efficiency - 95.89).abs() < 1e-2);
        assert!(sl.pf_s < 0.85);
    }

    #[test]
    fn no_load_efficiency_is_zero() {
        let line = LineParametersBuilder::default().build().unwrap();
        let cond = ReceivingEndConditionBuilder::default()
            .pr_mw(0.0)
            .build()
            .unwrap();
        let re = make_receiving_end(&cond);

        let sl = run_series(&line, &re, cond.pr_mw);

        assert_eq!(sl.efficiency, 0.0);
        assert_eq!(sl.ps_mw, 0.0);
        assert_eq!(sl.pf_s, 1.0);
        assert!(sl.efficiency.is_finite());
    }
}
