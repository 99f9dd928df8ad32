use crate::perf::{Evaluation, Model};
use num_complex::Complex64;
use pretty_dtoa::{dtoa, FmtFloatConfig};
use std::f64::consts::PI;
use std::fmt::Write;

const FLOAT_CONFIG: FmtFloatConfig = FmtFloatConfig::default()
    .add_point_zero(false)
    .max_significant_digits(9);

const TABLE_CONFIG: FmtFloatConfig = FmtFloatConfig::default()
    .add_point_zero(true)
    .max_significant_digits(6);

pub fn format_f64(f: f64) -> String {
    dtoa(f, FLOAT_CONFIG)
}

pub fn format_rect(z: &Complex64) -> String {
    format!(
        "{}{}j{}",
        dtoa(z.re, FLOAT_CONFIG),
        if z.im.signum() < 0.0 { "-" } else { "+" },
        dtoa(z.im.abs(), FLOAT_CONFIG)
    )
}

pub fn format_polar(z: &Complex64) -> String {
    format!(
        "{}\u{2220}{}\u{00B0}",
        dtoa(z.norm(), FLOAT_CONFIG),
        dtoa(z.arg() * 180.0 / PI, FLOAT_CONFIG)
    )
}

fn cell(f: f64) -> String {
    dtoa(f, TABLE_CONFIG)
}

/// Renders the analytical results table: one row per quantity, with
/// receiving, sending and performance columns.
pub fn write_results(eval: &Evaluation) -> String {
    let mut out = String::new();

    let model = match eval.model {
        Model::SimplifiedSeries => "simplified series impedance",
        Model::NominalPi => "nominal-pi ABCD",
    };
    let _ = writeln!(out, "Model: {}", model);
    let _ = writeln!(
        out,
        "{:<22}{:>18}{:>18}{:>24}",
        "Parameter", "Receiving", "Sending", "Performance"
    );

    let _ = writeln!(
        out,
        "{:<22}{:>15} MW{:>15} MW{:>21} MW",
        "Active power (P)",
        cell(eval.pr_mw),
        cell(eval.ps_mw),
        format!("loss {}", cell(eval.p_loss_mw)),
    );
    let _ = writeln!(
        out,
        "{:<22}{:>13} MVAr{:>13} MVAr{:>19} MVAr",
        "Reactive power (Q)",
        cell(eval.qr_mvar),
        cell(eval.qs_mvar),
        format!("loss {}", cell(eval.q_loss_mvar)),
    );
    let _ = writeln!(
        out,
        "{:<22}{:>14} MVA{:>14} MVA{:>24}",
        "Apparent power (S)",
        cell(eval.sr_mva),
        cell(eval.ss_mva),
        "-",
    );
    let _ = writeln!(
        out,
        "{:<22}{:>15} kV{:>15} kV{:>24}",
        "Voltage (line)",
        cell(eval.vr_kv),
        eval.vs_line_kv.map(cell).unwrap_or_else(|| "-".to_string()),
        eval.regulation
            .map(|r| format!("reg. {} %", cell(r)))
            .unwrap_or_else(|| "-".to_string()),
    );
    let _ = writeln!(
        out,
        "{:<22}{:>10} ({}){:>17}{:>24}",
        "Power factor",
        cell(eval.pf_r.magnitude()),
        eval.pf_r.type_name(),
        cell(eval.pf_s),
        format!("eff. {} %", cell(eval.efficiency)),
    );
    if let Some(delta) = eval.load_angle {
        let _ = writeln!(out, "{:<22}{:>16} deg", "Load angle", cell(delta));
    }
    if let Some(se) = &eval.sending {
        let _ = writeln!(out, "{:<22}{:>18}", "Vs (phase)", format_polar(&se.vs));
        let _ = writeln!(out, "{:<22}{:>18}", "Is (phase)", format_polar(&se.is));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::LineParametersBuilder;
    use crate::load::ReceivingEndConditionBuilder;
    use crate::perf::{run_eval, EvalOpt};
    use anyhow::Result;

    #[test]
    fn formats_complex_values() {
        let z = Complex64::new(10.0, -50.0);
        assert_eq!(format_rect(&z), "10-j50");

        let real = Complex64::new(2.0, 0.0);
        assert_eq!(format_polar(&real), "2\u{2220}0\u{00B0}");
    }

    #[test]
    fn results_table_carries_model_rows() -> Result<()> {
        let line = LineParametersBuilder::default().xc(Some(1000.0)).build()?;
        let cond = ReceivingEndConditionBuilder::default().build()?;
        let eval = run_eval(&line, &cond, &EvalOpt::default());

        let table = write_results(&eval);

        assert!(table.contains("nominal-pi ABCD"));
        assert!(table.contains("Load angle"));
        assert!(table.contains("Vs (phase)"));
        assert!(table.contains("eff."));
        Ok(())
    }
}
