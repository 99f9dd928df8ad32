use crate::math::J;
use derive_builder::Builder;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Lumped constants of a balanced three-phase transmission line.
///
/// The series branch is `R + jX`. A medium-length line additionally carries a
/// shunt capacitive reactance `XC`, split into two half admittances at each
/// end (nominal-pi topology). Short-line models leave `xc` unset.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(default, build_fn(validate = "Self::validate"))]
pub struct LineParameters {
    /// Series resistance (ohm/phase).
    pub r: f64,

    /// Series inductive reactance (ohm/phase).
    pub x: f64,

    /// Shunt capacitive reactance (ohm/phase), if modeled.
    pub xc: Option<f64>,
}

impl Default for LineParameters {
    fn default() -> Self {
        Self {
            r: 10.0,
            x: 50.0,
            xc: None,
        }
    }
}

impl LineParameters {
    /// Series impedance `Z = R + jX` (ohm).
    pub fn z(&self) -> Complex64 {
        Complex64::new(self.r, self.x)
    }

    /// Total shunt admittance `Y = j/XC` (siemens), zero when no shunt is
    /// modeled. Purely capacitive, so Y lies on the positive imaginary axis.
    pub fn y_shunt(&self) -> Complex64 {
        match self.xc {
            Some(xc) => J / xc,
            None => Complex64::default(),
        }
    }
}

impl LineParametersBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(r) = self.r {
            if r < 0.0 {
                return Err(format!("line resistance must not be negative ({})", r));
            }
        }
        if let Some(Some(xc)) = self.xc {
            if xc <= 0.0 {
                return Err(format!(
                    "shunt capacitive reactance must be positive ({})",
                    xc
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_line_constants() {
        let line = LineParametersBuilder::default().build().unwrap();
        assert_eq!(line.r, 10.0);
        assert_eq!(line.x, 50.0);
        assert!(line.xc.is_none());
        assert_eq!(line.y_shunt(), Complex64::default());
    }

    #[test]
    fn shunt_admittance_is_capacitive() {
        let line = LineParametersBuilder::default()
            .xc(Some(1000.0))
            .build()
            .unwrap();
        let y = line.y_shunt();
        assert_eq!(y.re, 0.0);
        assert!((y.im - 0.001).abs() < 1e-15);
    }

    #[test]
    fn rejects_negative_resistance() {
        let res = LineParametersBuilder::default().r(-1.0).build();
        assert!(res.is_err());
    }

    #[test]
    fn rejects_non_positive_shunt_reactance() {
        let res = LineParametersBuilder::default().xc(Some(0.0)).build();
        assert!(res.is_err());
    }
}
