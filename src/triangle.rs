use serde::{Deserialize, Serialize};

/// Power triangle of one line end in the (P, Q) plane (MW, MVAr, MVA).
///
/// The P leg runs along the abscissa, the Q leg rises (or drops, leading
/// load) from its tip, and S closes the triangle from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerTriangle {
    pub p_mw: f64,
    pub q_mvar: f64,
    pub s_mva: f64,
}

impl PowerTriangle {
    pub fn new(p_mw: f64, q_mvar: f64) -> Self {
        Self {
            p_mw,
            q_mvar,
            s_mva: (p_mw * p_mw + q_mvar * q_mvar).sqrt(),
        }
    }

    /// Vertices in drawing order: origin, P-leg tip, apex.
    pub fn vertices(&self) -> [(f64, f64); 3] {
        [(0.0, 0.0), (self.p_mw, 0.0), (self.p_mw, self.q_mvar)]
    }

    /// Symmetric axis extent for plotting, never collapsing for small loads.
    pub fn axis_limit(&self) -> f64 {
        self.p_mw.abs().max(self.q_mvar.abs()).max(20.0) * 1.3
    }
}
