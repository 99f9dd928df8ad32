use crate::cmplx;
use crate::line::LineParameters;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// ABCD transfer constants of a symmetric two-port line.
///
/// The constants relate the ends per phase:
///
/// ```text
/// | Vs |   | A  B |   | Vr |
/// |    | = |      | * |    |
/// | Is |   | C  D |   | Ir |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoPort {
    pub a: Complex64,
    pub b: Complex64,
    pub c: Complex64,
    pub d: Complex64,
}

/// Builds the ABCD constants of the nominal-pi network.
///
/// The series impedance `Z` carries the line current; the shunt admittance
/// `Y` is split into two halves, one at each end:
///
/// ```text
/// A = D = 1 + YZ/2
/// B = Z
/// C = Y * (1 + YZ/4)
/// ```
///
/// With no shunt (short line) this degenerates to A = D = 1, B = Z, C = 0.
pub fn make_abcd(line: &LineParameters) -> TwoPort {
    let z = line.z();
    let y = line.y_shunt();

    let a = cmplx!(1.0) + y * z / 2.0;
    let b = z;
    let c = y * (cmplx!(1.0) + y * z / 4.0);

    TwoPort { a, b, c, d: a }
}

impl TwoPort {
    /// ABCD determinant `AD - BC`. Unity for any reciprocal network.
    pub fn det(&self) -> Complex64 {
        self.a * self.d - self.b * self.c
    }

    /// Sending-end phasors from receiving-end phasors.
    pub fn send(&self, vr: Complex64, ir: Complex64) -> (Complex64, Complex64) {
        let vs = self.a * vr + self.b * ir;
        let is = self.c * vr + self.d * ir;
        (vs, is)
    }

    /// Receiving-end phasors from sending-end phasors (inverse relation).
    pub fn receive(&self, vs: Complex64, is: Complex64) -> (Complex64, Complex64) {
        let det = self.det();
        let vr = (self.d * vs - self.b * is) / det;
        let ir = (-self.c * vs + self.a * is) / det;
        (vr, ir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::LineParametersBuilder;

    fn medium_line() -> LineParameters {
        LineParametersBuilder::default()
            .xc(Some(1000.0))
            .build()
            .unwrap()
    }

    #[test]
    fn nominal_pi_constants() {
        let tp = make_abcd(&medium_line());

        // YZ/2 = j0.001 * (10 + j50) / 2
        assert!((tp.a.re - 0.975).abs() < 1e-12);
        assert!((tp.a.im - 0.005).abs() < 1e-12);
        assert_eq!(tp.b, cmplx!(10.0, 50.0));
        assert_eq!(tp.a, tp.d);
    }

    #[test]
    fn reciprocity_holds_across_parameters() {
        for (r, x, xc) in [
            (10.0, 50.0, 1000.0),
            (0.0, 25.0, 800.0),
            (5.0, 80.0, 1500.0),
            (45.0, 180.0, 2500.0),
        ] {
            let line = LineParametersBuilder::default()
                .r(r)
                .x(x)
                .xc(Some(xc))
                .build()
                .unwrap();
            let tp = make_abcd(&line);

            assert_eq!(tp.a, tp.d);
            assert!((tp.det() - cmplx!(1.0)).norm() < 1e-9);
        }
    }

    #[test]
    fn short_line_degenerates_to_series_branch() {
        let line = LineParametersBuilder::default().build().unwrap();
        let tp = make_abcd(&line);

        assert_eq!(tp.a, cmplx!(1.0));
        assert_eq!(tp.c, cmplx!());
        assert_eq!(tp.b, line.z());
    }

    #[test]
    fn inverse_relation_round_trips() {
        let tp = make_abcd(&medium_line());

        let vr = cmplx!(127017.06);
        let ir = Complex64::from_polar(463.1, -0.5548);

        let (vs, is) = tp.send(vr, ir);
        let (vr2, ir2) = tp.receive(vs, is);

        assert!((vr2 - vr).norm() < 1e-6 * vr.norm());
        assert!((ir2 - ir).norm() < 1e-6 * ir.norm());
    }
}
