use num_complex::Complex64;
use std::f64::consts::PI;

pub const J: Complex64 = Complex64 { re: 0.0, im: 1.0 };

pub const SQRT_3: f64 = 1.7320508075688772;

#[macro_export]
macro_rules! cmplx {
    () => {
        num_complex::Complex64::new(0.0, 0.0)
    };
    ($arg1:expr) => {
        num_complex::Complex64::new($arg1, 0.0)
    };
    ($arg1:expr, $arg2:expr) => {
        num_complex::Complex64::new($arg1, $arg2)
    };
}

/// Converts radians to degrees.
pub fn to_degrees(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Per-phase voltage (V) from a line-to-line voltage (kV).
pub fn phase_voltage(v_ll_kv: f64) -> f64 {
    v_ll_kv * 1000.0 / SQRT_3
}

/// Line-to-line voltage (kV) from a per-phase voltage magnitude (V).
pub fn line_voltage_kv(v_ph: f64) -> f64 {
    v_ph * SQRT_3 / 1000.0
}
