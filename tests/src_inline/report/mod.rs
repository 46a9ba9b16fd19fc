use super::*;

#[test]
fn test_format_py_float_integral_values() {
    assert_eq!(format_py_float(40.0), "40.0");
    assert_eq!(format_py_float(100.0), "100.0");
    assert_eq!(format_py_float(0.0), "0.0");
    assert_eq!(format_py_float(-3.0), "-3.0");
}

#[test]
fn test_format_py_float_shortest_digits() {
    assert_eq!(format_py_float(36.505), "36.505");
    assert_eq!(format_py_float(0.85 * 100.0), "85.0");
    assert_eq!(format_py_float(0.9843749999999999 * 100.0), "98.43749999999999");
    assert_eq!(format_py_float(0.0001), "0.0001");
}

#[test]
fn test_format_py_float_exponent_form() {
    assert_eq!(format_py_float(1e-5), "1e-05");
    assert_eq!(format_py_float(-2.5e-7), "-2.5e-07");
    assert_eq!(format_py_float(1e16), "1e+16");
    assert_eq!(format_py_float(1.5e300), "1.5e+300");
}

#[test]
fn test_format_py_float_non_finite() {
    assert_eq!(format_py_float(f64::NAN), "nan");
    assert_eq!(format_py_float(f64::INFINITY), "inf");
    assert_eq!(format_py_float(f64::NEG_INFINITY), "-inf");
}
