use super::*;
use approx::assert_relative_eq;

#[test]
fn point_with_whitespace_is_accepted() {
    let p = parse_point("  0.5 , -1.25 ", Mode::Real).expect("gültiger Punkt");
    assert_relative_eq!(p.x, 0.5);
    assert_relative_eq!(p.y, -1.25);
}

#[test]
fn point_text_abc_is_invalid_input() {
    assert!(matches!(
        parse_point("abc", Mode::Real),
        Err(CurveError::InvalidInput { .. })
    ));
}

#[test]
fn point_with_wrong_arity_is_rejected() {
    for text in ["1", "1,2,3", "", ","] {
        assert!(
            matches!(
                parse_point(text, Mode::Real),
                Err(CurveError::InvalidInput { .. })
            ),
            "{text:?}"
        );
    }
}

#[test]
fn point_with_empty_part_is_rejected() {
    let err = parse_point("1,", Mode::Real).expect_err("y fehlt");
    assert!(err.to_string().contains("y fehlt"));
}

#[test]
fn non_finite_coordinates_are_rejected() {
    assert!(parse_point("inf,1", Mode::Real).is_err());
    assert!(parse_point("1,NaN", Mode::Real).is_err());
}

#[test]
fn modular_points_must_be_integral() {
    assert!(matches!(
        parse_point("1.5,2", Mode::ModularField),
        Err(CurveError::OutOfDomain { .. })
    ));
    let p = parse_point("-3,100", Mode::ModularField).expect("ganzzahlig");
    assert_eq!(p, DVec2::new(-3.0, 100.0));
}

#[test]
fn coefficient_parses_scientific_notation() {
    assert_relative_eq!(
        parse_coefficient("1e-1", "a", Mode::Real).expect("Zahl"),
        0.1
    );
}

#[test]
fn coefficient_must_be_integral_in_modular_mode() {
    assert!(parse_coefficient("0.5", "a", Mode::Real).is_ok());
    assert!(matches!(
        parse_coefficient("0.5", "a", Mode::ModularField),
        Err(CurveError::OutOfDomain { .. })
    ));
}

#[test]
fn modulus_bounds_are_enforced() {
    assert_eq!(parse_modulus(" 23 ", 500).expect("gültig").value(), 23);
    assert!(matches!(
        parse_modulus("1", 500),
        Err(CurveError::OutOfDomain { .. })
    ));
    assert!(matches!(
        parse_modulus("0", 500),
        Err(CurveError::OutOfDomain { .. })
    ));
    assert!(matches!(
        parse_modulus("501", 500),
        Err(CurveError::OutOfDomain { .. })
    ));
    assert!(matches!(
        parse_modulus("7.5", 500),
        Err(CurveError::InvalidInput { .. })
    ));
}
