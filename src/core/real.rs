//! Punktaddition über den reellen Zahlen (Sehnen-Tangenten-Regel).

use super::curve::CurveParams;
use super::point::{
    AdditionResult, Construction, ConstructionKind, CurvePoint, DegenerateSlope, RealAddition,
};
use glam::DVec2;

/// Addiert zwei Punkte P und Q auf der Kurve.
///
/// Senkrechte Hilfsgeraden werden vor der Division erkannt:
/// - P = Q mit y₁ = 0 → senkrechte Tangente
/// - P ≠ Q mit x₁ = x₂ → senkrechte Sekante
///
/// In beiden Fällen ist die Summe das Neutralelement.
pub fn point_add(p: DVec2, q: DVec2, params: &CurveParams) -> RealAddition {
    if !p.is_finite() || !q.is_finite() {
        return AdditionResult::Undefined;
    }

    let (kind, slope) = if p == q {
        if p.y == 0.0 {
            return AdditionResult::Identity(DegenerateSlope::VerticalTangent);
        }
        (
            ConstructionKind::Tangent,
            (3.0 * p.x * p.x + params.a) / (2.0 * p.y),
        )
    } else if p.x == q.x {
        return AdditionResult::Identity(DegenerateSlope::VerticalChord);
    } else {
        (ConstructionKind::Secant, (q.y - p.y) / (q.x - p.x))
    };

    let x3 = slope * slope - p.x - q.x;
    let y_raw = slope * (p.x - x3) - p.y;
    let intersection = DVec2::new(x3, y_raw);
    let sum = DVec2::new(x3, -y_raw);

    if !slope.is_finite() || !intersection.is_finite() {
        log::debug!("Punktaddition übergelaufen: P={p}, Q={q}, m={slope}");
        return AdditionResult::Undefined;
    }

    AdditionResult::Sum(Construction {
        kind,
        slope,
        intersection,
        sum,
    })
}

/// Gruppenaddition inklusive Neutralelement: O + Q = Q, P + O = P.
///
/// `None`, wenn die affine Summe undefiniert ist.
pub fn add_curve_points(
    p: CurvePoint<DVec2>,
    q: CurvePoint<DVec2>,
    params: &CurveParams,
) -> Option<CurvePoint<DVec2>> {
    if p.is_identity() {
        return Some(q);
    }
    match (p.affine(), q.affine()) {
        (Some(p), Some(q)) => point_add(p, q, params).sum_point(),
        _ => Some(p),
    }
}

/// Verdoppelt einen Punkt (P + P).
pub fn point_double(p: DVec2, params: &CurveParams) -> RealAddition {
    point_add(p, p, params)
}

/// y-Wert der Hilfsgeraden an Stelle `x`: y = m·(x − x₁) + y₁
pub fn line_y(slope: f64, through: DVec2, x: f64) -> f64 {
    slope * (x - through.x) + through.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::curve::ON_CURVE_TOLERANCE;
    use approx::assert_relative_eq;

    fn curve() -> CurveParams {
        CurveParams::new(-1.0, 1.0)
    }

    fn expect_sum(result: RealAddition) -> Construction<DVec2, f64> {
        match result {
            AdditionResult::Sum(c) => c,
            other => panic!("Endliche Summe erwartet, erhalten: {other:?}"),
        }
    }

    #[test]
    fn test_secant_addition_example() {
        let c = expect_sum(point_add(
            DVec2::new(0.0, 1.0),
            DVec2::new(1.0, 1.0),
            &curve(),
        ));
        assert_eq!(c.kind, ConstructionKind::Secant);
        assert_relative_eq!(c.slope, 0.0);
        assert_relative_eq!(c.intersection.x, -1.0);
        assert_relative_eq!(c.intersection.y, -1.0);
        assert_relative_eq!(c.sum.x, -1.0);
        assert_relative_eq!(c.sum.y, 1.0);
    }

    #[test]
    fn test_doubling_example() {
        let c = expect_sum(point_double(DVec2::new(0.0, 1.0), &curve()));
        assert_eq!(c.kind, ConstructionKind::Tangent);
        assert_relative_eq!(c.slope, -0.5);
        assert_relative_eq!(c.intersection.x, 0.25);
        assert_relative_eq!(c.intersection.y, -0.875);
        assert_relative_eq!(c.sum.x, 0.25);
        assert_relative_eq!(c.sum.y, 0.875);
    }

    #[test]
    fn test_doubling_result_lies_on_curve() {
        let params = curve();
        for x in [-0.5_f64, 0.0, 0.7, 1.3, 2.0] {
            let y = params.rhs(x).sqrt();
            let c = expect_sum(point_double(DVec2::new(x, y), &params));
            assert!(
                params.contains(c.sum, ON_CURVE_TOLERANCE),
                "2·({x}, {y}) = {:?} liegt nicht auf der Kurve",
                c.sum
            );
            assert!(params.contains(c.intersection, ON_CURVE_TOLERANCE));
        }
    }

    #[test]
    fn test_addition_is_commutative() {
        let params = curve();
        let p = DVec2::new(-1.0, 1.0);
        let q = DVec2::new(1.5, params.rhs(1.5).sqrt());

        let pq = expect_sum(point_add(p, q, &params));
        let qp = expect_sum(point_add(q, p, &params));

        assert_relative_eq!(pq.slope, qp.slope, epsilon = 1e-12);
        assert_relative_eq!(pq.sum.x, qp.sum.x, epsilon = 1e-9);
        assert_relative_eq!(pq.sum.y, qp.sum.y, epsilon = 1e-9);
        assert!(params.contains(pq.sum, ON_CURVE_TOLERANCE));
    }

    #[test]
    fn test_vertical_chord_yields_identity() {
        let result = point_add(DVec2::new(0.0, 1.0), DVec2::new(0.0, -1.0), &curve());
        assert_eq!(
            result,
            AdditionResult::Identity(DegenerateSlope::VerticalChord)
        );
        assert_eq!(result.sum_point(), Some(crate::core::CurvePoint::Identity));
    }

    #[test]
    fn test_doubling_point_of_order_two_yields_identity() {
        // y² = x³ - x hat (1, 0) als Punkt der Ordnung 2
        let params = CurveParams::new(-1.0, 0.0);
        let result = point_double(DVec2::new(1.0, 0.0), &params);
        assert_eq!(
            result,
            AdditionResult::Identity(DegenerateSlope::VerticalTangent)
        );
    }

    #[test]
    fn test_negative_zero_counts_as_zero() {
        let params = CurveParams::new(-1.0, 0.0);
        let result = point_double(DVec2::new(1.0, -0.0), &params);
        assert!(result.is_identity());
    }

    #[test]
    fn test_non_finite_input_is_undefined() {
        let result = point_add(DVec2::new(f64::NAN, 1.0), DVec2::new(1.0, 1.0), &curve());
        assert_eq!(result, AdditionResult::Undefined);
        assert_eq!(result.sum_point(), None);
    }

    #[test]
    fn test_overflow_is_undefined() {
        let result = point_add(DVec2::new(0.0, 1.0), DVec2::new(1e-300, 1e300), &curve());
        assert_eq!(result, AdditionResult::Undefined);
    }

    #[test]
    fn test_identity_operand_returns_other_operand() {
        let params = curve();
        let p = CurvePoint::Affine(DVec2::new(0.0, 1.0));

        assert_eq!(add_curve_points(CurvePoint::Identity, p, &params), Some(p));
        assert_eq!(add_curve_points(p, CurvePoint::Identity, &params), Some(p));
        assert_eq!(
            add_curve_points(CurvePoint::Identity, CurvePoint::Identity, &params),
            Some(CurvePoint::Identity)
        );
    }

    #[test]
    fn test_point_plus_negation_then_plus_point_returns_point() {
        let params = curve();
        let p = CurvePoint::Affine(DVec2::new(1.0, 1.0));
        let minus_p = CurvePoint::Affine(DVec2::new(1.0, -1.0));

        let zero = add_curve_points(p, minus_p, &params).expect("definiert");
        assert!(zero.is_identity());
        assert_eq!(add_curve_points(zero, p, &params), Some(p));

        let sum = add_curve_points(p, CurvePoint::Affine(DVec2::new(0.0, 1.0)), &params)
            .and_then(|s| s.affine())
            .expect("endliche Summe");
        assert!(params.contains(sum, ON_CURVE_TOLERANCE));
    }

    #[test]
    fn test_line_y() {
        assert_relative_eq!(line_y(-0.5, DVec2::new(0.0, 1.0), 2.0), 0.0);
        assert_relative_eq!(line_y(2.0, DVec2::new(1.0, 1.0), 3.0), 5.0);
    }
}
