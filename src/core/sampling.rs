//! Abtastung der reellen Kurve in zwei Zweige (oben/unten).

use super::curve::CurveParams;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Obergrenze der Abtastpunkte pro Zweig (schützt vor Schrittweiten nahe 0).
pub const MAX_SAMPLES: usize = 100_000;

/// Abtastbereich auf der x-Achse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleDomain {
    /// Linke Grenze
    pub x_min: f64,
    /// Rechte Grenze (inklusive, sofern auf dem Raster)
    pub x_max: f64,
    /// Schrittweite
    pub step: f64,
}

impl Default for SampleDomain {
    fn default() -> Self {
        Self {
            x_min: -3.0,
            x_max: 3.0,
            step: 0.01,
        }
    }
}

impl SampleDomain {
    /// Anzahl der Abtastpunkte. 0 bei ungültigem Bereich oder Schritt.
    pub fn sample_count(&self) -> usize {
        let span = self.x_max - self.x_min;
        if !span.is_finite() || !self.step.is_finite() || self.step <= 0.0 || span < 0.0 {
            return 0;
        }
        // kleiner Zuschlag, damit x_max trotz Rundung noch getroffen wird
        let steps = (span / self.step + 1e-9).floor();
        (steps.min((MAX_SAMPLES - 1) as f64) as usize).saturating_add(1)
    }

    /// Iterator über alle x-Werte (indexbasiert, ohne Aufsummieren von Rundungsfehlern).
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.sample_count()).map(move |i| self.x_min + i as f64 * self.step)
    }
}

/// Zweig der reellen Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// y = +√(x³ + ax + b)
    Upper,
    /// y = −√(x³ + ax + b)
    Lower,
}

/// Abgetastete Kurve: pro Zweig eine Liste zusammenhängender Läufe.
///
/// Wo die rechte Seite negativ ist, endet ein Lauf; über Lücken wird nie interpoliert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveBranches {
    pub upper: Vec<Vec<DVec2>>,
    pub lower: Vec<Vec<DVec2>>,
}

impl CurveBranches {
    /// Läufe eines Zweigs.
    pub fn runs(&self, branch: Branch) -> &[Vec<DVec2>] {
        match branch {
            Branch::Upper => &self.upper,
            Branch::Lower => &self.lower,
        }
    }

    /// Gesamtzahl der Punkte über beide Zweige.
    pub fn point_count(&self) -> usize {
        self.upper
            .iter()
            .chain(self.lower.iter())
            .map(Vec::len)
            .sum()
    }
}

/// Tastet y² = x³ + ax + b über `domain` ab.
pub fn sample_real_curve(params: &CurveParams, domain: &SampleDomain) -> CurveBranches {
    let mut branches = CurveBranches::default();
    let mut upper_run: Vec<DVec2> = Vec::new();
    let mut lower_run: Vec<DVec2> = Vec::new();

    for x in domain.xs() {
        let rhs = params.rhs(x);
        if rhs >= 0.0 && rhs.is_finite() {
            let y = rhs.sqrt();
            upper_run.push(DVec2::new(x, y));
            lower_run.push(DVec2::new(x, -y));
        } else if !upper_run.is_empty() {
            branches.upper.push(std::mem::take(&mut upper_run));
            branches.lower.push(std::mem::take(&mut lower_run));
        }
    }

    if !upper_run.is_empty() {
        branches.upper.push(upper_run);
        branches.lower.push(lower_run);
    }

    branches
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sample_count_default_domain() {
        let domain = SampleDomain::default();
        assert_eq!(domain.sample_count(), 601);
        let last = domain.xs().last().expect("Abtastpunkte erwartet");
        assert_relative_eq!(last, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_domain_yields_no_samples() {
        let zero_step = SampleDomain {
            step: 0.0,
            ..Default::default()
        };
        assert_eq!(zero_step.sample_count(), 0);

        let reversed = SampleDomain {
            x_min: 3.0,
            x_max: -3.0,
            step: 0.01,
        };
        assert_eq!(reversed.sample_count(), 0);

        let tiny = SampleDomain {
            step: 1e-12,
            ..Default::default()
        };
        assert_eq!(tiny.sample_count(), MAX_SAMPLES);

        // span / step läuft nach Unendlich
        let subnormal = SampleDomain {
            step: 1e-310,
            ..Default::default()
        };
        assert_eq!(subnormal.sample_count(), MAX_SAMPLES);
    }

    #[test]
    fn test_branch_points_satisfy_equation_and_mirror() {
        for params in [
            CurveParams::new(-1.0, 1.0),
            CurveParams::new(-2.0, 1.0),
            CurveParams::new(0.0, 7.0),
            CurveParams::new(-3.0, 3.0),
        ] {
            let branches = sample_real_curve(&params, &SampleDomain::default());
            assert_eq!(branches.upper.len(), branches.lower.len());
            for (upper, lower) in branches.upper.iter().zip(branches.lower.iter()) {
                assert_eq!(upper.len(), lower.len());
                for (u, l) in upper.iter().zip(lower.iter()) {
                    assert_relative_eq!(u.x, l.x);
                    assert_relative_eq!(u.y, -l.y);
                    assert!(u.y >= 0.0);
                    assert_relative_eq!(u.y * u.y, params.rhs(u.x), epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_gap_splits_runs() {
        // y² = x³ - 2x + 1 zerfällt in ein Oval und einen offenen Zweig
        let params = CurveParams::new(-2.0, 1.0);
        let branches = sample_real_curve(&params, &SampleDomain::default());
        assert_eq!(branches.upper.len(), 2, "Oval und offener Zweig erwartet");

        // Kein Lauf überspannt einen x-Bereich mit negativer rechter Seite
        for run in &branches.upper {
            for pair in run.windows(2) {
                let gap = pair[1].x - pair[0].x;
                assert!(gap < 0.011, "Interpolation über Lücke: {gap}");
            }
        }
    }

    #[test]
    fn test_curve_without_real_points_in_domain() {
        // rhs = x³ + 0x - 100 < 0 für x ≤ 3
        let params = CurveParams::new(0.0, -100.0);
        let branches = sample_real_curve(&params, &SampleDomain::default());
        assert!(branches.upper.is_empty());
        assert_eq!(branches.point_count(), 0);
    }
}
