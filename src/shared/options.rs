//! Zentrale Konfiguration für den Elliptic Curve Explorer.
//!
//! `ExplorerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::modular::MODULUS_MIN;
use crate::core::SampleDomain;
use serde::{Deserialize, Serialize};

// ── Canvas ──────────────────────────────────────────────────────────

/// Canvas-Größe in logischen Einheiten [Breite, Höhe].
pub const CANVAS_SIZE: [f32; 2] = [600.0, 600.0];
/// Pixel pro Kurveneinheit in der reellen Darstellung.
pub const REAL_SCALE: f64 = 50.0;
/// Linienstärke für Achsen, Kurve und Hilfslinien.
pub const LINE_WIDTH: f32 = 1.0;

// ── Marker ──────────────────────────────────────────────────────────

/// Radius der Marker für P, Q, R und P + Q.
pub const MARKER_RADIUS: f32 = 5.0;
/// Radius der Punkte im Modus modulo p.
pub const FIELD_MARKER_RADIUS: f32 = 2.0;

// ── Modulo p ────────────────────────────────────────────────────────

/// Obergrenze für p (O(p²)-Scan muss im Frame-Budget bleiben).
pub const MAX_MODULUS: u64 = 500;
/// Höchster einstellbarer Wert für `max_modulus`. Hält p² weit unter u64::MAX.
pub const MAX_MODULUS_LIMIT: u64 = 5000;

// ── Abtastung ───────────────────────────────────────────────────────

/// Kleinste einstellbare Schrittweite der reellen Abtastung.
pub const MIN_SAMPLE_STEP: f64 = 0.0001;
/// Größte einstellbare Schrittweite der reellen Abtastung.
pub const MAX_SAMPLE_STEP: f64 = 1.0;
/// Betragsgrenze für x min / x max.
pub const SAMPLE_X_LIMIT: f64 = 100.0;

// ── Palette (RGBA) ──────────────────────────────────────────────────

/// Hintergrund (Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Achsen (Schwarz).
pub const AXIS_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Kurve (Blau).
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Punkt P (Rot).
pub const P_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Punkt Q (Grün).
pub const Q_COLOR: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
/// Schnittpunkt R (Orange).
pub const INTERSECTION_COLOR: [f32; 4] = [1.0, 0.65, 0.0, 1.0];
/// Summe P + Q (Lila).
pub const SUM_COLOR: [f32; 4] = [0.5, 0.0, 0.5, 1.0];
/// Sekante/Tangente (Schwarz).
pub const CONSTRUCTION_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Spiegelungsstrecke R → P + Q (Lila).
pub const REFLECTION_COLOR: [f32; 4] = [0.5, 0.0, 0.5, 1.0];
/// Beschriftungen (Schwarz).
pub const TEXT_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Farbpalette des Canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub background: [f32; 4],
    pub axis: [f32; 4],
    pub curve: [f32; 4],
    pub p: [f32; 4],
    pub q: [f32; 4],
    pub intersection: [f32; 4],
    pub sum: [f32; 4],
    pub construction: [f32; 4],
    pub reflection: [f32; 4],
    pub text: [f32; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: BACKGROUND_COLOR,
            axis: AXIS_COLOR,
            curve: CURVE_COLOR,
            p: P_COLOR,
            q: Q_COLOR,
            intersection: INTERSECTION_COLOR,
            sum: SUM_COLOR,
            construction: CONSTRUCTION_COLOR,
            reflection: REFLECTION_COLOR,
            text: TEXT_COLOR,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `elliptic_curve_explorer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerOptions {
    // ── Canvas ──────────────────────────────────────────────────
    /// Canvas-Größe [Breite, Höhe]
    pub canvas_size: [f32; 2],
    /// Pixel pro Kurveneinheit (reell)
    pub real_scale: f64,
    /// Linienstärke
    pub line_width: f32,

    // ── Marker ──────────────────────────────────────────────────
    /// Radius der Marker für P, Q, R, P + Q
    pub marker_radius: f32,
    /// Radius der Punkte im Modus modulo p
    pub field_marker_radius: f32,

    // ── Modulo p ────────────────────────────────────────────────
    /// Größter zulässiger Modulus
    #[serde(default = "default_max_modulus")]
    pub max_modulus: u64,

    // ── Abtastung ───────────────────────────────────────────────
    /// Abtastbereich und Schrittweite der reellen Kurve
    pub real_domain: SampleDomain,

    // ── Farben ──────────────────────────────────────────────────
    /// Farbpalette
    #[serde(default)]
    pub palette: Palette,
}

impl Default for ExplorerOptions {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            real_scale: REAL_SCALE,
            line_width: LINE_WIDTH,
            marker_radius: MARKER_RADIUS,
            field_marker_radius: FIELD_MARKER_RADIUS,
            max_modulus: MAX_MODULUS,
            real_domain: SampleDomain::default(),
            palette: Palette::default(),
        }
    }
}

/// Serde-Default für `max_modulus` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_max_modulus() -> u64 {
    MAX_MODULUS
}

/// Begrenzt `value` auf `[min, max]`; nicht-endliche Werte werden zu `fallback`.
fn clamp_finite<T: Into<f64> + Copy + PartialOrd>(value: T, min: T, max: T, fallback: T) -> T {
    if !Into::<f64>::into(value).is_finite() {
        return fallback;
    }
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

impl ExplorerOptions {
    /// Bringt alle Werte in die Bereiche, die auch der Options-Dialog zulässt.
    ///
    /// Gilt für geladene Dateien ebenso wie für Änderungen zur Laufzeit.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        self.max_modulus = self.max_modulus.clamp(MODULUS_MIN, MAX_MODULUS_LIMIT);

        let domain = &mut self.real_domain;
        domain.step = clamp_finite(
            domain.step,
            MIN_SAMPLE_STEP,
            MAX_SAMPLE_STEP,
            defaults.real_domain.step,
        );
        domain.x_min = clamp_finite(
            domain.x_min,
            -SAMPLE_X_LIMIT,
            SAMPLE_X_LIMIT,
            defaults.real_domain.x_min,
        );
        domain.x_max = clamp_finite(
            domain.x_max,
            -SAMPLE_X_LIMIT,
            SAMPLE_X_LIMIT,
            defaults.real_domain.x_max,
        );

        for (value, default) in self.canvas_size.iter_mut().zip(defaults.canvas_size) {
            *value = clamp_finite(*value, 100.0, 2000.0, default);
        }
        self.real_scale = clamp_finite(self.real_scale, 1.0, 500.0, defaults.real_scale);
        self.line_width = clamp_finite(self.line_width, 0.5, 10.0, defaults.line_width);
        self.marker_radius = clamp_finite(self.marker_radius, 1.0, 20.0, defaults.marker_radius);
        self.field_marker_radius = clamp_finite(
            self.field_marker_radius,
            0.5,
            10.0,
            defaults.field_marker_radius,
        );
        self
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    ///
    /// Werte außerhalb der zulässigen Bereiche werden begrenzt.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    let validated = opts.clone().validated();
                    if validated != opts {
                        log::warn!("Optionen außerhalb der zulässigen Bereiche wurden begrenzt");
                    }
                    validated
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("elliptic_curve_explorer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("elliptic_curve_explorer.toml")
    }

    /// Canvas-Größe als `DVec2`.
    pub fn canvas_dvec2(&self) -> glam::DVec2 {
        glam::DVec2::new(self.canvas_size[0] as f64, self.canvas_size[1] as f64)
    }
}
