//! Abbildung von Kurvenkoordinaten auf Canvas-Pixel.

use super::modular::FieldModulus;
use glam::DVec2;

/// Viewport mit Ursprung (in Pixeln) und einheitlicher Skalierung.
///
/// Die y-Achse zeigt im Kurvenraum nach oben, im Pixelraum nach unten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Pixelposition des Kurvenursprungs (0, 0)
    pub origin: DVec2,
    /// Pixel pro Kurveneinheit
    pub scale: f64,
    /// Canvas-Größe in Pixeln [Breite, Höhe]
    pub size: DVec2,
}

impl Viewport {
    /// Ursprung in der Canvas-Mitte (reelle Darstellung).
    pub fn centered(size: DVec2, scale: f64) -> Self {
        Self {
            origin: size / 2.0,
            scale,
            size,
        }
    }

    /// Ursprung unten links, Skalierung so, dass `p × p` Residuen auf das Canvas passen.
    pub fn for_field(size: DVec2, modulus: FieldModulus) -> Self {
        Self {
            origin: DVec2::new(0.0, size.y),
            scale: size.x.min(size.y) / modulus.value() as f64,
            size,
        }
    }

    /// Kurvenkoordinaten → Pixel.
    pub fn to_screen(&self, point: DVec2) -> DVec2 {
        DVec2::new(
            self.origin.x + point.x * self.scale,
            self.origin.y - point.y * self.scale,
        )
    }

    /// Pixel → Kurvenkoordinaten.
    pub fn to_curve(&self, screen: DVec2) -> DVec2 {
        DVec2::new(
            (screen.x - self.origin.x) / self.scale,
            (self.origin.y - screen.y) / self.scale,
        )
    }

    /// Sichtbarer x-Bereich in Kurvenkoordinaten.
    pub fn visible_x_range(&self) -> (f64, f64) {
        (self.to_curve(DVec2::ZERO).x, self.to_curve(self.size).x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_centered_origin_maps_to_canvas_center() {
        let vp = Viewport::centered(DVec2::new(600.0, 600.0), 50.0);
        let center = vp.to_screen(DVec2::ZERO);
        assert_relative_eq!(center.x, 300.0);
        assert_relative_eq!(center.y, 300.0);

        // y nach oben → Pixel-y kleiner
        let up = vp.to_screen(DVec2::new(1.0, 1.0));
        assert_relative_eq!(up.x, 350.0);
        assert_relative_eq!(up.y, 250.0);
    }

    #[test]
    fn test_to_curve_inverts_to_screen() {
        let vp = Viewport::centered(DVec2::new(800.0, 600.0), 37.5);
        let p = DVec2::new(-1.25, 2.5);
        let back = vp.to_curve(vp.to_screen(p));
        assert_relative_eq!(back.x, p.x, epsilon = 1e-12);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-12);
    }

    #[test]
    fn test_field_viewport_scale() {
        let modulus = FieldModulus::new(97, 500).expect("gültiger Modulus");
        let vp = Viewport::for_field(DVec2::new(600.0, 600.0), modulus);
        assert_relative_eq!(vp.scale, 600.0 / 97.0);

        let origin = vp.to_screen(DVec2::ZERO);
        assert_relative_eq!(origin.x, 0.0);
        assert_relative_eq!(origin.y, 600.0);
    }

    #[test]
    fn test_visible_range_of_centered_viewport() {
        let vp = Viewport::centered(DVec2::new(600.0, 600.0), 50.0);
        let (min, max) = vp.visible_x_range();
        assert_relative_eq!(min, -6.0);
        assert_relative_eq!(max, 6.0);
    }
}
