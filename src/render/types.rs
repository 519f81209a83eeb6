//! Gemeinsame Render-Typen und Hilfsfunktionen.

use crate::core::Viewport;
use crate::shared::{DrawCommand, ExplorerOptions, MarkerRole, Rgba};
use glam::DVec2;

/// Gemeinsamer Kontext für alle Sub-Renderer.
///
/// Bündelt Viewport und Optionen, die jeder Sub-Renderer pro Neuaufbau benötigt.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Abbildung Kurvenkoordinaten → Pixel
    pub viewport: &'a Viewport,
    /// Laufzeit-Optionen (Farben, Radien, Abtastbereich)
    pub options: &'a ExplorerOptions,
}

impl<'a> RenderContext<'a> {
    /// Erstellt einen neuen Kontext.
    pub fn new(viewport: &'a Viewport, options: &'a ExplorerOptions) -> Self {
        Self { viewport, options }
    }

    /// Farbe eines Markers laut Palette.
    pub fn marker_color(&self, role: MarkerRole) -> Rgba {
        let palette = &self.options.palette;
        match role {
            MarkerRole::P => palette.p,
            MarkerRole::Q => palette.q,
            MarkerRole::Intersection => palette.intersection,
            MarkerRole::Sum => palette.sum,
            MarkerRole::FieldPoint => palette.curve,
        }
    }

    /// Marker an einer Position in Kurvenkoordinaten.
    pub fn marker(&self, role: MarkerRole, at: DVec2) -> DrawCommand {
        let radius = match role {
            MarkerRole::FieldPoint => self.options.field_marker_radius,
            _ => self.options.marker_radius,
        };
        DrawCommand::Marker {
            role,
            center: self.viewport.to_screen(at),
            radius,
            color: self.marker_color(role),
        }
    }

    /// Beschriftung oben links im Canvas.
    pub fn caption(&self, text: impl Into<String>) -> DrawCommand {
        DrawCommand::Text {
            position: DVec2::new(10.0, 10.0),
            text: text.into(),
            color: self.options.palette.text,
        }
    }

    /// Canvas leeren.
    pub fn clear(&self) -> DrawCommand {
        DrawCommand::Clear {
            color: self.options.palette.background,
        }
    }
}
