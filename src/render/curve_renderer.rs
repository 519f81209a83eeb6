//! Renderer für Achsen und die reelle Kurve.

use super::types::RenderContext;
use crate::core::{sample_real_curve, Branch, CurveParams};
use crate::shared::{DrawCommand, LineRole};
use glam::DVec2;

/// Zeichnet x- und y-Achse durch den Kurvenursprung.
pub fn render_axes(ctx: &RenderContext) -> Vec<DrawCommand> {
    let vp = ctx.viewport;
    let color = ctx.options.palette.axis;
    let width = ctx.options.line_width;

    vec![
        DrawCommand::Line {
            role: LineRole::Axis,
            from: DVec2::new(0.0, vp.origin.y),
            to: DVec2::new(vp.size.x, vp.origin.y),
            color,
            width,
        },
        DrawCommand::Line {
            role: LineRole::Axis,
            from: DVec2::new(vp.origin.x, 0.0),
            to: DVec2::new(vp.origin.x, vp.size.y),
            color,
            width,
        },
    ]
}

/// Leert das Canvas, zeichnet Achsen und beide Kurvenzweige.
///
/// Jeder zusammenhängende Lauf wird als eigener offener Linienzug ausgegeben,
/// Lücken (x³ + ax + b < 0) werden nicht überbrückt.
pub fn render_real_curve(params: &CurveParams, ctx: &RenderContext) -> Vec<DrawCommand> {
    let mut commands = vec![ctx.clear()];
    commands.extend(render_axes(ctx));

    let branches = sample_real_curve(params, &ctx.options.real_domain);
    log::debug!(
        "Reelle Kurve abgetastet: {} Läufe, {} Punkte",
        branches.upper.len(),
        branches.point_count()
    );

    for branch in [Branch::Upper, Branch::Lower] {
        for run in branches.runs(branch) {
            commands.push(DrawCommand::Polyline {
                branch,
                points: run.iter().map(|p| ctx.viewport.to_screen(*p)).collect(),
                color: ctx.options.palette.curve,
                width: ctx.options.line_width,
            });
        }
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Viewport;
    use crate::shared::{DrawList, ExplorerOptions};
    use approx::assert_relative_eq;

    fn draw(params: CurveParams) -> DrawList {
        let options = ExplorerOptions::default();
        let viewport = Viewport::centered(options.canvas_dvec2(), options.real_scale);
        let ctx = RenderContext::new(&viewport, &options);
        let mut list = DrawList::new(viewport.size);
        list.extend(render_real_curve(&params, &ctx));
        list
    }

    #[test]
    fn test_starts_with_clear_and_axes() {
        let list = draw(CurveParams::new(-1.0, 1.0));
        assert!(matches!(list.commands()[0], DrawCommand::Clear { .. }));
        assert_eq!(list.line_count(LineRole::Axis), 2);
    }

    #[test]
    fn test_branches_are_mirrored_in_pixel_space() {
        let list = draw(CurveParams::new(-1.0, 1.0));
        let upper = list.polylines(Branch::Upper);
        let lower = list.polylines(Branch::Lower);
        assert_eq!(upper.len(), 1, "y² = x³ - x + 1 hat einen Zweig in [-3, 3]");
        assert_eq!(upper.len(), lower.len());

        // Spiegelung an der x-Achse: y_oben + y_unten = 2 · origin_y
        for (u, l) in upper[0].iter().zip(lower[0].iter()) {
            assert_relative_eq!(u.x, l.x);
            assert_relative_eq!(u.y + l.y, 600.0, epsilon = 1e-9);
            assert!(u.y <= 300.0);
        }
    }

    #[test]
    fn test_disconnected_curve_emits_separate_polylines() {
        let list = draw(CurveParams::new(-2.0, 1.0));
        assert_eq!(list.polylines(Branch::Upper).len(), 2);
        assert_eq!(list.polylines(Branch::Lower).len(), 2);
    }
}
