//! Renderer für die Sehnen-Tangenten-Konstruktion in der reellen Ebene.

use super::types::RenderContext;
use crate::core::{line_y, AdditionResult, RealAddition};
use crate::shared::{DrawCommand, LineRole, MarkerRole};
use glam::DVec2;

/// Zeichnet P, Q und – falls die Summe endlich ist – R, P + Q, die Hilfsgerade
/// und die Spiegelungsstrecke R → P + Q.
///
/// Ist die Summe das Neutralelement, werden nur P und Q, eine senkrechte Gerade
/// durch x₁ und ein Hinweistext ausgegeben.
pub fn render_selection(
    p: DVec2,
    q: DVec2,
    result: &RealAddition,
    ctx: &RenderContext,
) -> Vec<DrawCommand> {
    let mut commands = vec![ctx.marker(MarkerRole::P, p), ctx.marker(MarkerRole::Q, q)];
    let palette = &ctx.options.palette;
    let width = ctx.options.line_width;

    match result {
        AdditionResult::Sum(c) => {
            commands.push(ctx.marker(MarkerRole::Intersection, c.intersection));
            commands.push(ctx.marker(MarkerRole::Sum, c.sum));

            // Gerade über die gesamte sichtbare Breite
            let (x_min, x_max) = ctx.viewport.visible_x_range();
            let from = DVec2::new(x_min, line_y(c.slope, p, x_min));
            let to = DVec2::new(x_max, line_y(c.slope, p, x_max));
            commands.push(DrawCommand::Line {
                role: LineRole::Construction,
                from: ctx.viewport.to_screen(from),
                to: ctx.viewport.to_screen(to),
                color: palette.construction,
                width,
            });

            commands.push(DrawCommand::Line {
                role: LineRole::Reflection,
                from: ctx.viewport.to_screen(c.intersection),
                to: ctx.viewport.to_screen(c.sum),
                color: palette.reflection,
                width,
            });
        }
        AdditionResult::Identity(reason) => {
            let x = ctx.viewport.to_screen(p).x;
            commands.push(DrawCommand::Line {
                role: LineRole::Construction,
                from: DVec2::new(x, 0.0),
                to: DVec2::new(x, ctx.viewport.size.y),
                color: palette.construction,
                width,
            });
            commands.push(ctx.caption(format!("P + Q = O ({})", reason.description())));
        }
        AdditionResult::Undefined => {
            commands.push(ctx.caption("P + Q undefiniert"));
        }
    }

    commands
}
