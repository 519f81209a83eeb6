//! Renderer für die Kurve über F_p und die modulare Punktaddition.

use super::types::RenderContext;
use crate::core::{
    scan_modular_curve, AdditionResult, CurveError, CurveParams, FieldModulus, ModAddition,
    ModPoint,
};
use crate::shared::{DrawCommand, LineRole, MarkerRole};

/// Leert das Canvas und zeichnet einen Marker pro Kurvenpunkt über F_p.
///
/// Der Scan ist O(p²); p ist über `FieldModulus` nach oben begrenzt.
pub fn render_modular_curve(
    params: &CurveParams,
    modulus: FieldModulus,
    ctx: &RenderContext,
) -> Result<Vec<DrawCommand>, CurveError> {
    let points = scan_modular_curve(params, modulus)?;
    log::debug!(
        "Kurve modulo {} gescannt: {} affine Punkte",
        modulus.value(),
        points.len()
    );

    let mut commands = Vec::with_capacity(points.len() + 1);
    commands.push(ctx.clear());
    commands.extend(
        points
            .iter()
            .map(|p| ctx.marker(MarkerRole::FieldPoint, p.as_dvec2())),
    );
    Ok(commands)
}

/// Zeichnet P, Q und das Ergebnis der modularen Addition.
///
/// Eine Hilfsgerade wird nicht gezeichnet (sie "wickelt" sich modulo p um das Gitter);
/// sichtbar bleibt die Spiegelung R → P + Q, die senkrecht verläuft.
pub fn render_modular_selection(
    p: ModPoint,
    q: ModPoint,
    result: &Result<ModAddition, CurveError>,
    ctx: &RenderContext,
) -> Vec<DrawCommand> {
    let mut commands = vec![
        ctx.marker(MarkerRole::P, p.as_dvec2()),
        ctx.marker(MarkerRole::Q, q.as_dvec2()),
    ];

    match result {
        Ok(AdditionResult::Sum(c)) => {
            commands.push(ctx.marker(MarkerRole::Intersection, c.intersection.as_dvec2()));
            commands.push(ctx.marker(MarkerRole::Sum, c.sum.as_dvec2()));
            commands.push(DrawCommand::Line {
                role: LineRole::Reflection,
                from: ctx.viewport.to_screen(c.intersection.as_dvec2()),
                to: ctx.viewport.to_screen(c.sum.as_dvec2()),
                color: ctx.options.palette.reflection,
                width: ctx.options.line_width,
            });
        }
        Ok(AdditionResult::Identity(reason)) => {
            commands.push(ctx.caption(format!("P + Q = O ({})", reason.description())));
        }
        Ok(AdditionResult::Undefined) => {
            commands.push(ctx.caption("P + Q undefiniert"));
        }
        Err(e) => {
            commands.push(ctx.caption(e.to_string()));
        }
    }

    commands
}
