//! Builder für die Zeichenliste aus dem AppState.

use super::state::SelectionOutcome;
use crate::app::AppState;
use crate::core::{mod_point_add, point_add, to_mod_point, Mode, Viewport};
use crate::render::{
    render_modular_curve, render_modular_selection, render_real_curve, render_selection,
    RenderContext,
};
use crate::shared::{DrawList, MarkerRole};

/// Ergebnis eines vollständigen Neuaufbaus.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Zeichenanweisungen in Ausgabereihenfolge
    pub draw_list: DrawList,
    /// Ergebnis der Auswertung von P + Q
    pub outcome: SelectionOutcome,
}

/// Baut die komplette Zeichenliste für den aktuellen Modus.
///
/// Fehler (nicht ganzzahlige Werte im Modus modulo p, nicht invertierbarer
/// Nenner) brechen nicht ab: Sie erscheinen als Beschriftung im Canvas und
/// als `SelectionOutcome::Failed`.
pub fn build(state: &AppState) -> Scene {
    let mut draw_list = DrawList::new(state.options.canvas_dvec2());
    let outcome = match state.curve.mode {
        Mode::Real => build_real(state, &mut draw_list),
        Mode::ModularField => build_modular(state, &mut draw_list),
    };
    Scene { draw_list, outcome }
}

fn build_real(state: &AppState, list: &mut DrawList) -> SelectionOutcome {
    let options = &state.options;
    let viewport = Viewport::centered(options.canvas_dvec2(), options.real_scale);
    let ctx = RenderContext::new(&viewport, options);
    let params = &state.curve.params;

    list.extend(render_real_curve(params, &ctx));

    let Some((p, q)) = state.selection.both() else {
        push_partial_selection(state, list, &ctx, Some);
        return SelectionOutcome::Incomplete;
    };

    let result = point_add(p, q, params);
    list.extend(render_selection(p, q, &result, &ctx));
    SelectionOutcome::from_real(&result)
}

fn build_modular(state: &AppState, list: &mut DrawList) -> SelectionOutcome {
    let options = &state.options;
    let modulus = state.curve.modulus;
    let viewport = Viewport::for_field(options.canvas_dvec2(), modulus);
    let ctx = RenderContext::new(&viewport, options);
    let params = &state.curve.params;

    match render_modular_curve(params, modulus, &ctx) {
        Ok(commands) => list.extend(commands),
        Err(e) => {
            log::warn!("Kurve modulo {} nicht darstellbar: {}", modulus.value(), e);
            list.push(ctx.clear());
            list.push(ctx.caption(e.to_string()));
            return SelectionOutcome::Failed(e.to_string());
        }
    }

    let Some((p_raw, q_raw)) = state.selection.both() else {
        push_partial_selection(state, list, &ctx, |point| {
            to_mod_point(point, modulus).ok().map(|m| m.as_dvec2())
        });
        return SelectionOutcome::Incomplete;
    };

    let points = to_mod_point(p_raw, modulus)
        .and_then(|p| to_mod_point(q_raw, modulus).map(|q| (p, q)));
    let (p, q) = match points {
        Ok(points) => points,
        Err(e) => {
            log::warn!("Auswahl im Modus modulo p ungültig: {}", e);
            list.push(ctx.caption(e.to_string()));
            return SelectionOutcome::Failed(e.to_string());
        }
    };

    let result = mod_point_add(p, q, params, modulus);
    list.extend(render_modular_selection(p, q, &result, &ctx));
    match &result {
        Ok(addition) => SelectionOutcome::from_modular(addition),
        Err(e) => SelectionOutcome::Failed(e.to_string()),
    }
}

/// Marker für den einzelnen gesetzten Summanden, solange die Auswahl unvollständig ist.
fn push_partial_selection(
    state: &AppState,
    list: &mut DrawList,
    ctx: &RenderContext,
    project: impl Fn(glam::DVec2) -> Option<glam::DVec2>,
) {
    let slots = [
        (MarkerRole::P, state.selection.p),
        (MarkerRole::Q, state.selection.q),
    ];
    for (role, point) in slots {
        if let Some(at) = point.and_then(&project) {
            list.push(ctx.marker(role, at));
        }
    }
}
