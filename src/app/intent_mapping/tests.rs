use crate::app::state::{Coefficient, PointSlot};
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{CurveError, Mode};
use glam::DVec2;

use super::map_intent_to_commands;

#[test]
fn valid_point_text_maps_to_set_point() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointInputCommitted {
            slot: PointSlot::Q,
            text: "1, 1".into(),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::SetPoint { slot: PointSlot::Q, point } if point == DVec2::new(1.0, 1.0)
    ));
}

#[test]
fn malformed_point_text_maps_to_reject_input() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointInputCommitted {
            slot: PointSlot::P,
            text: "abc".into(),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::RejectInput {
            error: CurveError::InvalidInput { .. }
        }
    ));
}

#[test]
fn fractional_point_is_out_of_domain_in_modular_mode() {
    let mut state = AppState::new();
    state.curve.mode = Mode::ModularField;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointInputCommitted {
            slot: PointSlot::P,
            text: "0.5,1".into(),
        },
    );

    assert!(matches!(
        commands[0],
        AppCommand::RejectInput {
            error: CurveError::OutOfDomain { .. }
        }
    ));
}

#[test]
fn modulus_respects_configured_maximum() {
    let mut state = AppState::new();
    state.options.max_modulus = 50;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ModulusInputCommitted { text: "97".into() },
    );

    assert!(matches!(
        commands[0],
        AppCommand::RejectInput {
            error: CurveError::OutOfDomain { .. }
        }
    ));
}

#[test]
fn coefficient_text_maps_to_set_coefficient() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CoefficientInputCommitted {
            coefficient: Coefficient::B,
            text: "7".into(),
        },
    );

    assert!(matches!(
        commands[0],
        AppCommand::SetCoefficient {
            coefficient: Coefficient::B,
            value
        } if value == 7.0
    ));
}

#[test]
fn regenerate_requested_maps_to_single_regenerate() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::RegenerateRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::Regenerate));
}
