use crate::{FlightSet, flight::FlightSim};
use bevy::prelude::*;
use leafwing_input_manager::prelude::*;
use sim::{CELESTIAL_BODIES, InputIntent, Intent, SpeedMode};

#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAction {
    Forward,
    Backward,
    YawLeft,
    YawRight,
    RollLeft,
    RollRight,
    Ascend,
    Descend,
    SpeedMode1,
    SpeedMode2,
    SpeedMode3,
    SpeedMode4,
    SpeedMode5,
    SpeedMode6,
    TogglePause,
    ToggleCamera,
    NextBody,
    Reset,
}

/// Held controls mapped onto engine intents.
const HELD: [(InputAction, Intent); 8] = [
    (InputAction::Forward, Intent::Forward),
    (InputAction::Backward, Intent::Backward),
    (InputAction::YawLeft, Intent::YawLeft),
    (InputAction::YawRight, Intent::YawRight),
    (InputAction::RollLeft, Intent::RollLeft),
    (InputAction::RollRight, Intent::RollRight),
    (InputAction::Ascend, Intent::Ascend),
    (InputAction::Descend, Intent::Descend),
];

const MODE_KEYS: [InputAction; 6] = [
    InputAction::SpeedMode1,
    InputAction::SpeedMode2,
    InputAction::SpeedMode3,
    InputAction::SpeedMode4,
    InputAction::SpeedMode5,
    InputAction::SpeedMode6,
];

/// The live intent the engine samples each frame.
#[derive(Resource, Default, Debug)]
pub struct LiveIntent(pub InputIntent);

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<InputAction>::default());

    app.register_type::<InputAction>();
    app.init_resource::<LiveIntent>();

    let mut input_map = InputMap::<InputAction>::default();
    input_map
        .insert(InputAction::Forward, KeyCode::KeyW)
        .insert(InputAction::Backward, KeyCode::KeyS)
        .insert(InputAction::YawLeft, KeyCode::KeyA)
        .insert(InputAction::YawRight, KeyCode::KeyD)
        .insert(InputAction::RollLeft, KeyCode::KeyQ)
        .insert(InputAction::RollRight, KeyCode::KeyE)
        .insert(InputAction::Ascend, KeyCode::Space)
        .insert(InputAction::Descend, KeyCode::ShiftLeft)
        .insert(InputAction::Descend, KeyCode::ShiftRight)
        .insert(InputAction::SpeedMode1, KeyCode::Digit1)
        .insert(InputAction::SpeedMode2, KeyCode::Digit2)
        .insert(InputAction::SpeedMode3, KeyCode::Digit3)
        .insert(InputAction::SpeedMode4, KeyCode::Digit4)
        .insert(InputAction::SpeedMode5, KeyCode::Digit5)
        .insert(InputAction::SpeedMode6, KeyCode::Digit6)
        .insert(InputAction::TogglePause, KeyCode::KeyP)
        .insert(InputAction::ToggleCamera, KeyCode::KeyC)
        .insert(InputAction::NextBody, KeyCode::Tab)
        .insert(InputAction::Reset, KeyCode::KeyR);
    app.insert_resource(input_map);
    app.insert_resource(ActionState::<InputAction>::default());

    app.add_systems(
        Update,
        (collect_intent, handle_commands).in_set(FlightSet::Input),
    );
}

/// Mirrors key state into the live intent. Last key state wins; nothing is queued.
fn collect_intent(actions: Res<ActionState<InputAction>>, mut live: ResMut<LiveIntent>) {
    for (action, intent) in HELD {
        live.0.set(intent, actions.pressed(&action));
    }

    live.0.selected_mode = MODE_KEYS
        .iter()
        .zip(1u8..)
        .filter(|(action, _)| actions.just_pressed(action))
        .map(|(_, ordinal)| SpeedMode::from_ordinal(ordinal))
        .last();
}

fn handle_commands(
    actions: Res<ActionState<InputAction>>,
    mut flight: ResMut<FlightSim>,
    mut live: ResMut<LiveIntent>,
) {
    if actions.just_pressed(&InputAction::TogglePause) {
        flight.0.toggle_pause();
    }

    if actions.just_pressed(&InputAction::ToggleCamera) {
        let next = flight.0.state().camera_mode.toggled();
        flight.0.set_camera_mode(next);
        info!("Camera mode: {next:?}");
    }

    if actions.just_pressed(&InputAction::NextBody) {
        let next = match flight.0.state().selected_body {
            None => CELESTIAL_BODIES.first(),
            Some(current) => CELESTIAL_BODIES
                .iter()
                .position(|b| b.id == current.id)
                .and_then(|i| CELESTIAL_BODIES.get(i + 1)),
        };
        flight.0.select_body(next.map(|b| b.id));
    }

    if actions.just_pressed(&InputAction::Reset) {
        flight.0.reset();
        live.0.release_all();
    }
}
