//! Movement domain: input sampling for the avatar.

use bevy::prelude::*;

use crate::movement::{ActionInput, KeyBindings};

pub(crate) fn read_action_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut input: ResMut<ActionInput>,
) {
    for (i, key) in bindings.movement.iter().enumerate() {
        input.held[i] = keyboard.pressed(*key);
        input.pressed[i] = keyboard.just_pressed(*key);
    }

    input.attack = keyboard.just_pressed(bindings.attack);
    input.gadget = keyboard.just_pressed(bindings.gadget);
    input.dodge = keyboard.just_pressed(bindings.dodge);
}
