mod combat;
mod content;
mod core;
mod gadgets;
mod movement;
mod pickups;
mod rooms;
mod sprites;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Delver".to_string(),
                resolution: (960, 660).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(Vec2::ZERO))
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            rooms::RoomsPlugin,
            movement::MovementPlugin,
            combat::CombatPlugin,
            gadgets::GadgetsPlugin,
            pickups::PickupsPlugin,
            sprites::SpritesPlugin,
            ui::UiPlugin,
        ))
        .run();
}
