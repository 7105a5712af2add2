//! Core domain: game-over screen UI and input handling.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{LevelSequence, RunOutcome, SceneRequest};

/// Marker for game-over screen UI root
#[derive(Component, Debug)]
pub struct GameOverScreenUI;

pub(crate) fn spawn_game_over_screen(
    mut commands: Commands,
    outcome: Res<RunOutcome>,
    sequence: Res<LevelSequence>,
) {
    let bg_color = Color::srgba(0.02, 0.02, 0.05, 0.98);
    let title_color = match *outcome {
        RunOutcome::Defeated => Color::srgb(0.9, 0.25, 0.25),
        RunOutcome::Completed => Color::srgb(0.95, 0.85, 0.3),
    };
    let text_color = Color::srgb(0.9, 0.9, 0.9);
    let muted_text = Color::srgb(0.6, 0.6, 0.7);

    let (title, subtitle) = match *outcome {
        RunOutcome::Defeated => ("GAME OVER", "The dungeon claims another delver"),
        RunOutcome::Completed => ("DUNGEON CLEARED", "Every level conquered"),
    };

    commands
        .spawn((
            GameOverScreenUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(bg_color),
            ZIndex(200),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(subtitle),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(text_color),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(format!(
                    "Levels reached: {} / {}",
                    (sequence.current_index() + 1).min(sequence.len()),
                    sequence.len()
                )),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(text_color),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Press ENTER to start again"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(muted_text),
            ));
        });
}

pub(crate) fn cleanup_game_over_screen(
    mut commands: Commands,
    query: Query<Entity, With<GameOverScreenUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn handle_game_over_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut requests: MessageWriter<SceneRequest>,
) {
    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter) {
        requests.write(SceneRequest::Restart);
    }
}
