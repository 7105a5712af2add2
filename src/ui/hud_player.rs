//! UI domain: avatar HUD health bar and key count.

use bevy::prelude::*;

use crate::combat::Vitals;
use crate::core::LevelScoped;
use crate::movement::{Avatar, Loadout};

const HEALTHBAR_WIDTH: f32 = 200.0;
const HEALTHBAR_HEIGHT: f32 = 20.0;
const HUD_PADDING: f32 = 16.0;

/// Marker for the avatar's health bar fill element
#[derive(Component)]
pub struct HealthBarFill;

/// Marker for the key count text
#[derive(Component)]
pub struct KeyCountText;

pub(crate) fn spawn_hud(mut commands: Commands) {
    // Health bar at top-left
    commands
        .spawn((
            LevelScoped,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                width: Val::Px(HEALTHBAR_WIDTH),
                height: Val::Px(HEALTHBAR_HEIGHT),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
        ))
        .with_children(|parent| {
            parent.spawn((
                HealthBarFill,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.2, 0.8, 0.3)),
            ));
        });

    // Key count below the health bar
    commands
        .spawn((
            LevelScoped,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING + HEALTHBAR_HEIGHT + 8.0),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            // Key icon
            parent.spawn((
                Node {
                    width: Val::Px(16.0),
                    height: Val::Px(16.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.95, 0.8, 0.2)),
            ));

            parent.spawn((
                KeyCountText,
                Text::new("0"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.85, 0.5)),
            ));
        });
}

pub(crate) fn update_healthbar(
    avatar_query: Query<&Vitals, With<Avatar>>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<HealthBarFill>>,
) {
    let Ok(vitals) = avatar_query.single() else {
        return;
    };

    for (mut node, mut bg_color) in &mut fill_query {
        let percent = vitals.percent();
        node.width = Val::Percent(percent * 100.0);
        bg_color.0 = healthbar_color(percent);
    }
}

/// Green at full health through yellow to red.
pub(crate) fn healthbar_color(percent: f32) -> Color {
    if percent > 0.5 {
        let t = (percent - 0.5) * 2.0;
        Color::srgb(1.0 - t * 0.8, 0.8, 0.3 * (1.0 - t))
    } else {
        let t = percent * 2.0;
        Color::srgb(0.9, 0.2 + t * 0.6, 0.2)
    }
}

pub(crate) fn update_key_count(
    avatar_query: Query<&Loadout, (With<Avatar>, Changed<Loadout>)>,
    mut text_query: Query<&mut Text, With<KeyCountText>>,
) {
    let Ok(loadout) = avatar_query.single() else {
        return;
    };
    for mut text in &mut text_query {
        **text = format!("{}", loadout.keys);
    }
}
