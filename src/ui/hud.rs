//! In-game HUD - crosshair, interaction prompt, and sign text.

use bevy::prelude::*;
use std::cmp::Ordering;

use crate::core::{GameState, InteractionFound, InteractionLost};
use crate::player::Interactable;
use crate::world::OpenSign;

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for the "[E] ..." prompt under the crosshair.
#[derive(Component)]
pub struct InteractionPrompt;

/// Marker for the sign text panel.
#[derive(Component)]
pub struct SignPanel;

/// Marker for the text inside the sign panel.
#[derive(Component)]
pub struct SignText;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(OnExit(GameState::InGame), cleanup_hud)
        .add_systems(
            Update,
            (update_interaction_prompt, update_sign_panel).run_if(in_state(GameState::InGame)),
        );
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    // Crosshair and prompt (center of screen)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            // Crosshair dot
            parent.spawn((
                Node {
                    width: Val::Px(4.0),
                    height: Val::Px(4.0),
                    ..default()
                },
                BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.5)),
            ));

            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.85, 0.7)),
                Node {
                    margin: UiRect::top(Val::Px(24.0)),
                    ..default()
                },
                Visibility::Hidden,
                InteractionPrompt,
            ));
        });

    // Sign panel (bottom of screen)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::End,
                padding: UiRect::bottom(Val::Px(60.0)),
                position_type: PositionType::Absolute,
                ..default()
            },
            Visibility::Hidden,
            SignPanel,
            HudRoot,
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        padding: UiRect::all(Val::Px(16.0)),
                        max_width: Val::Px(600.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.05, 0.04, 0.03, 0.85)),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new(""),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.85, 0.8, 0.7)),
                        SignText,
                    ));
                });
        });
}

/// Show the prompt on `InteractionFound`, hide it on `InteractionLost`.
pub fn update_interaction_prompt(
    mut found_events: EventReader<InteractionFound>,
    mut lost_events: EventReader<InteractionLost>,
    interactables: Query<&Interactable>,
    mut prompt_query: Query<(&mut Text, &mut Visibility), With<InteractionPrompt>>,
) {
    let Ok((mut text, mut visibility)) = prompt_query.get_single_mut() else {
        return;
    };

    // Several physics ticks can run per frame. Edges strictly alternate, so
    // the counts and the previous state tell which one came last.
    let found: Vec<Entity> = found_events.read().map(|event| event.target).collect();
    let lost_count = lost_events.read().count();
    let was_shown = *visibility != Visibility::Hidden;

    let shown = match found.len().cmp(&lost_count) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => was_shown,
    };

    if let (true, Some(&target)) = (shown, found.last()) {
        let prompt = interactables
            .get(target)
            .map(|i| i.prompt.as_str())
            .unwrap_or("Interact");
        text.0 = format!("[E] {}", prompt);
    }

    let wanted = if shown { Visibility::Inherited } else { Visibility::Hidden };
    if *visibility != wanted {
        *visibility = wanted;
    }
}

/// Mirror the open sign, if any, in the sign panel.
fn update_sign_panel(
    open: Option<Res<OpenSign>>,
    mut panel_query: Query<&mut Visibility, With<SignPanel>>,
    mut text_query: Query<&mut Text, With<SignText>>,
) {
    let Ok(mut visibility) = panel_query.get_single_mut() else {
        return;
    };

    match open {
        Some(open) => {
            if let Ok(mut text) = text_query.get_single_mut() {
                if text.0 != open.text {
                    text.0 = open.text.clone();
                }
            }
            *visibility = Visibility::Inherited;
        }
        None => *visibility = Visibility::Hidden,
    }
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt_app() -> (App, Entity) {
        let mut app = App::new();
        app.add_event::<InteractionFound>()
            .add_event::<InteractionLost>()
            .add_systems(Update, update_interaction_prompt);
        let prompt = app
            .world_mut()
            .spawn((Text::new(""), Visibility::Hidden, InteractionPrompt))
            .id();
        (app, prompt)
    }

    #[test]
    fn prompt_follows_notifications() {
        let (mut app, prompt) = prompt_app();
        let lever = app.world_mut().spawn(Interactable::new("Pull lever")).id();

        app.world_mut().send_event(InteractionFound { target: lever });
        app.update();
        assert_eq!(app.world().get::<Text>(prompt).unwrap().0, "[E] Pull lever");
        assert_eq!(*app.world().get::<Visibility>(prompt).unwrap(), Visibility::Inherited);

        app.world_mut().send_event(InteractionLost);
        app.update();
        assert_eq!(*app.world().get::<Visibility>(prompt).unwrap(), Visibility::Hidden);
    }

    #[test]
    fn found_and_lost_in_one_frame_resolves_by_previous_state() {
        let (mut app, prompt) = prompt_app();
        let lever = app.world_mut().spawn(Interactable::new("Pull lever")).id();

        // Hidden before: found then lost, ends hidden
        app.world_mut().send_event(InteractionFound { target: lever });
        app.world_mut().send_event(InteractionLost);
        app.update();
        assert_eq!(*app.world().get::<Visibility>(prompt).unwrap(), Visibility::Hidden);

        app.world_mut().send_event(InteractionFound { target: lever });
        app.update();

        // Shown before: lost then found, ends shown
        app.world_mut().send_event(InteractionLost);
        app.world_mut().send_event(InteractionFound { target: lever });
        app.update();
        assert_eq!(*app.world().get::<Visibility>(prompt).unwrap(), Visibility::Inherited);
    }
}
