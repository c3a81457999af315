//! UI plugin - HUD and the pause overlay.
//!
//! Pausing releases the cursor and opens a small overlay that hosts the
//! session settings. Flipping the flashing-lights entry takes effect at once:
//! the muzzle flash and the flickering lamps read `Accessibility` every frame.

use bevy::app::AppExit;
use bevy::prelude::*;

use super::hud;
use crate::core::{Accessibility, PlayState};

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        hud::setup_hud_systems(app);

        app.add_systems(OnEnter(PlayState::Paused), open_pause_overlay)
            .add_systems(
                Update,
                (overlay_input, refresh_overlay_labels)
                    .chain()
                    .run_if(in_state(PlayState::Paused)),
            )
            .add_systems(OnExit(PlayState::Paused), close_pause_overlay);
    }
}

/// Root of the pause overlay.
#[derive(Component)]
struct PauseOverlay;

/// What an overlay entry does when clicked.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
enum OverlayAction {
    Resume,
    ToggleFlashingLights,
    Quit,
}

/// Text node showing the label of an entry.
#[derive(Component)]
struct OverlayLabel(OverlayAction);

/// Effect of a click that reaches outside the settings.
#[derive(Debug, PartialEq, Eq)]
enum OverlayOutcome {
    Stay,
    Resume,
    Quit,
}

const ENTRY_IDLE: Color = Color::srgba(0.1, 0.1, 0.12, 0.9);
const ENTRY_BORDER: Color = Color::srgb(0.35, 0.32, 0.25);
const ENTRY_FOCUS: Color = Color::srgb(0.85, 0.7, 0.35);

impl OverlayAction {
    const ENTRIES: [OverlayAction; 3] = [
        OverlayAction::Resume,
        OverlayAction::ToggleFlashingLights,
        OverlayAction::Quit,
    ];

    fn label(self, settings: &Accessibility) -> String {
        match self {
            OverlayAction::Resume => "Resume".to_string(),
            OverlayAction::ToggleFlashingLights => {
                let state = if settings.no_flashing_lights { "Off" } else { "On" };
                format!("Flashing lights: {state}")
            }
            OverlayAction::Quit => "Quit".to_string(),
        }
    }

    fn apply(self, settings: &mut Accessibility) -> OverlayOutcome {
        match self {
            OverlayAction::Resume => OverlayOutcome::Resume,
            OverlayAction::ToggleFlashingLights => {
                settings.no_flashing_lights = !settings.no_flashing_lights;
                info!("No flashing lights: {}", settings.no_flashing_lights);
                OverlayOutcome::Stay
            }
            OverlayAction::Quit => OverlayOutcome::Quit,
        }
    }
}

fn open_pause_overlay(mut commands: Commands, settings: Res<Accessibility>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                justify_content: JustifyContent::FlexStart,
                align_items: AlignItems::FlexEnd,
                padding: UiRect::all(Val::Px(32.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.45)),
            PauseOverlay,
        ))
        .with_children(|overlay| {
            overlay
                .spawn(Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(8.0),
                    ..default()
                })
                .with_children(|column| {
                    column.spawn((
                        Text::new("Paused"),
                        TextFont {
                            font_size: 32.0,
                            ..default()
                        },
                        TextColor(ENTRY_FOCUS),
                    ));

                    for action in OverlayAction::ENTRIES {
                        column
                            .spawn((
                                Button,
                                Node {
                                    width: Val::Px(260.0),
                                    padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                                    border: UiRect::left(Val::Px(3.0)),
                                    ..default()
                                },
                                BackgroundColor(ENTRY_IDLE),
                                BorderColor(ENTRY_BORDER),
                                action,
                            ))
                            .with_children(|entry| {
                                entry.spawn((
                                    Text::new(action.label(&settings)),
                                    TextFont {
                                        font_size: 20.0,
                                        ..default()
                                    },
                                    TextColor(Color::srgb(0.85, 0.85, 0.8)),
                                    OverlayLabel(action),
                                ));
                            });
                    }
                });
        });
}

/// React to clicks and highlight the entry under the pointer.
fn overlay_input(
    mut entries: Query<
        (&Interaction, &OverlayAction, &mut BorderColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut settings: ResMut<Accessibility>,
    mut next_state: ResMut<NextState<PlayState>>,
    mut exit: EventWriter<AppExit>,
) {
    for (interaction, action, mut border) in entries.iter_mut() {
        border.0 = match interaction {
            Interaction::None => ENTRY_BORDER,
            Interaction::Hovered | Interaction::Pressed => ENTRY_FOCUS,
        };

        if *interaction != Interaction::Pressed {
            continue;
        }
        match action.apply(&mut settings) {
            OverlayOutcome::Stay => {}
            OverlayOutcome::Resume => next_state.set(PlayState::Exploring),
            OverlayOutcome::Quit => {
                exit.send(AppExit::Success);
            }
        }
    }
}

fn refresh_overlay_labels(
    settings: Res<Accessibility>,
    mut labels: Query<(&mut Text, &OverlayLabel)>,
) {
    if !settings.is_changed() {
        return;
    }
    for (mut text, label) in labels.iter_mut() {
        text.0 = label.0.label(&settings);
    }
}

fn close_pause_overlay(mut commands: Commands, query: Query<Entity, With<PauseOverlay>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
