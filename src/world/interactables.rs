//! Interactable props for the demo room.
//!
//! Each prop carries `Interactable` plus an observer for
//! `TriggerInteraction` that implements what using it does.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::level::LevelGeometry;
use crate::core::{Accessibility, SetPlayerCanMove, TriggerInteraction};
use crate::player::Interactable;

/// Lamp whose light flickers unless flashing lights are disabled.
#[derive(Component)]
pub struct FlickerLamp {
    pub base_intensity: f32,
}

/// Lever that switches a lamp on and off.
#[derive(Component)]
pub struct Lever {
    pub pulled: bool,
    pub lamp: Entity,
}

/// One-shot button that opens a door. Inactive once pressed.
#[derive(Component)]
pub struct PressButton {
    pub door: Entity,
}

/// Door removed by a `PressButton`.
#[derive(Component)]
pub struct Door;

/// Readable sign. Reading it freezes movement while the text is up.
#[derive(Component)]
pub struct Sign {
    pub text: String,
}

/// Sign text currently on screen.
#[derive(Resource)]
pub struct OpenSign {
    pub text: String,
    pub timer: Timer,
}

/// How long sign text stays up.
pub const SIGN_READ_SECONDS: f32 = 3.0;

fn on_lever_used(
    trigger: Trigger<TriggerInteraction>,
    mut levers: Query<(&mut Lever, &mut Transform)>,
    mut lamps: Query<&mut Visibility, With<FlickerLamp>>,
) {
    let Ok((mut lever, mut transform)) = levers.get_mut(trigger.entity()) else {
        return;
    };
    lever.pulled = !lever.pulled;
    let angle = if lever.pulled { -0.6 } else { 0.6 };
    transform.rotation = Quat::from_rotation_x(angle);

    if let Ok(mut visibility) = lamps.get_mut(lever.lamp) {
        *visibility = if lever.pulled {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
    }
    info!("Lever {}", if lever.pulled { "pulled" } else { "reset" });
}

fn on_button_pressed(
    trigger: Trigger<TriggerInteraction>,
    mut commands: Commands,
    mut buttons: Query<(&PressButton, &mut Interactable, &mut Transform)>,
) {
    let Ok((button, mut interactable, mut transform)) = buttons.get_mut(trigger.entity()) else {
        return;
    };
    interactable.active = false;
    transform.translation.z -= 0.05;

    if let Some(mut door) = commands.get_entity(button.door) {
        door.despawn();
    }
    info!("Button pressed, door opened");
}

fn on_sign_read(
    trigger: Trigger<TriggerInteraction>,
    mut commands: Commands,
    signs: Query<&Sign>,
    open: Option<Res<OpenSign>>,
) {
    if open.is_some() {
        return;
    }
    let Ok(sign) = signs.get(trigger.entity()) else {
        return;
    };
    commands.insert_resource(OpenSign {
        text: sign.text.clone(),
        timer: Timer::from_seconds(SIGN_READ_SECONDS, TimerMode::Once),
    });
    commands.trigger(SetPlayerCanMove(false));
}

/// Close the sign once its timer runs out and give movement back.
pub fn close_sign(mut commands: Commands, time: Res<Time>, open: Option<ResMut<OpenSign>>) {
    let Some(mut open) = open else {
        return;
    };
    open.timer.tick(time.delta());
    if open.timer.finished() {
        commands.remove_resource::<OpenSign>();
        commands.trigger(SetPlayerCanMove(true));
    }
}

/// Jitter lamp intensity, or hold it steady for accessibility.
pub fn flicker_lamps(
    accessibility: Res<Accessibility>,
    mut lamps: Query<(&FlickerLamp, &mut PointLight)>,
) {
    for (lamp, mut light) in lamps.iter_mut() {
        light.intensity = if accessibility.no_flashing_lights {
            lamp.base_intensity
        } else {
            lamp.base_intensity * (0.7 + rand::random::<f32>() * 0.3)
        };
    }
}

/// Spawn the lamp, lever, door, button and sign.
pub fn spawn_interactables(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let prop_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.55, 0.45, 0.3),
        ..default()
    });
    let door_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.2, 0.12),
        ..default()
    });

    let lamp = commands
        .spawn((
            FlickerLamp { base_intensity: 400000.0 },
            PointLight {
                color: Color::srgb(1.0, 0.7, 0.4),
                intensity: 400000.0,
                range: 14.0,
                shadows_enabled: true,
                ..default()
            },
            Transform::from_xyz(0.0, 3.0, 0.0),
            LevelGeometry,
        ))
        .id();

    commands
        .spawn((
            Lever { pulled: false, lamp },
            Interactable::new("Pull lever"),
            Mesh3d(meshes.add(Cuboid::new(0.1, 0.6, 0.1))),
            MeshMaterial3d(prop_material.clone()),
            Transform::from_xyz(-3.0, 1.0, -7.7).with_rotation(Quat::from_rotation_x(0.6)),
            RigidBody::Fixed,
            Collider::cuboid(0.15, 0.3, 0.15),
            LevelGeometry,
        ))
        .observe(on_lever_used);

    let door = commands
        .spawn((
            Door,
            Mesh3d(meshes.add(Cuboid::new(2.0, 2.6, 0.2))),
            MeshMaterial3d(door_material),
            Transform::from_xyz(5.0, 1.3, -4.0),
            RigidBody::Fixed,
            Collider::cuboid(1.0, 1.3, 0.1),
            LevelGeometry,
        ))
        .id();

    commands
        .spawn((
            PressButton { door },
            Interactable::new("Press button"),
            Mesh3d(meshes.add(Cuboid::new(0.25, 0.25, 0.1))),
            MeshMaterial3d(prop_material.clone()),
            Transform::from_xyz(3.0, 1.2, -7.8),
            RigidBody::Fixed,
            Collider::cuboid(0.15, 0.15, 0.1),
            LevelGeometry,
        ))
        .observe(on_button_pressed);

    commands
        .spawn((
            Sign {
                text: "The lever kills the light. The button opens the way east.".to_string(),
            },
            Interactable::new("Read sign"),
            Mesh3d(meshes.add(Cuboid::new(1.0, 0.6, 0.05))),
            MeshMaterial3d(prop_material),
            Transform::from_xyz(0.0, 1.5, -7.8),
            RigidBody::Fixed,
            Collider::cuboid(0.5, 0.3, 0.05),
            LevelGeometry,
        ))
        .observe(on_sign_read);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{movement_subscription, MovementEnabled, Player};
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    #[test]
    fn button_is_one_shot_and_opens_door() {
        let mut world = World::new();
        let door = world.spawn(Door).id();
        let button = world
            .spawn((PressButton { door }, Interactable::new("Press"), Transform::default()))
            .observe(on_button_pressed)
            .id();
        world.flush();

        world.trigger_targets(TriggerInteraction, button);
        world.flush();

        assert!(!world.get::<Interactable>(button).unwrap().is_active());
        assert!(!world.entities().contains(door));
    }

    #[test]
    fn lever_toggles_lamp() {
        let mut world = World::new();
        let lamp = world
            .spawn((FlickerLamp { base_intensity: 1.0 }, Visibility::Inherited))
            .id();
        let lever = world
            .spawn((Lever { pulled: false, lamp }, Transform::default()))
            .observe(on_lever_used)
            .id();
        world.flush();

        world.trigger_targets(TriggerInteraction, lever);
        assert_eq!(*world.get::<Visibility>(lamp).unwrap(), Visibility::Hidden);

        world.trigger_targets(TriggerInteraction, lever);
        assert_eq!(*world.get::<Visibility>(lamp).unwrap(), Visibility::Inherited);
    }

    #[test]
    fn reading_a_sign_freezes_movement_until_closed() {
        let mut world = World::new();
        world.init_resource::<Time>();
        let player = world
            .spawn((Player, MovementEnabled::default()))
            .with_children(|parent| {
                parent.spawn(movement_subscription());
            })
            .id();
        let sign = world
            .spawn(Sign { text: "Hello".to_string() })
            .observe(on_sign_read)
            .id();
        world.flush();

        world.trigger_targets(TriggerInteraction, sign);
        world.flush();

        assert_eq!(world.resource::<OpenSign>().text, "Hello");
        assert_eq!(world.get::<MovementEnabled>(player), Some(&MovementEnabled(false)));

        world
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(SIGN_READ_SECONDS + 0.1));
        world.run_system_once(close_sign).unwrap();

        assert!(world.get_resource::<OpenSign>().is_none());
        assert_eq!(world.get::<MovementEnabled>(player), Some(&MovementEnabled(true)));
    }

    #[test]
    fn lamps_hold_steady_without_flashing_lights() {
        let mut world = World::new();
        world.insert_resource(Accessibility { no_flashing_lights: true });
        let lamp = world
            .spawn((
                FlickerLamp { base_intensity: 1234.0 },
                PointLight { intensity: 1.0, ..default() },
            ))
            .id();

        world.run_system_once(flicker_lamps).unwrap();

        assert_eq!(world.get::<PointLight>(lamp).unwrap().intensity, 1234.0);
    }
}
