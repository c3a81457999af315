//! First-person viewmodel animation driven by `AnimationParams`.
//!
//! The viewmodel is a child of the camera pivot. It bobs with the movement
//! blend and kicks back when the shoot condition is set. Flashing effects
//! respect the accessibility setting.

use bevy::prelude::*;

use super::components::*;
use crate::core::{Accessibility, SmoothTransform};
use crate::input::ActionBindings;

/// Rest pose of the viewmodel relative to the camera pivot.
pub const VIEWMODEL_REST: Vec3 = Vec3::new(0.3, -0.2, -0.5);

/// Marker for the viewmodel entity.
#[derive(Component)]
pub struct Viewmodel;

/// Short-lived light at the viewmodel's muzzle.
#[derive(Component)]
pub struct MuzzleFlash {
    pub timer: Timer,
}

impl Default for MuzzleFlash {
    fn default() -> Self {
        let mut timer = Timer::from_seconds(0.06, TimerMode::Once);
        // Start finished so the flash is dark until the first shot
        timer.tick(timer.duration());
        Self { timer }
    }
}

/// Set the shoot condition on press, unless flashing lights are disabled.
pub fn handle_shoot_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<ActionBindings>,
    accessibility: Res<Accessibility>,
    mut player_query: Query<&mut AnimationParams, With<Player>>,
) {
    if !bindings.shoot_pressed(&keyboard) || accessibility.no_flashing_lights {
        return;
    }
    let Ok(mut params) = player_query.get_single_mut() else {
        return;
    };
    params.shoot = true;
}

/// Random recoil offset, scaled by `intensity`.
fn recoil_jitter(intensity: f32) -> Vec3 {
    let x = (rand::random::<f32>() - 0.5) * 2.0 * intensity;
    let y = (rand::random::<f32>() - 0.5) * 2.0 * intensity;
    Vec3::new(x, y, 0.0)
}

/// Walk bob offset for the given blend (0 = idle, 1 = full speed).
pub fn bob_offset(elapsed: f32, movement_blend: f32) -> Vec3 {
    let sway = (elapsed * 5.0).sin() * 0.015 * movement_blend;
    let bounce = (elapsed * 10.0).sin().abs() * 0.012 * movement_blend;
    Vec3::new(sway, bounce, 0.0)
}

/// Apply walk bob and consume the shoot condition.
pub fn animate_viewmodel(
    time: Res<Time>,
    mut player_query: Query<&mut AnimationParams, With<Player>>,
    mut viewmodel_query: Query<(&mut Transform, &mut SmoothTransform), With<Viewmodel>>,
    mut flash_query: Query<(&mut MuzzleFlash, &mut Visibility)>,
) {
    let Ok(mut params) = player_query.get_single_mut() else {
        return;
    };
    let Ok((mut transform, mut smooth)) = viewmodel_query.get_single_mut() else {
        return;
    };

    smooth.target_translation =
        Some(VIEWMODEL_REST + bob_offset(time.elapsed_secs(), params.movement_blend));

    if params.shoot {
        params.shoot = false;
        transform.translation += Vec3::new(0.0, 0.02, 0.08) + recoil_jitter(0.01);
        transform.rotate_local_x(0.25);

        for (mut flash, mut visibility) in flash_query.iter_mut() {
            flash.timer.reset();
            *visibility = Visibility::Visible;
        }
    }
}

/// Hide the muzzle flash once its timer runs out.
pub fn fade_muzzle_flash(
    time: Res<Time>,
    mut flash_query: Query<(&mut MuzzleFlash, &mut Visibility)>,
) {
    for (mut flash, mut visibility) in flash_query.iter_mut() {
        flash.timer.tick(time.delta());
        if flash.timer.finished() && *visibility != Visibility::Hidden {
            *visibility = Visibility::Hidden;
        }
    }
}

/// Show the steady light only when flashing lights are disabled.
pub fn sync_steady_light(
    accessibility: Res<Accessibility>,
    mut light_query: Query<&mut Visibility, With<SteadyLight>>,
) {
    let wanted = if accessibility.no_flashing_lights {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut visibility in light_query.iter_mut() {
        if *visibility != wanted {
            *visibility = wanted;
        }
    }
}
