//! Transform tweening toward a rest pose.

use bevy::prelude::*;

/// Component for smooth transform interpolation back to a target.
///
/// The viewmodel uses this to settle after recoil kicks: systems displace
/// the transform, this system pulls it back.
#[derive(Component, Debug, Clone)]
pub struct SmoothTransform {
    /// Target translation (None = don't animate)
    pub target_translation: Option<Vec3>,
    /// Target rotation (None = don't animate)
    pub target_rotation: Option<Quat>,
    /// Interpolation speed multiplier (higher = faster)
    pub translation_speed: f32,
    pub rotation_speed: f32,
}

impl Default for SmoothTransform {
    fn default() -> Self {
        Self {
            target_translation: None,
            target_rotation: None,
            translation_speed: 12.0,
            rotation_speed: 12.0,
        }
    }
}

impl SmoothTransform {
    /// Settle toward a fixed rest pose.
    pub fn toward(rest: Transform, translation_speed: f32, rotation_speed: f32) -> Self {
        Self {
            target_translation: Some(rest.translation),
            target_rotation: Some(rest.rotation),
            translation_speed,
            rotation_speed,
        }
    }
}

/// System that interpolates transforms toward their targets.
pub fn update_smooth_transforms(
    time: Res<Time>,
    mut query: Query<(&mut Transform, &SmoothTransform)>,
) {
    let dt = time.delta_secs();

    for (mut transform, smooth) in query.iter_mut() {
        if let Some(target) = smooth.target_translation {
            let t = (smooth.translation_speed * dt).min(1.0);
            transform.translation = transform.translation.lerp(target, t);
        }

        if let Some(target) = smooth.target_rotation {
            let t = (smooth.rotation_speed * dt).min(1.0);
            transform.rotation = transform.rotation.slerp(target, t);
        }
    }
}
