//! Demo room geometry.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

/// Marker for level geometry entities (for cleanup).
#[derive(Component)]
pub struct LevelGeometry;

/// Dimensions of the demo room.
pub struct RoomLayout {
    pub width: f32,
    pub depth: f32,
    pub wall_height: f32,
    pub wall_thickness: f32,
    pub floor_depth: f32,
}

impl Default for RoomLayout {
    fn default() -> Self {
        Self {
            width: 16.0,
            depth: 16.0,
            wall_height: 3.5,
            wall_thickness: 0.3,
            floor_depth: 0.5,
        }
    }
}

impl RoomLayout {
    /// Where the player starts: near the south wall, facing north.
    pub fn spawn_point(&self) -> Vec3 {
        Vec3::new(0.0, 1.0, self.depth / 2.0 - 2.0)
    }

    /// Center and half extents of the four walls.
    pub fn walls(&self) -> [(Vec3, Vec3); 4] {
        let half_w = self.width / 2.0;
        let half_d = self.depth / 2.0;
        let half_h = self.wall_height / 2.0;
        let half_t = self.wall_thickness / 2.0;
        [
            // North
            (Vec3::new(0.0, half_h, -half_d), Vec3::new(half_w, half_h, half_t)),
            // South
            (Vec3::new(0.0, half_h, half_d), Vec3::new(half_w, half_h, half_t)),
            // West
            (Vec3::new(-half_w, half_h, 0.0), Vec3::new(half_t, half_h, half_d)),
            // East
            (Vec3::new(half_w, half_h, 0.0), Vec3::new(half_t, half_h, half_d)),
        ]
    }
}

/// Spawn floor and walls with static colliders.
pub fn spawn_room(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    layout: &RoomLayout,
) {
    let floor_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.3, 0.28, 0.25),
        perceptual_roughness: 0.95,
        ..default()
    });
    let wall_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.4, 0.37, 0.33),
        perceptual_roughness: 0.9,
        ..default()
    });

    // Floor as a box extending downward from y=0
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(layout.width, layout.floor_depth, layout.depth))),
        MeshMaterial3d(floor_material),
        Transform::from_xyz(0.0, -layout.floor_depth / 2.0, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(layout.width / 2.0, layout.floor_depth / 2.0, layout.depth / 2.0),
        LevelGeometry,
    ));

    for (center, half) in layout.walls() {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::from_size(half * 2.0))),
            MeshMaterial3d(wall_material.clone()),
            Transform::from_translation(center),
            RigidBody::Fixed,
            Collider::cuboid(half.x, half.y, half.z),
            LevelGeometry,
        ));
    }

    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.6, 0.55, 0.5),
        brightness: 80.0,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_point_is_inside_the_walls() {
        let layout = RoomLayout::default();
        let spawn = layout.spawn_point();
        assert!(spawn.x.abs() < layout.width / 2.0 - layout.wall_thickness);
        assert!(spawn.z.abs() < layout.depth / 2.0 - layout.wall_thickness);
        assert!(spawn.y > 0.0);
    }
}
