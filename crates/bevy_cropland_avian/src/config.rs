//! Global physics configuration and defaults.

use bevy::prelude::*;

/// Global physics configuration resource.
///
/// Controls the material parameters applied to colliders generated from
/// spawned farm pieces. The defaults copy the shipped game's tuning: inert
/// sensors for the scenery, frictionless rotation-locked boxes for actors.
///
/// # Example
///
/// ```rust,ignore
/// use bevy::prelude::*;
/// use bevy_cropland_avian::{CroplandAvianPlugin, FieldPhysicsConfig};
///
/// App::new()
///     .add_plugins(CroplandAvianPlugin::new(
///         FieldPhysicsConfig {
///             default_friction: 0.3,
///             ..default()
///         }
///     ))
///     .run();
/// ```
#[derive(Resource, Debug, Clone)]
pub struct FieldPhysicsConfig {
    /// Friction coefficient of static pieces and boundary walls.
    ///
    /// Default: `0.4`
    pub default_friction: f32,

    /// Restitution coefficient of static pieces and boundary walls.
    ///
    /// Default: `0.1`
    pub default_restitution: f32,

    /// Density of static pieces (kg/m^2).
    ///
    /// Default: `0.0`
    pub default_density: f32,

    /// Density of dynamic actor bodies (kg/m^2).
    ///
    /// Default: `1.0`
    pub actor_density: f32,

    /// Friction coefficient of dynamic actor bodies.
    ///
    /// Default: `0.0`
    pub actor_friction: f32,

    /// Restitution coefficient of dynamic actor bodies.
    ///
    /// Default: `0.0`
    pub actor_restitution: f32,

    /// Fraction of an actor's footprint used for its collider, per axis.
    ///
    /// Default: `(0.7, 0.95)`
    pub actor_shrink: Vec2,

    /// Insert a zero `Gravity` resource for the top-down world.
    ///
    /// Default: `true`
    pub zero_gravity: bool,
}

impl Default for FieldPhysicsConfig {
    fn default() -> Self {
        Self {
            default_friction: 0.4,
            default_restitution: 0.1,
            default_density: 0.0,
            actor_density: 1.0,
            actor_friction: 0.0,
            actor_restitution: 0.0,
            actor_shrink: Vec2::new(0.7, 0.95),
            zero_gravity: true,
        }
    }
}

impl FieldPhysicsConfig {
    /// Builder method: Set the friction of static pieces.
    pub fn with_default_friction(mut self, friction: f32) -> Self {
        self.default_friction = friction;
        self
    }

    /// Builder method: Set the restitution of static pieces.
    pub fn with_default_restitution(mut self, restitution: f32) -> Self {
        self.default_restitution = restitution;
        self
    }

    /// Builder method: Set the density of static pieces.
    pub fn with_default_density(mut self, density: f32) -> Self {
        self.default_density = density;
        self
    }

    /// Builder method: Set the density of actor bodies.
    pub fn with_actor_density(mut self, density: f32) -> Self {
        self.actor_density = density;
        self
    }

    /// Builder method: Set the friction of actor bodies.
    pub fn with_actor_friction(mut self, friction: f32) -> Self {
        self.actor_friction = friction;
        self
    }

    /// Builder method: Set the restitution of actor bodies.
    pub fn with_actor_restitution(mut self, restitution: f32) -> Self {
        self.actor_restitution = restitution;
        self
    }

    /// Builder method: Set the actor collider shrink fractions.
    pub fn with_actor_shrink(mut self, shrink: Vec2) -> Self {
        self.actor_shrink = shrink;
        self
    }

    /// Builder method: Enable or disable the zero-gravity resource.
    pub fn with_zero_gravity(mut self, zero_gravity: bool) -> Self {
        self.zero_gravity = zero_gravity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_shipped_tuning() {
        let config = FieldPhysicsConfig::default();
        assert_eq!(config.default_friction, 0.4);
        assert_eq!(config.default_restitution, 0.1);
        assert_eq!(config.default_density, 0.0);
        assert_eq!(config.actor_density, 1.0);
        assert_eq!(config.actor_friction, 0.0);
        assert_eq!(config.actor_shrink, Vec2::new(0.7, 0.95));
        assert!(config.zero_gravity);
    }

    #[test]
    fn test_builders_override_single_fields() {
        let config = FieldPhysicsConfig::default()
            .with_default_friction(0.8)
            .with_zero_gravity(false);
        assert_eq!(config.default_friction, 0.8);
        assert!(!config.zero_gravity);
        // Untouched fields keep their defaults.
        assert_eq!(config.actor_density, 1.0);
    }
}
