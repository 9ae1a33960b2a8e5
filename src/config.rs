//! World configuration
//!
//! Every tunable of the simulation lives here as a named field. Defaults come
//! from [`crate::consts`]; a JSON file may override any subset of fields.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::resolver::CollisionResolver;
use crate::sim::state::Bin;

/// Immutable configuration handed to [`crate::sim::PhysicsWorld::new`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Bin ===
    pub bin_width: f32,
    pub bin_height: f32,
    /// Y of the bin's open top edge
    pub bin_top: f32,
    /// X of the bin's left wall (centred in the playfield when unset)
    pub bin_left: Option<f32>,

    // === Spawning ===
    pub spawn_y: f32,
    /// Radii a new ball is drawn from (uniformly)
    pub radii: Vec<f32>,
    /// Max random horizontal offset for a new ball (0 disables)
    pub spawn_jitter: f32,
    /// New ball starts at the x of the ball just released instead of the centre
    pub carry_release_x: bool,

    // === Control ===
    pub nudge_accel: f32,

    // === Physics ===
    pub gravity: Vec2,
    pub restitution: f32,
    pub bounce_damping: f32,
    pub velocity_floor: f32,
    pub resolver: CollisionResolver,
    /// Step length used by [`CollisionResolver::StepDescent`]
    pub descent_step: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            bin_width: BIN_WIDTH,
            bin_height: BIN_HEIGHT,
            bin_top: BIN_TOP,
            bin_left: None,

            spawn_y: SPAWN_Y,
            radii: BALL_RADII.to_vec(),
            spawn_jitter: SPAWN_JITTER,
            carry_release_x: true,

            nudge_accel: NUDGE_ACCEL,

            gravity: Vec2::new(0.0, GRAVITY_Y),
            restitution: RESTITUTION,
            bounce_damping: BOUNCE_DAMPING,
            velocity_floor: VELOCITY_FLOOR,
            resolver: CollisionResolver::default(),
            descent_step: DESCENT_STEP,
        }
    }
}

impl WorldConfig {
    /// The bin rectangle, centred horizontally unless `bin_left` is set
    pub fn bin(&self) -> Bin {
        Bin {
            x: self
                .bin_left
                .unwrap_or((self.playfield_width - self.bin_width) / 2.0),
            y: self.bin_top,
            width: self.bin_width,
            height: self.bin_height,
        }
    }

    /// Where new active balls appear (before any carried x / jitter)
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(self.playfield_width / 2.0, self.spawn_y)
    }

    /// Reject configurations the simulation cannot run sensibly with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("bin_width", self.bin_width),
            ("bin_height", self.bin_height),
            ("bin_top", self.bin_top),
            ("spawn_y", self.spawn_y),
            ("spawn_jitter", self.spawn_jitter),
            ("nudge_accel", self.nudge_accel),
            ("gravity.x", self.gravity.x),
            ("gravity.y", self.gravity.y),
            ("restitution", self.restitution),
            ("bounce_damping", self.bounce_damping),
            ("velocity_floor", self.velocity_floor),
            ("descent_step", self.descent_step),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name });
            }
        }
        if let Some(left) = self.bin_left {
            if !left.is_finite() {
                return Err(ConfigError::NonFinite { name: "bin_left" });
            }
        }

        for (name, value) in [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("bin_width", self.bin_width),
            ("bin_height", self.bin_height),
            ("descent_step", self.descent_step),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveDimension { name, value });
            }
        }

        for (name, value) in [
            ("restitution", self.restitution),
            ("bounce_damping", self.bounce_damping),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::FactorOutOfRange { name, value });
            }
        }

        for (name, value) in [
            ("velocity_floor", self.velocity_floor),
            ("nudge_accel", self.nudge_accel),
            ("spawn_jitter", self.spawn_jitter),
            ("bin_top", self.bin_top),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        let max_jitter = self.playfield_width / 2.0;
        if self.spawn_jitter > max_jitter {
            return Err(ConfigError::TooLarge {
                name: "spawn_jitter",
                value: self.spawn_jitter,
                max: max_jitter,
            });
        }

        let bin = self.bin();
        if bin.left() < 0.0 {
            return Err(ConfigError::BinOutsidePlayfield {
                edge: "left",
                value: bin.left(),
                limit: 0.0,
            });
        }
        if bin.right() > self.playfield_width {
            return Err(ConfigError::BinOutsidePlayfield {
                edge: "right",
                value: bin.right(),
                limit: self.playfield_width,
            });
        }
        if bin.bottom() > self.playfield_height {
            return Err(ConfigError::BinOutsidePlayfield {
                edge: "bottom",
                value: bin.bottom(),
                limit: self.playfield_height,
            });
        }

        if self.radii.is_empty() {
            return Err(ConfigError::EmptyRadiusSet);
        }
        for &value in &self.radii {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name: "radii" });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveRadius { value });
            }
            if 2.0 * value > self.bin_width {
                return Err(ConfigError::BallWiderThanBin {
                    radius: value,
                    bin_width: self.bin_width,
                });
            }
        }

        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load a config file, falling back to defaults when it does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let config = Self::load(path)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::resolver::DepthSplit;

    #[test]
    fn test_default_is_valid() {
        let config = WorldConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_bin_layout() {
        let bin = WorldConfig::default().bin();
        assert_eq!(bin.x, 125.0);
        assert_eq!(bin.y, 80.0);
        assert_eq!(bin.width, 150.0);
        assert_eq!(bin.height, 200.0);
        assert_eq!(bin.bottom(), 280.0);
    }

    #[test]
    fn test_rejects_bad_bin() {
        let config = WorldConfig {
            bin_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveDimension { name: "bin_width", .. })
        ));

        let config = WorldConfig {
            bin_height: -5.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveDimension { name: "bin_height", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_radii() {
        let config = WorldConfig {
            radii: vec![],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyRadiusSet)));

        let config = WorldConfig {
            radii: vec![10.0, -3.0],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveRadius { .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_and_factors() {
        let config = WorldConfig {
            gravity: Vec2::new(0.0, f32::NAN),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { name: "gravity.y" })
        ));

        let config = WorldConfig {
            restitution: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FactorOutOfRange { name: "restitution", .. })
        ));
    }

    #[test]
    fn test_rejects_huge_spawn_jitter() {
        let config = WorldConfig {
            spawn_jitter: 3.0e38,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooLarge { name: "spawn_jitter", .. })
        ));

        // Half the playfield is the largest accepted jitter
        let config = WorldConfig {
            spawn_jitter: 200.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        let config = WorldConfig {
            spawn_jitter: 200.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bin_wider_than_playfield() {
        let config = WorldConfig {
            bin_width: 1000.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BinOutsidePlayfield { edge: "left", .. })
        ));
    }

    #[test]
    fn test_rejects_bin_below_playfield() {
        let config = WorldConfig {
            bin_height: 250.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BinOutsidePlayfield { edge: "bottom", .. })
        ));

        let config = WorldConfig {
            bin_top: -10.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { name: "bin_top", .. })
        ));

        // Exactly flush with the playfield bottom is fine
        let config = WorldConfig {
            bin_height: 220.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_ball_wider_than_bin() {
        let config = WorldConfig {
            radii: vec![10.0, 100.0],
            resolver: CollisionResolver::StepDescent,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BallWiderThanBin { radius, .. }) if radius == 100.0
        ));

        let config = WorldConfig {
            radii: vec![75.0],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bin_left_override() {
        let config = WorldConfig::from_json(r#"{ "bin_left": 10.0 }"#).unwrap();
        let bin = config.bin();
        assert_eq!(bin.left(), 10.0);
        assert_eq!(bin.right(), 160.0);
        assert_eq!(bin.top(), BIN_TOP);

        let config = WorldConfig {
            bin_left: Some(300.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BinOutsidePlayfield { edge: "right", .. })
        ));

        let config = WorldConfig {
            bin_left: Some(-1.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BinOutsidePlayfield { edge: "left", .. })
        ));

        let config = WorldConfig {
            bin_left: Some(f32::INFINITY),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { name: "bin_left" })
        ));
    }

    #[test]
    fn test_partial_json_override() {
        let config = WorldConfig::from_json(
            r#"{ "bin_width": 200.0, "radii": [8.0], "resolver": "StepDescent" }"#,
        )
        .unwrap();
        assert_eq!(config.bin_width, 200.0);
        assert_eq!(config.radii, vec![8.0]);
        assert_eq!(config.resolver, CollisionResolver::StepDescent);
        // Untouched fields keep defaults
        assert_eq!(config.gravity, Vec2::new(0.0, GRAVITY_Y));
        assert_eq!(config.restitution, RESTITUTION);
    }

    #[test]
    fn test_json_resolver_variants() {
        let config =
            WorldConfig::from_json(r#"{ "resolver": { "Impulse": { "split": "Full" } } }"#)
                .unwrap();
        assert_eq!(
            config.resolver,
            CollisionResolver::Impulse {
                split: DepthSplit::Full
            }
        );
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(matches!(
            WorldConfig::from_json(r#"{ "bin_height": 0.0 }"#),
            Err(ConfigError::NonPositiveDimension { .. })
        ));
        assert!(matches!(
            WorldConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let config = WorldConfig::load_or_default("definitely/not/here.json").unwrap();
        assert_eq!(config, WorldConfig::default());
    }
}
