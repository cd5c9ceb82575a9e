//! tilebonk: tile platformer core (tile grid → rectangles, probe, one actor)

pub mod types;
pub mod api;
pub mod error;
pub mod config;
pub mod narrowphase;
pub mod compiler;
pub mod probe;
pub mod motion;
pub mod pickup;
pub mod camera;
pub mod level;
pub mod world;

pub use crate::types::*;
pub use crate::api::*;
pub use crate::error::{ConfigError, GridError, LevelError};
pub use crate::config::PhysicsConfig;
pub use crate::compiler::{compile, compile_layers, TileGrid};
pub use crate::probe::ContactProbe;
pub use crate::motion::{brake, MotionResolver, TickReport};
pub use crate::pickup::collect_pickups;
pub use crate::camera::Camera;
pub use crate::level::Level;
pub use crate::world::GameState;
