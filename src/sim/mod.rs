//! Simulation module
//!
//! All gameplay logic lives here. This module has no rendering or platform
//! dependencies:
//! - Fixed timestep only (the clock is advanced by `tick`, never read from the host)
//! - Randomness only through the session's seeded RNG
//! - Stable iteration order (collection order)

pub mod collision;
pub mod enemy;
pub mod explosion;
pub mod player;
pub mod projectile;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use enemy::{Enemy, EnemyKind, MovePattern};
pub use explosion::{Explosion, Particle, ParticleKind};
pub use player::{Facing, Player};
pub use projectile::{Owner, Projectile};
pub use state::{Arena, GameEvent, GamePhase, GameState};
pub use tick::{resolve_collisions, tick};
