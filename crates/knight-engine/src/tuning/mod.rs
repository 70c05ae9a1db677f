//! Gameplay tuning, kept apart from runtime configuration (tick rate, world
//! size, buffer capacities). All values are per tick, not per second.

pub mod attack;
pub mod pickup;
pub mod player;

pub use attack::AttackTuning;
pub use pickup::PickupTuning;
pub use player::PlayerTuning;
