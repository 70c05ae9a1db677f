pub mod coin;
pub mod enemy;
pub mod platform;
pub mod player;
