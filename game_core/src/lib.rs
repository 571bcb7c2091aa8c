pub mod components;
pub mod config;
pub mod error;
pub mod geometry;
pub mod match_state;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use geometry::*;
pub use match_state::*;
pub use params::*;
pub use resources::*;
