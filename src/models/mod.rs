pub mod api;
pub mod chart;
pub mod distribution;
pub mod player;
pub mod ranking;
pub mod recommendation;
pub mod score;
pub mod song;

pub use api::*;
pub use chart::*;
pub use distribution::*;
pub use player::*;
pub use ranking::*;
pub use recommendation::*;
pub use score::*;
pub use song::*;
