pub mod docs;
pub mod health;
pub mod player_controller;
pub mod ranking_controller;
pub mod song_controller;

pub use docs::openapi_json;
pub use health::health_check;
pub use player_controller::{get_player_scores, get_player_stats};
pub use ranking_controller::get_rankings;
pub use song_controller::{get_gimmick, get_nominated, get_recommendations, get_score_distribution};

#[cfg(test)]
mod tests;
