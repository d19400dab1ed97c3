use std::sync::Arc;

use crate::models::{PlayerStats, SkillHistoryPoint, Stats};
use crate::services::repository::DdrRepository;
use crate::utils::error::AppResult;
use crate::utils::grade::calculate_grade;

// 玩家统计服务：SP/DP 技能点总和、段位以及历史曲线
#[derive(Clone)]
pub struct PlayerStatsService {
    repository: Arc<dyn DdrRepository>,
}

impl PlayerStatsService {
    pub fn new(repository: Arc<dyn DdrRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_player_stats(&self, name: &str) -> AppResult<Option<PlayerStats>> {
        let Some(player) = self.repository.find_player_by_name(name).await? else {
            return Ok(None);
        };

        let skill_history = self
            .repository
            .find_skill_history(player.id)
            .await?
            .into_iter()
            .map(|record| SkillHistoryPoint {
                date: record.recorded_at.to_rfc3339(),
                sp_skill_point: record.total_flare_skill_sp,
                dp_skill_point: record.total_flare_skill_dp,
            })
            .collect();

        Ok(Some(PlayerStats {
            created_at: player.created_at.to_rfc3339(),
            updated_at: player.updated_at.to_rfc3339(),
            sp: to_stats(player.total_flare_skill_sp),
            dp: to_stats(player.total_flare_skill_dp),
            skill_history,
        }))
    }
}

fn to_stats(total_flare_skill: f64) -> Stats {
    Stats {
        total_flare_skill,
        grade: calculate_grade(total_flare_skill),
    }
}
