use async_trait::async_trait;

use crate::models::{
    ChartType, GimmickAndNotesRow, Player, PlayerScore, RankingBaseRow, SkillHistoryRecord, Song,
};
use crate::utils::error::AppResult;

/// 数据访问接口，由各服务持有，聚合逻辑本身只接收已取出的数据
#[async_trait]
pub trait DdrRepository: Send + Sync {
    async fn find_player_by_name(&self, name: &str) -> AppResult<Option<Player>>;

    async fn find_scores_by_player(&self, player_id: i64) -> AppResult<Vec<PlayerScore>>;

    async fn find_songs_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Song>>;

    /// 某谱面在某 Flare Rank 下的全部分数
    async fn find_score_values(
        &self,
        song_id: i64,
        chart_type: ChartType,
        flare_rank: &str,
    ) -> AppResult<Vec<i64>>;

    /// 把某谱面/Flare Rank 作为技能对象的玩家 (去重)
    async fn find_player_ids_with_chart(
        &self,
        song_id: i64,
        chart_type: ChartType,
        flare_rank: &str,
    ) -> AppResult<Vec<i64>>;

    /// 指定玩家们除了该谱面/Flare Rank 之外的全部成绩
    async fn find_scores_by_players_excluding(
        &self,
        player_ids: &[i64],
        song_id: i64,
        chart_type: ChartType,
        flare_rank: &str,
    ) -> AppResult<Vec<PlayerScore>>;

    async fn find_rankings_by_grade(&self, grade: &str) -> AppResult<Vec<RankingBaseRow>>;

    async fn find_rankings_by_chart(
        &self,
        song_id: i64,
        chart_type: ChartType,
    ) -> AppResult<Vec<RankingBaseRow>>;

    /// 技能点历史，按记录时间升序
    async fn find_skill_history(&self, player_id: i64) -> AppResult<Vec<SkillHistoryRecord>>;

    async fn find_gimmick_and_notes(
        &self,
        song_id: i64,
        chart_initial: &str,
    ) -> AppResult<Option<GimmickAndNotesRow>>;

    async fn upsert_songs(&self, songs: &[Song]) -> AppResult<usize>;

    /// 清空后整体替换 gimmick 数据
    async fn replace_gimmick_and_notes(&self, rows: &[GimmickAndNotesRow]) -> AppResult<usize>;
}
