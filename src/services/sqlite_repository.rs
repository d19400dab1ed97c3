use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::{
    ChartType, GimmickAndNotesRow, Player, PlayerScore, RankingBaseRow, SkillHistoryRecord, Song,
};
use crate::services::repository::DdrRepository;
use crate::utils::error::{AppError, AppResult};

const SONG_COLUMNS: &str =
    "id, title, version, be_sp, b_sp, d_sp, e_sp, c_sp, b_dp, d_dp, e_dp, c_dp";
const SCORE_COLUMNS: &str = "player_id, song_id, chart_type, score, flare_rank, flare_skill";
const RANKING_COLUMNS: &str =
    "song_id, category, chart_type, grade, spdp, achieved_count, total_count, flare_rank";

// SQLite 单条语句的绑定参数有上限，IN 查询按块拆分
const IN_CLAUSE_CHUNK: usize = 500;

/// 基于 SQLite 的数据访问实现
#[derive(Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // 初始化数据库表
    pub async fn init_tables(&self) -> AppResult<()> {
        let statements = [
            r#"
            CREATE TABLE IF NOT EXISTS songs (
                id INTEGER PRIMARY KEY NOT NULL,
                title TEXT NOT NULL,
                version TEXT NOT NULL,
                be_sp INTEGER NOT NULL DEFAULT 0,
                b_sp INTEGER NOT NULL DEFAULT 0,
                d_sp INTEGER NOT NULL DEFAULT 0,
                e_sp INTEGER NOT NULL DEFAULT 0,
                c_sp INTEGER NOT NULL DEFAULT 0,
                b_dp INTEGER NOT NULL DEFAULT 0,
                d_dp INTEGER NOT NULL DEFAULT 0,
                e_dp INTEGER NOT NULL DEFAULT 0,
                c_dp INTEGER NOT NULL DEFAULT 0
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                total_flare_skill_sp REAL NOT NULL DEFAULT 0,
                total_flare_skill_dp REAL NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS player_scores (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                player_id INTEGER NOT NULL,
                song_id INTEGER NOT NULL,
                chart_type TEXT NOT NULL,
                score INTEGER NOT NULL,
                flare_rank TEXT NOT NULL,
                flare_skill REAL NOT NULL DEFAULT 0
            )
            "#,
            "CREATE INDEX IF NOT EXISTS idx_player_scores_player ON player_scores(player_id)",
            "CREATE INDEX IF NOT EXISTS idx_player_scores_chart ON player_scores(song_id, chart_type, flare_rank)",
            r#"
            CREATE TABLE IF NOT EXISTS rankings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                song_id INTEGER NOT NULL,
                category TEXT NOT NULL,
                chart_type TEXT NOT NULL,
                grade TEXT NOT NULL,
                spdp TEXT NOT NULL,
                achieved_count INTEGER NOT NULL,
                total_count INTEGER NOT NULL,
                flare_rank TEXT NOT NULL
            )
            "#,
            "CREATE INDEX IF NOT EXISTS idx_rankings_grade ON rankings(grade)",
            "CREATE INDEX IF NOT EXISTS idx_rankings_chart ON rankings(song_id, chart_type)",
            r#"
            CREATE TABLE IF NOT EXISTS gimmick_and_notes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                song_id INTEGER NOT NULL,
                chart_type TEXT NOT NULL,
                has_soflan BOOLEAN NOT NULL DEFAULT 0,
                has_stop BOOLEAN NOT NULL DEFAULT 0,
                has_shock_arrow BOOLEAN NOT NULL DEFAULT 0,
                notes INTEGER NOT NULL DEFAULT 0,
                freeze INTEGER NOT NULL DEFAULT 0,
                shock_arrow INTEGER NOT NULL DEFAULT 0
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS player_skill_history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                player_id INTEGER NOT NULL,
                total_flare_skill_sp REAL NOT NULL,
                total_flare_skill_dp REAL NOT NULL,
                recorded_at TEXT NOT NULL
            )
            "#,
        ];

        for statement in statements {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(format!("初始化数据库表失败: {e}")))?;
        }

        log::info!("数据库表初始化检查完成");
        Ok(())
    }
}

#[async_trait]
impl DdrRepository for SqliteRepository {
    async fn find_player_by_name(&self, name: &str) -> AppResult<Option<Player>> {
        sqlx::query_as::<_, Player>(
            "SELECT id, name, total_flare_skill_sp, total_flare_skill_dp, created_at, updated_at \
             FROM players WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("查询玩家失败: {e}")))
    }

    async fn find_scores_by_player(&self, player_id: i64) -> AppResult<Vec<PlayerScore>> {
        sqlx::query_as::<_, PlayerScore>(&format!(
            "SELECT {SCORE_COLUMNS} FROM player_scores WHERE player_id = ? ORDER BY id"
        ))
        .bind(player_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("查询玩家成绩失败: {e}")))
    }

    async fn find_songs_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Song>> {
        let mut songs = Vec::with_capacity(ids.len());
        for chunk in ids.chunks(IN_CLAUSE_CHUNK) {
            let mut builder =
                QueryBuilder::<Sqlite>::new(format!("SELECT {SONG_COLUMNS} FROM songs WHERE id IN ("));
            let mut separated = builder.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(")");

            let rows = builder
                .build_query_as::<Song>()
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(format!("查询歌曲失败: {e}")))?;
            songs.extend(rows);
        }
        Ok(songs)
    }

    async fn find_score_values(
        &self,
        song_id: i64,
        chart_type: ChartType,
        flare_rank: &str,
    ) -> AppResult<Vec<i64>> {
        let rows: Vec<(i64,)> = sqlx::query_as(
            "SELECT score FROM player_scores WHERE song_id = ? AND chart_type = ? AND flare_rank = ?",
        )
        .bind(song_id)
        .bind(chart_type.as_str())
        .bind(flare_rank)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("查询分数分布数据失败: {e}")))?;

        Ok(rows.into_iter().map(|(score,)| score).collect())
    }

    async fn find_player_ids_with_chart(
        &self,
        song_id: i64,
        chart_type: ChartType,
        flare_rank: &str,
    ) -> AppResult<Vec<i64>> {
        let rows: Vec<(i64,)> = sqlx::query_as(
            "SELECT DISTINCT player_id FROM player_scores \
             WHERE song_id = ? AND chart_type = ? AND flare_rank = ? ORDER BY player_id",
        )
        .bind(song_id)
        .bind(chart_type.as_str())
        .bind(flare_rank)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("查询目标玩家失败: {e}")))?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    async fn find_scores_by_players_excluding(
        &self,
        player_ids: &[i64],
        song_id: i64,
        chart_type: ChartType,
        flare_rank: &str,
    ) -> AppResult<Vec<PlayerScore>> {
        let mut scores = Vec::new();
        for chunk in player_ids.chunks(IN_CLAUSE_CHUNK) {
            let mut builder = QueryBuilder::<Sqlite>::new(format!(
                "SELECT {SCORE_COLUMNS} FROM player_scores WHERE player_id IN ("
            ));
            let mut separated = builder.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(") AND NOT (song_id = ");
            builder.push_bind(song_id);
            builder.push(" AND chart_type = ");
            builder.push_bind(chart_type.as_str());
            builder.push(" AND flare_rank = ");
            builder.push_bind(flare_rank.to_string());
            builder.push(") ORDER BY id");

            let rows = builder
                .build_query_as::<PlayerScore>()
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(format!("查询玩家其他成绩失败: {e}")))?;
            scores.extend(rows);
        }
        Ok(scores)
    }

    async fn find_rankings_by_grade(&self, grade: &str) -> AppResult<Vec<RankingBaseRow>> {
        sqlx::query_as::<_, RankingBaseRow>(&format!(
            "SELECT {RANKING_COLUMNS} FROM rankings WHERE grade = ? ORDER BY id"
        ))
        .bind(grade.to_uppercase())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("查询排行数据失败: {e}")))
    }

    async fn find_rankings_by_chart(
        &self,
        song_id: i64,
        chart_type: ChartType,
    ) -> AppResult<Vec<RankingBaseRow>> {
        sqlx::query_as::<_, RankingBaseRow>(&format!(
            "SELECT {RANKING_COLUMNS} FROM rankings WHERE song_id = ? AND chart_type = ? ORDER BY id"
        ))
        .bind(song_id)
        .bind(chart_type.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("查询谱面排行数据失败: {e}")))
    }

    async fn find_skill_history(&self, player_id: i64) -> AppResult<Vec<SkillHistoryRecord>> {
        sqlx::query_as::<_, SkillHistoryRecord>(
            "SELECT player_id, total_flare_skill_sp, total_flare_skill_dp, recorded_at \
             FROM player_skill_history WHERE player_id = ? ORDER BY recorded_at ASC",
        )
        .bind(player_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("查询技能历史失败: {e}")))
    }

    async fn find_gimmick_and_notes(
        &self,
        song_id: i64,
        chart_initial: &str,
    ) -> AppResult<Option<GimmickAndNotesRow>> {
        sqlx::query_as::<_, GimmickAndNotesRow>(
            "SELECT song_id, chart_type, has_soflan, has_stop, has_shock_arrow, notes, freeze, shock_arrow \
             FROM gimmick_and_notes WHERE song_id = ? AND chart_type = ? LIMIT 1",
        )
        .bind(song_id)
        .bind(chart_initial)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("查询 gimmick 数据失败: {e}")))
    }

    async fn upsert_songs(&self, songs: &[Song]) -> AppResult<usize> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("开始事务失败: {e}")))?;

        for song in songs {
            sqlx::query(
                r#"
                INSERT INTO songs (id, title, version, be_sp, b_sp, d_sp, e_sp, c_sp, b_dp, d_dp, e_dp, c_dp)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    title = excluded.title,
                    version = excluded.version,
                    be_sp = excluded.be_sp,
                    b_sp = excluded.b_sp,
                    d_sp = excluded.d_sp,
                    e_sp = excluded.e_sp,
                    c_sp = excluded.c_sp,
                    b_dp = excluded.b_dp,
                    d_dp = excluded.d_dp,
                    e_dp = excluded.e_dp,
                    c_dp = excluded.c_dp
                "#,
            )
            .bind(song.id)
            .bind(&song.title)
            .bind(&song.version)
            .bind(song.be_sp)
            .bind(song.b_sp)
            .bind(song.d_sp)
            .bind(song.e_sp)
            .bind(song.c_sp)
            .bind(song.b_dp)
            .bind(song.d_dp)
            .bind(song.e_dp)
            .bind(song.c_dp)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::DatabaseError(format!("写入歌曲 {} 失败: {e}", song.id)))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("提交事务失败: {e}")))?;

        Ok(songs.len())
    }

    async fn replace_gimmick_and_notes(&self, rows: &[GimmickAndNotesRow]) -> AppResult<usize> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("开始事务失败: {e}")))?;

        sqlx::query("DELETE FROM gimmick_and_notes")
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::DatabaseError(format!("清空 gimmick 数据失败: {e}")))?;

        for row in rows {
            sqlx::query(
                "INSERT INTO gimmick_and_notes \
                 (song_id, chart_type, has_soflan, has_stop, has_shock_arrow, notes, freeze, shock_arrow) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(row.song_id)
            .bind(&row.chart_type)
            .bind(row.has_soflan)
            .bind(row.has_stop)
            .bind(row.has_shock_arrow)
            .bind(row.notes)
            .bind(row.freeze)
            .bind(row.shock_arrow)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::DatabaseError(format!("写入 gimmick 数据失败: {e}")))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("提交事务失败: {e}")))?;

        Ok(rows.len())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use chrono::{DateTime, Utc};
    use sqlx::sqlite::SqlitePoolOptions;

    /// 内存数据库只能用单连接，否则每个连接看到的是不同的库
    pub async fn memory_repository() -> SqliteRepository {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");
        let repository = SqliteRepository::new(pool);
        repository.init_tables().await.expect("Failed to initialize tables");
        repository
    }

    impl SqliteRepository {
        pub async fn insert_player(&self, name: &str, sp: f64, dp: f64) -> i64 {
            let now = Utc::now();
            sqlx::query(
                "INSERT INTO players (name, total_flare_skill_sp, total_flare_skill_dp, created_at, updated_at) \
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(name)
            .bind(sp)
            .bind(dp)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .expect("insert player")
            .last_insert_rowid()
        }

        pub async fn insert_score(&self, score: &PlayerScore) {
            sqlx::query(&format!(
                "INSERT INTO player_scores ({SCORE_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?)"
            ))
            .bind(score.player_id)
            .bind(score.song_id)
            .bind(&score.chart_type)
            .bind(score.score)
            .bind(&score.flare_rank)
            .bind(score.flare_skill)
            .execute(&self.pool)
            .await
            .expect("insert score");
        }

        pub async fn insert_ranking(&self, row: &RankingBaseRow) {
            sqlx::query(&format!(
                "INSERT INTO rankings ({RANKING_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?)"
            ))
            .bind(row.song_id)
            .bind(&row.category)
            .bind(&row.chart_type)
            .bind(&row.grade)
            .bind(&row.play_style)
            .bind(row.achieved_count)
            .bind(row.total_count)
            .bind(&row.flare_rank)
            .execute(&self.pool)
            .await
            .expect("insert ranking");
        }

        pub async fn insert_skill_history(&self, player_id: i64, sp: f64, dp: f64, at: DateTime<Utc>) {
            sqlx::query(
                "INSERT INTO player_skill_history (player_id, total_flare_skill_sp, total_flare_skill_dp, recorded_at) \
                 VALUES (?, ?, ?, ?)",
            )
            .bind(player_id)
            .bind(sp)
            .bind(dp)
            .bind(at)
            .execute(&self.pool)
            .await
            .expect("insert skill history");
        }
    }
}
