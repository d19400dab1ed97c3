use std::collections::HashMap;

use crate::models::{
    Category, ChartType, NominatedRanking, PlayStyle, PlayerScore, RankingBaseRow, RankingPage,
    RankingSong, RankingSongsSpDp, RecommendedSong, Song, StyleMatrix,
};
use crate::utils::ddr_definition::{convert_to_display_flare_rank, get_level_from_chart_type};
use crate::utils::grade::SkillGrade;

pub const RANKING_PAGE_SIZE: usize = 50;
/// 关注榜只收录 URANUS 及以上的段位
pub const NOMINATED_GRADE_FLOOR: SkillGrade = SkillGrade::URANUS;
pub const NOMINATED_PERCENTAGE_FLOOR: f64 = 15.0;
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 1568;

/// 计算指定段位的谱面达成率排行
///
/// 按行上记录的 (游玩方式, 分类) 分组，组内按达成率降序稳定排序，再按 50 条一页分页。
/// `total_count` 是分页前的组大小；超出范围的页返回空列表。
pub fn rank_songs(
    rows: &[RankingBaseRow],
    songs: &HashMap<i64, Song>,
    grade: &str,
    page: i64,
) -> RankingSongsSpDp {
    let mut grouped: StyleMatrix<Vec<RankingSong>> = StyleMatrix::default();

    for row in rows.iter().filter(|r| r.grade.eq_ignore_ascii_case(grade)) {
        let play_style = PlayStyle::from_label(&row.play_style).unwrap_or_else(|| {
            log::warn!("无效的游玩方式: {}，按 SP 处理", row.play_style);
            PlayStyle::Sp
        });
        let category = Category::from_label(&row.category).unwrap_or_else(|| {
            log::warn!("无效的分类: {}，按 CLASSIC 处理", row.category);
            Category::Classic
        });

        grouped.cell_mut(play_style, category).push(to_ranking_song(row, songs));
    }

    let offset = (page.max(1) as usize - 1).saturating_mul(RANKING_PAGE_SIZE);
    grouped.map(|mut entries| {
        // sort_by 是稳定排序，同达成率保持输入顺序
        entries.sort_by(|a, b| b.overall_percentage.total_cmp(&a.overall_percentage));
        let total_count = entries.len();
        let entries = entries.into_iter().skip(offset).take(RANKING_PAGE_SIZE).collect();
        RankingPage { entries, total_count }
    })
}

fn to_ranking_song(row: &RankingBaseRow, songs: &HashMap<i64, Song>) -> RankingSong {
    let (title, level) = match songs.get(&row.song_id) {
        Some(song) => (song.title.clone(), get_level_from_chart_type(song, &row.chart_type)),
        None => {
            log::warn!("排行数据引用了不存在的歌曲: song_id={}", row.song_id);
            (String::new(), 0)
        }
    };

    RankingSong {
        song_id: row.song_id,
        title,
        level,
        chart_type: row.chart_type.to_uppercase(),
        flare_rank: convert_to_display_flare_rank(&row.flare_rank).to_string(),
        overall_percentage: row.achieved_percentage(),
    }
}

/// 指定谱面上达成率不低于 15% 的高段位记录，保持输入顺序
pub fn nominated_rankings(
    rows: &[RankingBaseRow],
    song_id: i64,
    chart_type: ChartType,
) -> Vec<NominatedRanking> {
    rows.iter()
        .filter(|row| row.song_id == song_id)
        .filter(|row| row.chart_type.parse::<ChartType>().ok() == Some(chart_type))
        .filter_map(|row| {
            let grade = row.grade.parse::<SkillGrade>().ok()?;
            let percentage = row.achieved_percentage();
            (grade >= NOMINATED_GRADE_FLOOR && percentage >= NOMINATED_PERCENTAGE_FLOOR).then(|| {
                NominatedRanking {
                    grade: grade.to_string(),
                    flare_rank: convert_to_display_flare_rank(&row.flare_rank).to_string(),
                    overall_percentage: percentage,
                }
            })
        })
        .collect()
}

/// 统计目标玩家群体的其他技能对象谱面
///
/// 按 (歌曲, 谱面类型, Flare Rank) 计数，百分比相对于目标玩家总数，按人数降序 (稳定) 截取前 `limit` 条。
pub fn recommend_songs(
    target_player_count: usize,
    other_scores: &[PlayerScore],
    songs: &HashMap<i64, Song>,
    limit: usize,
) -> Vec<RecommendedSong> {
    if target_player_count == 0 {
        return Vec::new();
    }

    let mut index_by_key: HashMap<(i64, &str, &str), usize> = HashMap::new();
    let mut groups: Vec<RecommendedSong> = Vec::new();

    for score in other_scores {
        let key = (score.song_id, score.chart_type.as_str(), score.flare_rank.as_str());
        let index = *index_by_key.entry(key).or_insert_with(|| {
            let (title, level) = songs
                .get(&score.song_id)
                .map(|song| (song.title.clone(), get_level_from_chart_type(song, &score.chart_type)))
                .unwrap_or_default();
            groups.push(RecommendedSong {
                song_id: score.song_id,
                title,
                level,
                chart_type: score.chart_type.clone(),
                flare_rank: convert_to_display_flare_rank(&score.flare_rank).to_string(),
                count: 0,
                percentage: 0.0,
            });
            groups.len() - 1
        });
        groups[index].count += 1;
    }

    for group in &mut groups {
        group.percentage = group.count as f64 / target_player_count as f64 * 100.0;
    }

    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups.truncate(limit);
    groups
}
