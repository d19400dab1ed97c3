use crate::models::{HistogramBucket, ScoreDistribution};

pub const THEORETICAL_MAX_SCORE: i64 = 1_000_000;
pub const DEFAULT_SCORE_INTERVAL: i64 = 2000;

/// 计算分数分布直方图
///
/// 区间下限从最低分开始按 `interval` 递增，不超过最高分；若最后一个下限不等于最高分，
/// 则补上最高分作为最后一个下限。每个区间为 `[下限, 下一个下限)`，
/// 只有最后一个区间的上界是 `最高分 + 1`，保证最高分被计入。
/// 超出 `[0, theoretical_max]` 的分数先截断再计数，因此每个分数恰好计入一次。
pub fn calculate_distribution(scores: &[i64], interval: i64, theoretical_max: i64) -> ScoreDistribution {
    let (Some(&lowest), Some(&highest)) = (scores.iter().min(), scores.iter().max()) else {
        return ScoreDistribution::default();
    };

    let interval = if interval > 0 { interval } else { DEFAULT_SCORE_INTERVAL };
    let max_score = highest.min(theoretical_max).max(0);
    let min_score = lowest.max(0).min(max_score);

    let mut bounds: Vec<i64> = (min_score..=max_score).step_by(interval as usize).collect();
    if bounds.last() != Some(&max_score) {
        bounds.push(max_score);
    }

    let mut counts = vec![0usize; bounds.len()];
    for &score in scores {
        let clamped = score.clamp(min_score, max_score);
        // bounds[0] == min_score <= clamped，所以 partition_point 至少为 1
        let index = bounds.partition_point(|&bound| bound <= clamped) - 1;
        counts[index] += 1;
    }

    log::debug!(
        "分数分布: {} 个分数, 区间 [{min_score}, {max_score}], {} 个桶",
        scores.len(),
        bounds.len()
    );

    ScoreDistribution {
        min_score,
        max_score,
        distribution: bounds
            .into_iter()
            .zip(counts)
            .map(|(score_lower_bound, count)| HistogramBucket { score_lower_bound, count })
            .collect(),
    }
}
