use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::AppError;

/// 段位的主等级，按从低到高排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GradeTier {
    None,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Sun,
    World,
}

impl GradeTier {
    const ALL: [GradeTier; 11] = [
        GradeTier::None,
        GradeTier::Mercury,
        GradeTier::Venus,
        GradeTier::Earth,
        GradeTier::Mars,
        GradeTier::Jupiter,
        GradeTier::Saturn,
        GradeTier::Uranus,
        GradeTier::Neptune,
        GradeTier::Sun,
        GradeTier::World,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GradeTier::None => "NONE",
            GradeTier::Mercury => "MERCURY",
            GradeTier::Venus => "VENUS",
            GradeTier::Earth => "EARTH",
            GradeTier::Mars => "MARS",
            GradeTier::Jupiter => "JUPITER",
            GradeTier::Saturn => "SATURN",
            GradeTier::Uranus => "URANUS",
            GradeTier::Neptune => "NEPTUNE",
            GradeTier::Sun => "SUN",
            GradeTier::World => "WORLD",
        }
    }
}

/// 技能段位：主等级 + 后缀 `+` 的个数 (0~3)
///
/// 派生的 `Ord` 先比较主等级再比较 `+` 个数，与门槛表的顺序一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SkillGrade {
    tier: GradeTier,
    sub_tier: u8,
}

impl SkillGrade {
    pub const NONE: SkillGrade = SkillGrade::new(GradeTier::None, 0);
    pub const URANUS: SkillGrade = SkillGrade::new(GradeTier::Uranus, 0);
    #[cfg(test)]
    pub const WORLD: SkillGrade = SkillGrade::new(GradeTier::World, 0);

    const fn new(tier: GradeTier, sub_tier: u8) -> Self {
        Self { tier, sub_tier }
    }
}

const fn g(tier: GradeTier, sub_tier: u8) -> SkillGrade {
    SkillGrade::new(tier, sub_tier)
}

/// 段位门槛表 (含下限)，从高到低
const GRADE_THRESHOLDS: [(SkillGrade, f64); 41] = [
    (g(GradeTier::World, 0), 90000.0),
    (g(GradeTier::Sun, 3), 86250.0),
    (g(GradeTier::Sun, 2), 82500.0),
    (g(GradeTier::Sun, 1), 78750.0),
    (g(GradeTier::Sun, 0), 75000.0),
    (g(GradeTier::Neptune, 3), 71250.0),
    (g(GradeTier::Neptune, 2), 67500.0),
    (g(GradeTier::Neptune, 1), 63750.0),
    (g(GradeTier::Neptune, 0), 60000.0),
    (g(GradeTier::Uranus, 3), 56250.0),
    (g(GradeTier::Uranus, 2), 52500.0),
    (g(GradeTier::Uranus, 1), 48750.0),
    (g(GradeTier::Uranus, 0), 45000.0),
    (g(GradeTier::Saturn, 3), 42250.0),
    (g(GradeTier::Saturn, 2), 39500.0),
    (g(GradeTier::Saturn, 1), 36750.0),
    (g(GradeTier::Saturn, 0), 34000.0),
    (g(GradeTier::Jupiter, 3), 31500.0),
    (g(GradeTier::Jupiter, 2), 29000.0),
    (g(GradeTier::Jupiter, 1), 26500.0),
    (g(GradeTier::Jupiter, 0), 24000.0),
    (g(GradeTier::Mars, 3), 22000.0),
    (g(GradeTier::Mars, 2), 20000.0),
    (g(GradeTier::Mars, 1), 18000.0),
    (g(GradeTier::Mars, 0), 16000.0),
    (g(GradeTier::Earth, 3), 14500.0),
    (g(GradeTier::Earth, 2), 13000.0),
    (g(GradeTier::Earth, 1), 11500.0),
    (g(GradeTier::Earth, 0), 10000.0),
    (g(GradeTier::Venus, 3), 9000.0),
    (g(GradeTier::Venus, 2), 8000.0),
    (g(GradeTier::Venus, 1), 7000.0),
    (g(GradeTier::Venus, 0), 6000.0),
    (g(GradeTier::Mercury, 3), 5000.0),
    (g(GradeTier::Mercury, 2), 4000.0),
    (g(GradeTier::Mercury, 1), 3000.0),
    (g(GradeTier::Mercury, 0), 2000.0),
    (g(GradeTier::None, 3), 1500.0),
    (g(GradeTier::None, 2), 1000.0),
    (g(GradeTier::None, 1), 500.0),
    (g(GradeTier::None, 0), 0.0),
];

/// 根据总技能点数计算段位
///
/// 返回第一个门槛不高于 `total_flare_skill` 的段位；负数或 NaN 落到 NONE。
pub fn calculate_grade(total_flare_skill: f64) -> SkillGrade {
    GRADE_THRESHOLDS
        .iter()
        .find(|(_, min)| total_flare_skill >= *min)
        .map_or(SkillGrade::NONE, |(grade, _)| *grade)
}

impl fmt::Display for SkillGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tier.as_str())?;
        for _ in 0..self.sub_tier {
            f.write_str("+")?;
        }
        Ok(())
    }
}

impl FromStr for SkillGrade {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let name = upper.trim_end_matches('+');
        let sub_tier = upper.len() - name.len();

        let candidate = GradeTier::ALL
            .iter()
            .find(|tier| tier.as_str() == name)
            .and_then(|tier| u8::try_from(sub_tier).ok().map(|sub| g(*tier, sub)));

        match candidate {
            Some(grade) if GRADE_THRESHOLDS.iter().any(|(known, _)| *known == grade) => Ok(grade),
            _ => Err(AppError::InvalidGrade(s.to_string())),
        }
    }
}

impl Serialize for SkillGrade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SkillGrade {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
