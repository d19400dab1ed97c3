use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::utils::error::AppError;

/// 谱面类型 (难度 × 游玩方式)
///
/// 序列化为大写代号，例如 `BESP`、`CDP`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChartType {
    Besp,
    Bsp,
    Dsp,
    Esp,
    Csp,
    Bdp,
    Ddp,
    Edp,
    Cdp,
}

impl ChartType {
    pub const ALL: [ChartType; 9] = [
        ChartType::Besp,
        ChartType::Bsp,
        ChartType::Dsp,
        ChartType::Esp,
        ChartType::Csp,
        ChartType::Bdp,
        ChartType::Ddp,
        ChartType::Edp,
        ChartType::Cdp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Besp => "BESP",
            ChartType::Bsp => "BSP",
            ChartType::Dsp => "DSP",
            ChartType::Esp => "ESP",
            ChartType::Csp => "CSP",
            ChartType::Bdp => "BDP",
            ChartType::Ddp => "DDP",
            ChartType::Edp => "EDP",
            ChartType::Cdp => "CDP",
        }
    }

    pub fn play_style(&self) -> PlayStyle {
        match self {
            ChartType::Besp | ChartType::Bsp | ChartType::Dsp | ChartType::Esp | ChartType::Csp => {
                PlayStyle::Sp
            }
            ChartType::Bdp | ChartType::Ddp | ChartType::Edp | ChartType::Cdp => PlayStyle::Dp,
        }
    }

    /// 难度首字母，gimmick 数据按它而不是完整谱面类型存储
    pub fn difficulty_initial(&self) -> &'static str {
        &self.as_str()[..1]
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        ChartType::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == upper)
            .ok_or_else(|| AppError::InvalidChartType(s.to_string()))
    }
}

/// 游玩方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlayStyle {
    Sp,
    Dp,
}

impl PlayStyle {
    /// 未知的谱面类型代号按后缀判断，`…DP` 为 DP，其余都视为 SP
    pub fn from_chart_type(chart_type: &str) -> Self {
        match chart_type.parse::<ChartType>() {
            Ok(chart_type) => chart_type.play_style(),
            Err(_) if chart_type.trim().to_ascii_uppercase().ends_with("DP") => PlayStyle::Dp,
            Err(_) => PlayStyle::Sp,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "SP" => Some(PlayStyle::Sp),
            "DP" => Some(PlayStyle::Dp),
            _ => None,
        }
    }
}

/// 版本分类 (时代)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Classic,
    White,
    Gold,
}

impl Category {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "CLASSIC" => Some(Category::Classic),
            "WHITE" => Some(Category::White),
            "GOLD" => Some(Category::Gold),
            _ => None,
        }
    }
}

/// 按分类分组的容器，序列化为 `{"CLASSIC": .., "WHITE": .., "GOLD": ..}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryBuckets<T> {
    #[serde(rename = "CLASSIC")]
    pub classic: T,
    #[serde(rename = "WHITE")]
    pub white: T,
    #[serde(rename = "GOLD")]
    pub gold: T,
}

impl<T> CategoryBuckets<T> {
    #[cfg(test)]
    pub fn get(&self, category: Category) -> &T {
        match category {
            Category::Classic => &self.classic,
            Category::White => &self.white,
            Category::Gold => &self.gold,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut T {
        match category {
            Category::Classic => &mut self.classic,
            Category::White => &mut self.white,
            Category::Gold => &mut self.gold,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> CategoryBuckets<U> {
        CategoryBuckets {
            classic: f(self.classic),
            white: f(self.white),
            gold: f(self.gold),
        }
    }
}

/// 游玩方式 × 分类 的二维矩阵，序列化为 `{"SP": {...}, "DP": {...}}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleMatrix<T> {
    #[serde(rename = "SP")]
    pub sp: CategoryBuckets<T>,
    #[serde(rename = "DP")]
    pub dp: CategoryBuckets<T>,
}

impl<T> StyleMatrix<T> {
    #[cfg(test)]
    pub fn cell(&self, style: PlayStyle, category: Category) -> &T {
        match style {
            PlayStyle::Sp => self.sp.get(category),
            PlayStyle::Dp => self.dp.get(category),
        }
    }

    pub fn cell_mut(&mut self, style: PlayStyle, category: Category) -> &mut T {
        match style {
            PlayStyle::Sp => self.sp.get_mut(category),
            PlayStyle::Dp => self.dp.get_mut(category),
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> StyleMatrix<U> {
        StyleMatrix {
            sp: self.sp.map(&mut f),
            dp: self.dp.map(&mut f),
        }
    }

    /// 按 SP→DP、CLASSIC→WHITE→GOLD 的顺序遍历所有单元格
    pub fn cells(&self) -> impl Iterator<Item = &T> {
        [
            &self.sp.classic,
            &self.sp.white,
            &self.sp.gold,
            &self.dp.classic,
            &self.dp.white,
            &self.dp.gold,
        ]
        .into_iter()
    }
}
