use std::fmt;

use serde::{Deserialize, Serialize};

/// CRON表达式的五个字段标识
///
/// 封闭枚举, `ALL` 中的顺序与字段在表达式中的位置一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CronField {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl CronField {
    /// 按表达式位置排列的全部字段
    pub const ALL: [CronField; 5] = [
        CronField::Minute,
        CronField::Hour,
        CronField::DayOfMonth,
        CronField::Month,
        CronField::DayOfWeek,
    ];

    /// 字段的规范名称
    pub fn name(&self) -> &'static str {
        match self {
            CronField::Minute => "minute",
            CronField::Hour => "hour",
            CronField::DayOfMonth => "dayOfMonth",
            CronField::Month => "month",
            CronField::DayOfWeek => "dayOfWeek",
        }
    }

    /// 字段的合法取值范围
    pub fn range(&self) -> FieldRange {
        match self {
            CronField::Minute => FieldRange::new(0, 59),
            CronField::Hour => FieldRange::new(0, 23),
            CronField::DayOfMonth => FieldRange::new(1, 31),
            CronField::Month => FieldRange::new(1, 12),
            CronField::DayOfWeek => FieldRange::new(1, 7),
        }
    }
}

impl fmt::Display for CronField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 字段的合法取值范围 [min, max], 范围表在编译期固定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRange {
    pub min: u32,
    pub max: u32,
}

impl FieldRange {
    /// 创建取值范围, 要求 min <= max
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// 检查数值是否落在范围内
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}
