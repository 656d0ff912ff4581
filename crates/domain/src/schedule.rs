use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fields::CronField;

/// 解析后的CRON调度结果
///
/// 每个字段保存展开后取值集合的规范字符串: 升序、去重、逗号分隔。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CronSchedule {
    pub minute: String,
    pub hour: String,
    pub day_of_month: String,
    pub month: String,
    pub day_of_week: String,
}

impl CronSchedule {
    /// 由五个已展开的字段字符串构造调度结果
    pub fn new(
        minute: String,
        hour: String,
        day_of_month: String,
        month: String,
        day_of_week: String,
    ) -> Self {
        Self {
            minute,
            hour,
            day_of_month,
            month,
            day_of_week,
        }
    }

    /// 获取指定字段的展开结果
    pub fn field(&self, field: CronField) -> &str {
        match field {
            CronField::Minute => &self.minute,
            CronField::Hour => &self.hour,
            CronField::DayOfMonth => &self.day_of_month,
            CronField::Month => &self.month,
            CronField::DayOfWeek => &self.day_of_week,
        }
    }
}

impl fmt::Display for CronSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in CronField::ALL {
            writeln!(f, "{}: {}", field, self.field(field))?;
        }
        Ok(())
    }
}
