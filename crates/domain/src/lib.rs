//! CRON表达式的领域模型
//!
//! 定义字段标识、编译期固定的合法范围表和解析结果模型。

pub mod fields;
pub mod schedule;

pub use fields::{CronField, FieldRange};
pub use schedule::CronSchedule;
