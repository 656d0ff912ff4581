use cronparse_core::{CronParseError, Result};
use cronparse_domain::{CronField, CronSchedule};
use tracing::debug;

use crate::evaluator::evaluate;

/// 解析五个字段表达式, 组装为完整的调度结果
///
/// 按 minute → hour → dayOfMonth → month → dayOfWeek 的固定顺序逐个
/// 求值; 任一字段失败立即返回并标注失败字段(快速失败, 不产生部分结果)。
/// 命令载荷不属于本组件, 由调用方自行携带。
pub fn parse(fields: &[&str]) -> Result<CronSchedule> {
    if fields.len() != 5 {
        return Err(CronParseError::FieldCount {
            count: fields.len(),
        });
    }

    debug!("解析CRON表达式字段: {:?}", fields);

    let schedule = CronSchedule::new(
        expand_field(CronField::Minute, fields[0])?,
        expand_field(CronField::Hour, fields[1])?,
        expand_field(CronField::DayOfMonth, fields[2])?,
        expand_field(CronField::Month, fields[3])?,
        expand_field(CronField::DayOfWeek, fields[4])?,
    );

    Ok(schedule)
}

/// 求值单个字段并渲染为规范的逗号分隔字符串
fn expand_field(field: CronField, expression: &str) -> Result<String> {
    let values = evaluate(field, expression).map_err(|source| CronParseError::Field {
        field: field.name().to_string(),
        source: Box::new(source),
    })?;

    Ok(values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(","))
}
