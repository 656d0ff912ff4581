use cronparse_core::{CronParseError, Result};
use cronparse_domain::CronField;
use tracing::debug;

/// 字段表达式的语法形式
///
/// 分类按固定优先级检查语法标记: 逗号(列表) > 斜杠(步长) >
/// 连字符(范围) > 星号(通配) > 单值。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionKind {
    List,
    Step,
    Range,
    Wildcard,
    Single,
}

impl ExpressionKind {
    /// 根据语法标记对表达式分类
    pub fn classify(expression: &str) -> Self {
        if expression.contains(',') {
            ExpressionKind::List
        } else if expression.contains('/') {
            ExpressionKind::Step
        } else if expression.contains('-') {
            ExpressionKind::Range
        } else if expression.contains('*') {
            ExpressionKind::Wildcard
        } else {
            ExpressionKind::Single
        }
    }
}

/// 求值字段表达式, 返回升序去重后的取值集合
///
/// 支持单值 "5"、列表 "1,3,5"、范围 "1-5"、步长 "0-10/2" 或 "3/4"、
/// 通配 "*", 各形式可递归组合(如列表元素本身是范围或步长表达式)。
/// 任何不合法的输入返回 [`CronParseError`], 不产生部分结果。
pub fn evaluate(field: CronField, expression: &str) -> Result<Vec<u32>> {
    let mut values = expand(field, expression)?;
    values.sort_unstable();
    values.dedup();
    debug!(
        "字段 {} 的表达式 \"{}\" 展开为 {} 个值",
        field,
        expression,
        values.len()
    );
    Ok(values)
}

/// 递归展开表达式, 重复值在 [`evaluate`] 顶层统一去重
fn expand(field: CronField, expression: &str) -> Result<Vec<u32>> {
    match ExpressionKind::classify(expression) {
        ExpressionKind::List => expand_list(field, expression),
        ExpressionKind::Step => expand_step(field, expression),
        ExpressionKind::Range => expand_range(field, expression),
        ExpressionKind::Wildcard => expand_wildcard(field, expression),
        ExpressionKind::Single => expand_single(field, expression),
    }
}

fn expand_list(field: CronField, expression: &str) -> Result<Vec<u32>> {
    let mut values = Vec::new();
    for part in expression.split(',') {
        values.extend(expand(field, part.trim())?);
    }
    Ok(values)
}

fn expand_step(field: CronField, expression: &str) -> Result<Vec<u32>> {
    let (base, step_text) = expression.split_once('/').unwrap_or((expression, ""));

    if step_text.is_empty() {
        return Err(CronParseError::MissingStep {
            field: field.name().to_string(),
            expr: expression.to_string(),
        });
    }

    let step = match step_text.parse::<u32>() {
        Ok(step) if step > 0 => step,
        _ => {
            return Err(CronParseError::InvalidStep {
                field: field.name().to_string(),
                expr: expression.to_string(),
                step: step_text.to_string(),
            });
        }
    };

    // 裸数字基值视为隐式范围: 从该值到字段最大值
    let base_expression = if !base.contains('-') && base.parse::<u32>().is_ok() {
        format!("{}-{}", base, field.range().max)
    } else {
        base.to_string()
    };

    let candidates = expand(field, &base_expression)?;
    Ok(stepped_values(&candidates, step))
}

/// 从候选集合的首元素开始按步长累加, 直到超过候选集合的最大值
fn stepped_values(candidates: &[u32], step: u32) -> Vec<u32> {
    let Some(&first) = candidates.first() else {
        return Vec::new();
    };
    let max = candidates.iter().copied().max().unwrap_or(first);

    let mut values = Vec::new();
    let mut current = first;
    while current <= max {
        values.push(current);
        current += step;
    }
    values
}

fn expand_range(field: CronField, expression: &str) -> Result<Vec<u32>> {
    let parts: Vec<&str> = expression.split('-').collect();
    if parts.len() != 2 {
        return Err(CronParseError::InvalidRange {
            field: field.name().to_string(),
            expr: expression.to_string(),
        });
    }

    let (start, end) = match (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
        (Ok(start), Ok(end)) => (start, end),
        _ => {
            return Err(CronParseError::InvalidRange {
                field: field.name().to_string(),
                expr: expression.to_string(),
            });
        }
    };

    if end < start {
        return Err(CronParseError::InvertedRange {
            field: field.name().to_string(),
            start,
            end,
        });
    }

    // 与字段合法范围求交集, 越界部分被截断
    let range = field.range();
    let lo = start.max(range.min);
    let hi = end.min(range.max);
    Ok((lo..=hi).collect())
}

fn expand_wildcard(field: CronField, expression: &str) -> Result<Vec<u32>> {
    let range = field.range();
    // 仅替换第一个星号; 星号之外残留的字符会在递归解析中被拒绝
    let rewritten = expression.replacen('*', &format!("{}-{}", range.min, range.max), 1);
    expand(field, &rewritten)
}

fn expand_single(field: CronField, expression: &str) -> Result<Vec<u32>> {
    let value = expression
        .parse::<u32>()
        .map_err(|_| CronParseError::InvalidNumber {
            field: field.name().to_string(),
            value: expression.to_string(),
        })?;

    let range = field.range();
    if !range.contains(value) {
        return Err(CronParseError::OutOfRange {
            field: field.name().to_string(),
            value,
            min: range.min,
            max: range.max,
        });
    }

    Ok(vec![value])
}
