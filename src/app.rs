use anyhow::{Context, Result};
use cronparse_core::AppConfig;
use cronparse_domain::CronSchedule;
use serde::Serialize;
use tracing::{debug, warn};

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    /// 从字符串解析输出格式
    pub fn from_str(format: &str) -> Result<Self> {
        match format {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow::anyhow!("不支持的输出格式: {format}")),
        }
    }
}

/// 解析结果与原样透传的命令载荷
#[derive(Debug, Serialize)]
pub struct ScheduleEntry {
    #[serde(flatten)]
    pub schedule: CronSchedule,
    pub command: String,
}

/// 拆分输入参数、解析CRON表达式并按指定格式渲染结果
pub fn run(input: &str, config: &AppConfig, format: OutputFormat) -> Result<String> {
    let entry = parse_entry(input, config)?;
    render(&entry, format)
}

/// 将单个参数按空白拆分为5个CRON字段和命令
fn parse_entry(input: &str, config: &AppConfig) -> Result<ScheduleEntry> {
    let tokens: Vec<&str> = input.split_whitespace().collect();

    if tokens.len() < 6 {
        return Err(anyhow::anyhow!(
            "参数不足: 需要5个CRON字段和1个命令共6个部分, 实际收到 {} 个",
            tokens.len()
        ));
    }

    if tokens.len() > 6 {
        if config.parser.allow_extra_tokens {
            warn!("收到超过6个部分, 第6个之后的部分将并入命令");
        } else {
            return Err(anyhow::anyhow!(
                "参数过多: 需要恰好6个部分, 实际收到 {} 个",
                tokens.len()
            ));
        }
    }

    let schedule = cronparse_parser::parse(&tokens[..5]).context("CRON表达式校验失败")?;
    // 命令载荷原样透传, 不做任何解析
    let command = tokens[5..].join(" ");

    debug!("解析完成, 命令: {}", command);
    Ok(ScheduleEntry { schedule, command })
}

/// 渲染解析结果
fn render(entry: &ScheduleEntry, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut rendered =
                serde_json::to_string_pretty(entry).context("序列化解析结果失败")?;
            rendered.push('\n');
            Ok(rendered)
        }
        OutputFormat::Table => Ok(format!("{}command: {}\n", entry.schedule, entry.command)),
    }
}
