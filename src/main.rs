use anyhow::{Context, Result};
use clap::{Arg, Command};
use cronparse_core::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

use app::OutputFormat;

fn main() -> Result<()> {
    // 解析命令行参数
    let matches = Command::new("cronparse")
        .version("1.0.0")
        .about("CRON表达式解析与校验工具")
        .arg(
            Arg::new("expression")
                .value_name("EXPRESSION")
                .help("完整的CRON表达式与命令, 置于同一个参数内(5个字段 + 命令)")
                .required(true),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("配置文件路径"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FORMAT")
                .help("输出格式")
                .value_parser(["table", "json"]),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .help("日志级别")
                .value_parser(["trace", "debug", "info", "warn", "error"]),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .value_name("FORMAT")
                .help("日志格式")
                .value_parser(["json", "pretty"]),
        )
        .get_matches();

    // 加载配置, 命令行参数覆盖配置文件与环境变量
    let config_path = matches.get_one::<String>("config");
    let mut config = AppConfig::load(config_path.map(String::as_str))
        .context("加载配置失败")?;

    if let Some(level) = matches.get_one::<String>("log-level") {
        config.observability.log_level = level.clone();
    }
    if let Some(format) = matches.get_one::<String>("log-format") {
        config.observability.log_format = format.clone();
    }
    if let Some(format) = matches.get_one::<String>("output") {
        config.output.format = format.clone();
    }
    config.validate().context("配置校验失败")?;

    // 初始化日志系统
    init_logging(
        &config.observability.log_level,
        &config.observability.log_format,
    )?;

    let expression = matches.get_one::<String>("expression").unwrap();
    let format = OutputFormat::from_str(&config.output.format)?;

    let output = app::run(expression, &config, format)?;
    print!("{output}");

    Ok(())
}

/// 初始化日志系统
///
/// 解析结果占用stdout, 日志一律写入stderr。
fn init_logging(log_level: &str, log_format: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    match log_format {
        "json" => {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .try_init()
                .context("初始化JSON日志格式失败")?;
        }
        "pretty" => {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_writer(std::io::stderr),
                )
                .try_init()
                .context("初始化Pretty日志格式失败")?;
        }
        _ => {
            return Err(anyhow::anyhow!("不支持的日志格式: {log_format}"));
        }
    }

    Ok(())
}
