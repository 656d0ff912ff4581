use std::path::Path;

use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 解析行为配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// 超过6个部分时, 是否将第6个之后的部分并入命令
    pub allow_extra_tokens: bool,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 输出格式: table 或 json
    pub format: String,
}

/// 可观测性配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub log_format: String,
}

/// 系统配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub parser: ParserConfig,
    pub output: OutputConfig,
    pub observability: ObservabilityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig {
                allow_extra_tokens: true,
            },
            output: OutputConfig {
                format: "table".to_string(),
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
                log_format: "pretty".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序:
    /// 1. 默认配置
    /// 2. 配置文件 (TOML格式)
    /// 3. 环境变量覆盖 (前缀: CRONPARSE_)
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder = ConfigBuilder::builder();

        if let Some(path) = config_path {
            if Path::new(path).exists() {
                builder = builder.add_source(File::new(path, FileFormat::Toml));
            } else {
                return Err(anyhow::anyhow!("配置文件不存在: {}", path));
            }
        } else {
            // 尝试默认配置文件路径
            let default_paths = [
                "config/cronparse.toml",
                "cronparse.toml",
                "/etc/cronparse/config.toml",
            ];

            let mut config_file_found = false;
            for path in &default_paths {
                if Path::new(path).exists() {
                    builder = builder.add_source(File::new(path, FileFormat::Toml));
                    config_file_found = true;
                    break;
                }
            }

            if !config_file_found {
                builder = builder
                    .set_default("parser.allow_extra_tokens", true)?
                    .set_default("output.format", "table")?
                    .set_default("observability.log_level", "info")?
                    .set_default("observability.log_format", "pretty")?;
            }
        }

        // 环境变量覆盖, 优先级最高
        builder = builder.add_source(
            Environment::with_prefix("CRONPARSE")
                .separator("_")
                .try_parsing(true),
        );

        let config: AppConfig = builder
            .build()
            .context("构建配置失败")?
            .try_deserialize()
            .context("反序列化配置失败")?;

        config.validate()?;

        debug!("配置加载完成: {:?}", config);
        Ok(config)
    }

    /// 从TOML字符串加载配置
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(toml_str).context("解析TOML配置失败")?;

        config.validate()?;
        Ok(config)
    }

    /// 将配置序列化为TOML字符串
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("序列化配置为TOML失败")
    }

    /// 校验配置有效性
    pub fn validate(&self) -> Result<()> {
        const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(anyhow::anyhow!(
                "不支持的日志级别: {}",
                self.observability.log_level
            ));
        }

        if !["pretty", "json"].contains(&self.observability.log_format.as_str()) {
            return Err(anyhow::anyhow!(
                "不支持的日志格式: {}",
                self.observability.log_format
            ));
        }

        if !["table", "json"].contains(&self.output.format.as_str()) {
            return Err(anyhow::anyhow!("不支持的输出格式: {}", self.output.format));
        }

        Ok(())
    }
}
