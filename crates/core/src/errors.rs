use thiserror::Error;

/// CRON解析器错误类型定义
#[derive(Debug, Error)]
pub enum CronParseError {
    #[error("CRON表达式必须包含5个字段, 实际收到 {count} 个")]
    FieldCount { count: usize },

    #[error("字段 {field} 的表达式 \"{expr}\" 缺少步长值")]
    MissingStep { field: String, expr: String },

    #[error("字段 {field} 的表达式 \"{expr}\" 中的步长值 \"{step}\" 无效: 步长必须为正整数")]
    InvalidStep {
        field: String,
        expr: String,
        step: String,
    },

    #[error("字段 {field} 的范围表达式 \"{expr}\" 无效: 需要 \"起始-结束\" 形式的数字范围")]
    InvalidRange { field: String, expr: String },

    #[error("字段 {field} 的范围无效: 起始值 {start} 大于结束值 {end}")]
    InvertedRange { field: String, start: u32, end: u32 },

    #[error("字段 {field} 的数值 \"{value}\" 无效")]
    InvalidNumber { field: String, value: String },

    #[error("字段 {field} 的数值 {value} 超出合法范围 {min}-{max}")]
    OutOfRange {
        field: String,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("解析 {field} 字段失败: {source}")]
    Field {
        field: String,
        #[source]
        source: Box<CronParseError>,
    },

    #[error("配置错误: {0}")]
    Configuration(String),
}

/// 统一的Result类型
pub type Result<T> = std::result::Result<T, CronParseError>;
