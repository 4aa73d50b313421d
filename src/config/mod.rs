// ==========================================
// 进口物流管理系统 - 配置层
// ==========================================
// 职责: 预警阈值管理
// 红线: 阈值作为显式参数注入引擎,引擎本身无状态
// ==========================================
// 口径说明: 滞港风险窗口统一采用预警侧口径 10 天;
// 原系统滞港管控页另用 40 天口径,属独立页面范畴,
// 不在本引擎内合并。
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

// ==========================================
// 默认阈值
// ==========================================

/// 滞港风险窗口天数 (距计费起始日 <= 该值才进入预警)
pub const DEFAULT_DEMURRAGE_WINDOW_DAYS: i64 = 10;

/// 滞港高优先级天数 (距计费起始日 <= 该值升为 HIGH)
pub const DEFAULT_DEMURRAGE_HIGH_DAYS: i64 = 3;

/// 付款临期窗口天数 (距到期日 <= 该值产生 MEDIUM 预警)
pub const DEFAULT_PAYMENT_DUE_SOON_DAYS: i64 = 7;

// ==========================================
// 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置文件解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("配置项非法 (field={field}): {message}")]
    InvalidField { field: String, message: String },
}

// ==========================================
// AlertThresholds - 预警阈值
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    /// 滞港风险窗口天数
    pub demurrage_window_days: i64,
    /// 滞港高优先级天数
    pub demurrage_high_days: i64,
    /// 付款临期窗口天数
    pub payment_due_soon_days: i64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            demurrage_window_days: DEFAULT_DEMURRAGE_WINDOW_DAYS,
            demurrage_high_days: DEFAULT_DEMURRAGE_HIGH_DAYS,
            payment_due_soon_days: DEFAULT_PAYMENT_DUE_SOON_DAYS,
        }
    }
}

impl AlertThresholds {
    /// 从 JSON 配置文件加载并校验
    ///
    /// 缺失字段回落到默认值;非法取值显式报错,不静默纠正。
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let thresholds: AlertThresholds = serde_json::from_str(&content)?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// 逐字段校验
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.demurrage_window_days < 0 {
            return Err(ConfigError::InvalidField {
                field: "demurrage_window_days".to_string(),
                message: format!("必须为非负数, 实际={}", self.demurrage_window_days),
            });
        }
        if self.demurrage_high_days < 0 {
            return Err(ConfigError::InvalidField {
                field: "demurrage_high_days".to_string(),
                message: format!("必须为非负数, 实际={}", self.demurrage_high_days),
            });
        }
        if self.payment_due_soon_days < 0 {
            return Err(ConfigError::InvalidField {
                field: "payment_due_soon_days".to_string(),
                message: format!("必须为非负数, 实际={}", self.payment_due_soon_days),
            });
        }
        if self.demurrage_high_days > self.demurrage_window_days {
            return Err(ConfigError::InvalidField {
                field: "demurrage_high_days".to_string(),
                message: format!(
                    "高优先级天数不得大于窗口天数 ({} > {})",
                    self.demurrage_high_days, self.demurrage_window_days
                ),
            });
        }
        Ok(())
    }
}
