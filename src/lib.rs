// ==========================================
// 进口物流管理系统 - 核心库
// ==========================================
// 技术栈: Rust + chrono + serde
// 系统定位: 进口业务风险预警 (决策支持, 人工最终控制权)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 外部协作方快照接口
pub mod repository;

// 引擎层 - 预警规则
pub mod engine;

// 配置层 - 预警阈值
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    AlertPriority, AlertType, ContainerStatus, CostStatus, InvoiceStatus, TaskPriority,
    TaskStatus, DEMURRAGE_WATCH_STATUSES,
};

// 领域实体
pub use domain::{
    AlertItem, AlertReference, Container, CostItem, ImportProcess, Invoice, Task, User,
};

// 引擎
pub use engine::AlertEngine;

// 配置
pub use config::AlertThresholds;

// API
pub use api::{AlertFeed, AlertStyle, DashboardApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "进口物流管理系统";
