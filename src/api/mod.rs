// ==========================================
// 进口物流管理系统 - API 层
// ==========================================
// 职责: 聚合仓储快照与预警引擎,供展示层调用
// ==========================================

pub mod dashboard_api;
pub mod error;

// 重导出核心类型
pub use dashboard_api::{AlertFeed, AlertStyle, DashboardApi};
pub use error::{ApiError, ApiResult};
