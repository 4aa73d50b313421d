// ==========================================
// 进口物流管理系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、预警输出结构
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod alert;
pub mod dates;
pub mod import_process;
pub mod invoice;
pub mod task;
pub mod types;

// 重导出核心类型
pub use alert::{AlertItem, AlertReference};
pub use import_process::{Container, CostItem, ImportProcess};
pub use invoice::Invoice;
pub use task::{Task, User};
pub use types::{
    AlertPriority, AlertType, ContainerStatus, CostStatus, InvoiceStatus, TaskPriority,
    TaskStatus, DEMURRAGE_WATCH_STATUSES,
};
