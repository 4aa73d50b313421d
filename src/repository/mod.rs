// ==========================================
// 进口物流管理系统 - 数据仓储层
// ==========================================
// 职责: 定义外部协作方快照读取接口
// 红线: 预警引擎不直接访问本层,快照由 API 层拉取
// ==========================================

pub mod error;
pub mod memory;
pub mod traits;

// 重导出核心类型
pub use error::{RepositoryError, RepositoryResult};
pub use memory::{OperationalSnapshot, SnapshotStore};
pub use traits::{ImportRepository, InvoiceRepository, TaskRepository, UserDirectory};
