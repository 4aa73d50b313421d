// ==========================================
// 进口物流管理系统 - 仓储接口定义
// ==========================================
// 进口流程/发票/任务/用户的存储由外部协作方持有,
// 本层只约定快照读取接口。返回值为拷贝快照,
// 引擎计算期间不受并发写入影响。
// ==========================================

use crate::domain::import_process::ImportProcess;
use crate::domain::invoice::Invoice;
use crate::domain::task::{Task, User};
use crate::repository::error::RepositoryResult;

/// 进口流程仓储 (含嵌套的集装箱与费用明细)
pub trait ImportRepository: Send + Sync {
    /// 读取全部进口流程快照
    fn list_imports(&self) -> RepositoryResult<Vec<ImportProcess>>;
}

/// 发票仓储
pub trait InvoiceRepository: Send + Sync {
    /// 读取全部发票快照
    fn list_invoices(&self) -> RepositoryResult<Vec<Invoice>>;
}

/// 任务仓储
pub trait TaskRepository: Send + Sync {
    /// 读取全部任务快照
    fn list_tasks(&self) -> RepositoryResult<Vec<Task>>;
}

/// 用户目录 (仅用于负责人姓名解析)
pub trait UserDirectory: Send + Sync {
    /// 读取全部用户快照
    fn list_users(&self) -> RepositoryResult<Vec<User>>;
}
