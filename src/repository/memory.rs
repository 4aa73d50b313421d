// ==========================================
// 进口物流管理系统 - 内存快照仓储
// ==========================================
// 职责: 持有一份不可变业务快照,实现全部仓储接口
// 用途: CLI 入口 (JSON 快照文件)、集成测试、演示数据
// ==========================================

use crate::domain::import_process::ImportProcess;
use crate::domain::invoice::Invoice;
use crate::domain::task::{Task, User};
use crate::repository::error::RepositoryResult;
use crate::repository::traits::{
    ImportRepository, InvoiceRepository, TaskRepository, UserDirectory,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ==========================================
// OperationalSnapshot - 业务快照
// ==========================================
// 四类集合的一次性只读快照,对应 JSON 快照文件的顶层结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperationalSnapshot {
    /// 进口流程 (含集装箱与费用明细)
    #[serde(default)]
    pub imports: Vec<ImportProcess>,
    /// 发票
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    /// 任务
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// 用户目录
    #[serde(default)]
    pub users: Vec<User>,
}

// ==========================================
// SnapshotStore - 内存快照仓储
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    snapshot: OperationalSnapshot,
}

impl SnapshotStore {
    /// 从业务快照创建
    pub fn new(snapshot: OperationalSnapshot) -> Self {
        Self { snapshot }
    }

    /// 从 JSON 快照文件加载
    ///
    /// 文件顶层结构: { "imports": [...], "invoices": [...],
    /// "tasks": [...], "users": [...] }, 各集合均可缺省。
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let snapshot: OperationalSnapshot = serde_json::from_str(&content)?;
        Ok(Self::new(snapshot))
    }

    /// 访问底层快照
    pub fn snapshot(&self) -> &OperationalSnapshot {
        &self.snapshot
    }
}

impl ImportRepository for SnapshotStore {
    fn list_imports(&self) -> RepositoryResult<Vec<ImportProcess>> {
        Ok(self.snapshot.imports.clone())
    }
}

impl InvoiceRepository for SnapshotStore {
    fn list_invoices(&self) -> RepositoryResult<Vec<Invoice>> {
        Ok(self.snapshot.invoices.clone())
    }
}

impl TaskRepository for SnapshotStore {
    fn list_tasks(&self) -> RepositoryResult<Vec<Task>> {
        Ok(self.snapshot.tasks.clone())
    }
}

impl UserDirectory for SnapshotStore {
    fn list_users(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.snapshot.users.clone())
    }
}
