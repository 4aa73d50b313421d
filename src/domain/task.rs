// ==========================================
// 进口物流管理系统 - 任务与用户实体
// ==========================================

use crate::domain::types::{TaskPriority, TaskStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Task - 操作任务
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// 任务ID
    pub task_id: String,
    /// 任务描述
    pub description: String,
    /// 任务状态
    pub status: TaskStatus,
    /// 优先级
    pub priority: TaskPriority,
    /// 到期日
    #[serde(default, with = "crate::domain::dates::lenient_date")]
    pub due_date: Option<NaiveDate>,
    /// 负责人 (用户ID, 可空)
    #[serde(default)]
    pub assignee_id: Option<String>,
}

// ==========================================
// User - 用户目录条目
// ==========================================
// 仅用于预警消息中负责人姓名解析
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 用户ID
    pub user_id: String,
    /// 姓名
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_deserialize_optional_fields() {
        let raw = r#"{
            "task_id": "T001",
            "description": "补交原产地证",
            "status": "PENDING",
            "priority": "HIGH"
        }"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.due_date, None);
        assert_eq!(task.assignee_id, None);
        assert_eq!(task.priority, TaskPriority::High);
    }
}
