// ==========================================
// 进口物流管理系统 - 领域类型定义
// ==========================================
// 红线: 所有状态词汇表为封闭集合 (tagged enum),
//       滞港风险适用状态以显式常量定义,不从命名推断
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 集装箱状态 (Container Status)
// ==========================================
// 统一堆场状态与海港子状态为单一封闭枚举
// 序列化格式: SCREAMING_SNAKE_CASE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerStatus {
    OnVessel,          // 在船
    AtPort,            // 到港
    AwaitingDischarge, // 海港: 待卸船
    Discharging,       // 海港: 卸船中
    Discharged,        // 海港: 已卸船
    AwaitingPickup,    // 海港: 待提柜
    CustomsCleared,    // 已清关
    InTransit,         // 运输中
    Delivered,         // 已交付
    SentToDepot,       // 已还箱
}

/// 滞港风险监控状态集合
///
/// 仍在港口/待后续流转的状态,纳入滞港费风险评估。
/// 窗口阈值见 `config::AlertThresholds::demurrage_window_days` (默认10天)。
pub const DEMURRAGE_WATCH_STATUSES: &[ContainerStatus] = &[
    ContainerStatus::AtPort,
    ContainerStatus::AwaitingDischarge,
    ContainerStatus::Discharging,
    ContainerStatus::Discharged,
    ContainerStatus::AwaitingPickup,
    ContainerStatus::CustomsCleared,
];

impl ContainerStatus {
    /// 是否纳入滞港风险监控
    pub fn is_demurrage_watch(&self) -> bool {
        DEMURRAGE_WATCH_STATUSES.contains(self)
    }

    /// 从字符串解析状态 (兼容展示文案,如 "At Port")
    ///
    /// 快照来源混用存储格式与展示文案,
    /// 反序列化统一经由此函数归一化。
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_uppercase();
        match normalized.as_str() {
            "ONVESSEL" => Some(ContainerStatus::OnVessel),
            "ATPORT" => Some(ContainerStatus::AtPort),
            "AWAITINGDISCHARGE" => Some(ContainerStatus::AwaitingDischarge),
            "DISCHARGING" => Some(ContainerStatus::Discharging),
            "DISCHARGED" => Some(ContainerStatus::Discharged),
            "AWAITINGPICKUP" => Some(ContainerStatus::AwaitingPickup),
            "CUSTOMSCLEARED" => Some(ContainerStatus::CustomsCleared),
            "INTRANSIT" => Some(ContainerStatus::InTransit),
            "DELIVERED" => Some(ContainerStatus::Delivered),
            "SENTTODEPOT" => Some(ContainerStatus::SentToDepot),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for ContainerStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        ContainerStatus::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("未知的集装箱状态: {}", raw)))
    }
}

impl fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerStatus::OnVessel => write!(f, "ON_VESSEL"),
            ContainerStatus::AtPort => write!(f, "AT_PORT"),
            ContainerStatus::AwaitingDischarge => write!(f, "AWAITING_DISCHARGE"),
            ContainerStatus::Discharging => write!(f, "DISCHARGING"),
            ContainerStatus::Discharged => write!(f, "DISCHARGED"),
            ContainerStatus::AwaitingPickup => write!(f, "AWAITING_PICKUP"),
            ContainerStatus::CustomsCleared => write!(f, "CUSTOMS_CLEARED"),
            ContainerStatus::InTransit => write!(f, "IN_TRANSIT"),
            ContainerStatus::Delivered => write!(f, "DELIVERED"),
            ContainerStatus::SentToDepot => write!(f, "SENT_TO_DEPOT"),
        }
    }
}

// ==========================================
// 费用支付状态 (Cost Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CostStatus {
    PendingApproval, // 待审批
    Approved,        // 已审批
    Processed,       // 已处理
    Reconciled,      // 已对账
    Paid,            // 已支付
    Disputed,        // 争议中
    Cancelled,       // 已取消
    Refunded,        // 已退款
}

impl CostStatus {
    /// 是否参与付款预警
    ///
    /// 已支付/已取消的费用不再产生付款预警,与到期日无关。
    pub fn is_payment_relevant(&self) -> bool {
        !matches!(self, CostStatus::Paid | CostStatus::Cancelled)
    }
}

impl fmt::Display for CostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostStatus::PendingApproval => write!(f, "PENDING_APPROVAL"),
            CostStatus::Approved => write!(f, "APPROVED"),
            CostStatus::Processed => write!(f, "PROCESSED"),
            CostStatus::Reconciled => write!(f, "RECONCILED"),
            CostStatus::Paid => write!(f, "PAID"),
            CostStatus::Disputed => write!(f, "DISPUTED"),
            CostStatus::Cancelled => write!(f, "CANCELLED"),
            CostStatus::Refunded => write!(f, "REFUNDED"),
        }
    }
}

// ==========================================
// 发票状态 (Invoice Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Draft,           // 草稿
    PendingApproval, // 待审批
    Approved,        // 已审批
    PartiallyPaid,   // 部分支付
    Paid,            // 已支付
    Cancelled,       // 已取消
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceStatus::Draft => write!(f, "DRAFT"),
            InvoiceStatus::PendingApproval => write!(f, "PENDING_APPROVAL"),
            InvoiceStatus::Approved => write!(f, "APPROVED"),
            InvoiceStatus::PartiallyPaid => write!(f, "PARTIALLY_PAID"),
            InvoiceStatus::Paid => write!(f, "PAID"),
            InvoiceStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

// ==========================================
// 任务状态 (Task Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,    // 待处理
    InProgress, // 进行中
    Completed,  // 已完成
    Blocked,    // 受阻
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "PENDING"),
            TaskStatus::InProgress => write!(f, "IN_PROGRESS"),
            TaskStatus::Completed => write!(f, "COMPLETED"),
            TaskStatus::Blocked => write!(f, "BLOCKED"),
        }
    }
}

// ==========================================
// 任务优先级 (Task Priority)
// ==========================================
// 任务自带的优先级,超期时直接映射为预警优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,    // 低
    Medium, // 中
    High,   // 高
}

impl TaskPriority {
    /// 映射为预警优先级 (low/medium/high → LOW/MEDIUM/HIGH)
    pub fn to_alert_priority(&self) -> AlertPriority {
        match self {
            TaskPriority::Low => AlertPriority::Low,
            TaskPriority::Medium => AlertPriority::Medium,
            TaskPriority::High => AlertPriority::High,
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskPriority::Low => write!(f, "LOW"),
            TaskPriority::Medium => write!(f, "MEDIUM"),
            TaskPriority::High => write!(f, "HIGH"),
        }
    }
}

// ==========================================
// 预警优先级 (Alert Priority)
// ==========================================
// 红线: 等级制,不是评分制
// 顺序: Low < Medium < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertPriority {
    Low,    // 提示
    Medium, // 关注
    High,   // 紧急
}

impl fmt::Display for AlertPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertPriority::Low => write!(f, "LOW"),
            AlertPriority::Medium => write!(f, "MEDIUM"),
            AlertPriority::High => write!(f, "HIGH"),
        }
    }
}

// ==========================================
// 预警类型 (Alert Type)
// ==========================================
// 序列化标签即对外契约,展示层按此查找图标/颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    Demurrage,       // 滞港费风险
    PaymentDueSoon,  // 付款临期
    PaymentOverdue,  // 付款超期
    InvoiceApproval, // 发票待审批
    InvoiceOverdue,  // 发票超期未付
    TaskOverdue,     // 任务超期
}

impl AlertType {
    /// 预警键后缀 (与序列化标签区分: 键后缀使用连字符)
    pub fn key_suffix(&self) -> &'static str {
        match self {
            AlertType::Demurrage => "demurrage",
            AlertType::PaymentDueSoon => "payment-due-soon",
            AlertType::PaymentOverdue => "payment-overdue",
            AlertType::InvoiceApproval => "invoice-approval",
            AlertType::InvoiceOverdue => "invoice-overdue",
            AlertType::TaskOverdue => "task-overdue",
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertType::Demurrage => write!(f, "demurrage"),
            AlertType::PaymentDueSoon => write!(f, "payment_due_soon"),
            AlertType::PaymentOverdue => write!(f, "payment_overdue"),
            AlertType::InvoiceApproval => write!(f, "invoice_approval"),
            AlertType::InvoiceOverdue => write!(f, "invoice_overdue"),
            AlertType::TaskOverdue => write!(f, "task_overdue"),
        }
    }
}
