// ==========================================
// 进口物流管理系统 - 预警输出结构
// ==========================================
// 预警条目为临时产物: 每次计算即时合成,不落库。
// key 为源实体ID与预警类型的确定性组合,
// 供展示层在重算之间稳定追踪同一条预警。
// ==========================================

use crate::domain::types::{AlertPriority, AlertType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// AlertReference - 预警跳转链接
// ==========================================
// link 为展示层路由可理解的路径,约定:
// - /imports/{importId}          滞港/付款预警
// - /payments?invoiceId={id}     发票预警
// - /workflow?taskId={id}        任务预警
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertReference {
    /// 路由路径
    pub link: String,
    /// 展示文本
    pub label: String,
}

// ==========================================
// AlertItem - 预警条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertItem {
    /// 稳定唯一键 (源实体ID + 预警类型)
    pub key: String,
    /// 预警类型
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    /// 优先级
    pub priority: AlertPriority,
    /// 预格式化的人工可读消息 (按当前语言环境渲染)
    pub message: String,
    /// 驱动紧急度与排序位置的日历日期
    pub due_date: NaiveDate,
    /// 跳转回源记录的链接
    pub reference: AlertReference,
    /// 规则判定依据 (结构化 JSON, 可解释性)
    pub reason: String,
}

impl AlertItem {
    /// 组合预警键: `{id段}-{类型后缀}`
    ///
    /// id 段可为多级 (如 进口流程ID-集装箱ID)。
    pub fn compose_key(id_parts: &[&str], alert_type: AlertType) -> String {
        let mut key = id_parts.join("-");
        key.push('-');
        key.push_str(alert_type.key_suffix());
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_key() {
        assert_eq!(
            AlertItem::compose_key(&["IMP1", "C1"], AlertType::Demurrage),
            "IMP1-C1-demurrage"
        );
        assert_eq!(
            AlertItem::compose_key(&["IMP1", "K9"], AlertType::PaymentDueSoon),
            "IMP1-K9-payment-due-soon"
        );
        assert_eq!(
            AlertItem::compose_key(&["INV7"], AlertType::InvoiceApproval),
            "INV7-invoice-approval"
        );
        assert_eq!(
            AlertItem::compose_key(&["T3"], AlertType::TaskOverdue),
            "T3-task-overdue"
        );
    }

    #[test]
    fn test_alert_item_serializes_type_tag_and_iso_date() {
        let item = AlertItem {
            key: "INV7-invoice-approval".to_string(),
            alert_type: AlertType::InvoiceApproval,
            priority: AlertPriority::High,
            message: "Invoice FP-1 from Acme requires approval".to_string(),
            due_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            reference: AlertReference {
                link: "/payments?invoiceId=INV7".to_string(),
                label: "FP-1".to_string(),
            },
            reason: "{}".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "invoice_approval");
        assert_eq!(json["priority"], "HIGH");
        assert_eq!(json["due_date"], "2026-04-01");
    }
}
