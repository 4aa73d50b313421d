// ==========================================
// 进口物流管理系统 - 驾驶舱 API
// ==========================================
// 职责: 拉取各仓储快照,调用预警引擎,
//       输出按到期日排序的预警流
// 架构: API 层 → 引擎层 (AlertEngine), 仓储以
//       trait 对象注入,便于测试 mock
// ==========================================

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiResult;
use crate::config::AlertThresholds;
use crate::domain::alert::AlertItem;
use crate::domain::types::{AlertPriority, AlertType};
use crate::engine::AlertEngine;
use crate::repository::traits::{
    ImportRepository, InvoiceRepository, TaskRepository, UserDirectory,
};

// ==========================================
// AlertFeed - 预警流
// ==========================================
// 空预警流是一等输出 (展示层渲染"一切正常"),不是错误
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertFeed {
    /// 基准日期 (本次计算使用的"今天")
    pub generated_for: NaiveDate,
    /// 按到期日升序的预警列表
    pub alerts: Vec<AlertItem>,
    /// 是否一切正常 (alerts 为空)
    pub all_clear: bool,
    /// HIGH 级预警数
    pub high_count: usize,
    /// MEDIUM 级预警数
    pub medium_count: usize,
    /// LOW 级预警数
    pub low_count: usize,
}

// ==========================================
// AlertStyle - 展示样式映射
// ==========================================
// 预警类型到图标/颜色的静态查找表,展示层持有;
// 引擎只输出类型标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlertStyle {
    /// 图标名
    pub icon: &'static str,
    /// 颜色标签
    pub color: &'static str,
}

impl AlertStyle {
    /// 按预警类型查样式
    pub fn for_type(alert_type: AlertType) -> AlertStyle {
        match alert_type {
            AlertType::Demurrage => AlertStyle {
                icon: "ship",
                color: "orange",
            },
            AlertType::PaymentDueSoon => AlertStyle {
                icon: "clock",
                color: "yellow",
            },
            AlertType::PaymentOverdue => AlertStyle {
                icon: "alert-circle",
                color: "red",
            },
            AlertType::InvoiceApproval => AlertStyle {
                icon: "file-text",
                color: "blue",
            },
            AlertType::InvoiceOverdue => AlertStyle {
                icon: "file-warning",
                color: "red",
            },
            AlertType::TaskOverdue => AlertStyle {
                icon: "check-square",
                color: "purple",
            },
        }
    }
}

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================
pub struct DashboardApi {
    /// 进口流程仓储
    import_repo: Arc<dyn ImportRepository>,
    /// 发票仓储
    invoice_repo: Arc<dyn InvoiceRepository>,
    /// 任务仓储
    task_repo: Arc<dyn TaskRepository>,
    /// 用户目录
    user_dir: Arc<dyn UserDirectory>,
    /// 预警引擎 (无状态)
    engine: AlertEngine,
    /// 预警阈值
    thresholds: AlertThresholds,
}

impl DashboardApi {
    /// 创建新的 DashboardApi 实例
    pub fn new(
        import_repo: Arc<dyn ImportRepository>,
        invoice_repo: Arc<dyn InvoiceRepository>,
        task_repo: Arc<dyn TaskRepository>,
        user_dir: Arc<dyn UserDirectory>,
        thresholds: AlertThresholds,
    ) -> Self {
        Self {
            import_repo,
            invoice_repo,
            task_repo,
            user_dir,
            engine: AlertEngine::new(),
            thresholds,
        }
    }

    /// 生成预警流
    ///
    /// # 参数
    /// - today: 基准日期;为空时取系统当前日期。
    ///   测试中必须显式传入以保证确定性。
    ///
    /// # 返回
    /// - Ok(AlertFeed): 按到期日排序的预警流
    /// - Err(ApiError): 快照读取失败
    pub fn get_alert_feed(&self, today: Option<NaiveDate>) -> ApiResult<AlertFeed> {
        let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());

        let imports = self.import_repo.list_imports()?;
        let invoices = self.invoice_repo.list_invoices()?;
        let tasks = self.task_repo.list_tasks()?;
        let users = self.user_dir.list_users()?;

        let alerts = self.engine.derive_alerts(
            &imports,
            &invoices,
            &tasks,
            &users,
            today,
            &self.thresholds,
        );

        let high_count = alerts
            .iter()
            .filter(|a| a.priority == AlertPriority::High)
            .count();
        let medium_count = alerts
            .iter()
            .filter(|a| a.priority == AlertPriority::Medium)
            .count();
        let low_count = alerts
            .iter()
            .filter(|a| a.priority == AlertPriority::Low)
            .count();

        Ok(AlertFeed {
            generated_for: today,
            all_clear: alerts.is_empty(),
            high_count,
            medium_count,
            low_count,
            alerts,
        })
    }
}
