// ==========================================
// 进口物流管理系统 - 进口流程实体
// ==========================================
// 职责: 进口流程聚合根 + 集装箱 + 费用明细
// 不变式: 集装箱与费用明细归属且仅归属一个进口流程
// ==========================================

use crate::domain::types::{ContainerStatus, CostStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// ImportProcess - 进口流程 (聚合根)
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportProcess {
    /// 进口流程ID
    pub import_id: String,
    /// 进口单号 (人工可读)
    pub import_no: String,
    /// 集装箱列表
    #[serde(default)]
    pub containers: Vec<Container>,
    /// 费用明细列表
    #[serde(default)]
    pub costs: Vec<CostItem>,
}

// ==========================================
// Container - 集装箱
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    /// 集装箱ID
    pub container_id: String,
    /// 箱号
    pub container_no: String,
    /// 当前生命周期状态
    pub status: ContainerStatus,
    /// 海港到港日期 (日历日期,无时间部分)
    #[serde(default, with = "crate::domain::dates::lenient_date")]
    pub seaport_arrival_date: Option<NaiveDate>,
    /// 滞港免费期天数 (到港后开始计费前的宽限天数)
    #[serde(default)]
    pub demurrage_free_days: Option<u32>,
}

impl Container {
    /// 滞港计费起始日 = 到港日期 + 免费期天数
    ///
    /// 到港日期或免费期任一缺失时无法评估,返回 None。
    pub fn demurrage_start(&self) -> Option<NaiveDate> {
        let arrival = self.seaport_arrival_date?;
        let free_days = self.demurrage_free_days?;
        arrival.checked_add_days(chrono::Days::new(free_days as u64))
    }
}

// ==========================================
// CostItem - 费用明细
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostItem {
    /// 费用ID
    pub cost_id: String,
    /// 费用类目 (如 海运费/关税/拖车费)
    pub category: String,
    /// 金额
    pub amount: f64,
    /// 付款到期日
    #[serde(default, with = "crate::domain::dates::lenient_date")]
    pub due_date: Option<NaiveDate>,
    /// 支付状态
    pub status: CostStatus,
}
