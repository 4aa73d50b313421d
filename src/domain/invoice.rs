// ==========================================
// 进口物流管理系统 - 发票实体
// ==========================================
// 发票独立于进口流程,按供应商开具
// ==========================================

use crate::domain::types::InvoiceStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Invoice - 发票
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// 发票ID
    pub invoice_id: String,
    /// 发票号
    pub invoice_no: String,
    /// 供应商名称
    pub supplier: String,
    /// 付款到期日
    ///
    /// 宽容解析: 坏日期字符串置空,相关预警规则跳过该发票。
    #[serde(default, with = "crate::domain::dates::lenient_date")]
    pub due_date: Option<NaiveDate>,
    /// 发票状态
    pub status: InvoiceStatus,
}
