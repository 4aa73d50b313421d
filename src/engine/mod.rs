// ==========================================
// 进口物流管理系统 - 引擎层
// ==========================================
// 职责: 实现预警业务规则
// 红线: 引擎只读输入快照,不做数据访问;
//       所有规则必须输出 reason
// ==========================================

pub mod alerts;

// 重导出核心引擎
pub use alerts::AlertEngine;
