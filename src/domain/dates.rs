// ==========================================
// 进口物流管理系统 - 日历日期处理
// ==========================================
// 红线: 所有日期按"日"粒度比较,存储日期一律按
//       UTC 零点解析,避免跨时区差一天
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

/// 解析日历日期字符串
///
/// 接受 `YYYY-MM-DD`,也接受带时间部分的 ISO 字符串
/// (只取日期部分,等价于 UTC 零点)。
/// 无法解析时返回 None (预警生成是建议性的,
/// 坏日期只跳过对应记录,不中断整体计算)。
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    // 带时间部分的 ISO 字符串只取日期段
    let date_part = trimmed.split(['T', ' ']).next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// 两个日历日期的整数天差 (to - from, 可为负)
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

// ==========================================
// serde 辅助: 宽容的可选日期字段
// ==========================================
// 用法: #[serde(default, with = "crate::domain::dates::lenient_date")]
pub mod lenient_date {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        // 缺失/null/坏字符串统一视为"无日期"
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_calendar_date))
    }

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_some(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }
}
