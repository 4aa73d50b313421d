// ==========================================
// 进口物流管理系统 - 命令行入口
// ==========================================
// 用法: import-ops-dashboard <snapshot.json>
//        [--date YYYY-MM-DD] [--config <thresholds.json>]
//        [--locale en|zh-CN]
// 输出: 预警流 JSON (stdout)
// ==========================================

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;

use import_ops_dashboard::repository::SnapshotStore;
use import_ops_dashboard::{i18n, logging, AlertThresholds, DashboardApi};

/// 命令行参数
struct CliArgs {
    snapshot_path: String,
    date: Option<NaiveDate>,
    config_path: Option<String>,
    locale: Option<String>,
}

fn parse_args() -> Result<CliArgs> {
    let mut args = std::env::args().skip(1);
    let mut snapshot_path = None;
    let mut date = None;
    let mut config_path = None;
    let mut locale = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--date" => {
                let raw = args.next().context("--date 需要参数 (YYYY-MM-DD)")?;
                let parsed = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .with_context(|| format!("无法解析日期: {}", raw))?;
                date = Some(parsed);
            }
            "--config" => {
                config_path = Some(args.next().context("--config 需要文件路径参数")?);
            }
            "--locale" => {
                locale = Some(args.next().context("--locale 需要语言代码参数")?);
            }
            other if snapshot_path.is_none() => {
                snapshot_path = Some(other.to_string());
            }
            other => bail!("未知参数: {}", other),
        }
    }

    Ok(CliArgs {
        snapshot_path: snapshot_path
            .context("用法: import-ops-dashboard <snapshot.json> [--date YYYY-MM-DD]")?,
        date,
        config_path,
        locale,
    })
}

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("进口物流管理系统 - 风险预警引擎");
    tracing::info!("系统版本: {}", import_ops_dashboard::VERSION);
    tracing::info!("==================================================");

    let cli = parse_args()?;

    if let Some(locale) = &cli.locale {
        i18n::set_locale(locale);
        tracing::info!("语言环境: {}", locale);
    }

    // 加载预警阈值
    let thresholds = match &cli.config_path {
        Some(path) => AlertThresholds::load_from_file(path)
            .with_context(|| format!("加载阈值配置失败: {}", path))?,
        None => AlertThresholds::default(),
    };
    tracing::info!(?thresholds, "预警阈值");

    // 加载业务快照
    let store = SnapshotStore::from_json_file(&cli.snapshot_path)
        .with_context(|| format!("加载快照失败: {}", cli.snapshot_path))?;
    tracing::info!(
        imports = store.snapshot().imports.len(),
        invoices = store.snapshot().invoices.len(),
        tasks = store.snapshot().tasks.len(),
        users = store.snapshot().users.len(),
        "快照加载完成"
    );

    // 组装 API 并生成预警流
    let store = Arc::new(store);
    let api = DashboardApi::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store,
        thresholds,
    );
    let feed = api.get_alert_feed(cli.date)?;

    if feed.all_clear {
        tracing::info!("{}", i18n::t("common.all_clear"));
    } else {
        tracing::info!(
            high = feed.high_count,
            medium = feed.medium_count,
            low = feed.low_count,
            "预警生成完成"
        );
    }

    println!("{}", serde_json::to_string_pretty(&feed)?);
    Ok(())
}
