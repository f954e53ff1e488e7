// ==========================================
// 煤炭质量可行性评估 - 命令行入口
// ==========================================
// 用法:
//   coal-viability <pcs> <pci> <ash_pct> <moisture_pct> <sulfur_pct>
//                  [--locale pt-BR|en] [--json] [--db <path>] [--log-json] [--no-validate]
//
// 未指定 --db 时: 设置了 COAL_VIABILITY_DB_PATH 则读取该数据库，否则使用内置判定标准与成本表
// ==========================================

use anyhow::{anyhow, bail, Context};
use coal_viability::api::{ApiError, EvaluationApi, EvaluationReport};
use coal_viability::config::{ConfigManager, CriteriaConfigReader, StaticCriteriaConfig};
use coal_viability::domain::Sample;
use coal_viability::{db, i18n, logging};
use std::sync::Arc;

const USAGE: &str = "用法: coal-viability <pcs> <pci> <ash_pct> <moisture_pct> <sulfur_pct> \
[--locale pt-BR|en] [--json] [--db <path>] [--log-json] [--no-validate]";

/// 命令行参数
#[derive(Debug, Clone, PartialEq)]
struct CliArgs {
    sample: Sample,
    locale: String,
    json: bool,
    db_path: Option<String>,
    log_json: bool,
    validate: bool,
}

fn parse_args<I>(args: I) -> anyhow::Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut values: Vec<f64> = Vec::with_capacity(5);
    let mut locale = i18n::DEFAULT_LOCALE.to_string();
    let mut json = false;
    let mut db_path = None;
    let mut log_json = false;
    let mut validate = true;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--locale" => {
                locale = iter.next().ok_or_else(|| anyhow!("--locale 缺少参数值"))?;
            }
            "--db" => {
                db_path = Some(iter.next().ok_or_else(|| anyhow!("--db 缺少参数值"))?);
            }
            "--json" => json = true,
            "--log-json" => log_json = true,
            "--no-validate" => validate = false,
            other if other.starts_with("--") => bail!("未知选项: {}", other),
            other => {
                let value = other
                    .trim()
                    .parse::<f64>()
                    .with_context(|| format!("无法解析数值: {}", other))?;
                values.push(value);
            }
        }
    }

    let [pcs, pci, ash_pct, moisture_pct, sulfur_pct] = values[..] else {
        bail!("需要 5 个检测值，实际 {} 个\n{}", values.len(), USAGE);
    };

    Ok(CliArgs {
        sample: Sample::new(pcs, pci, ash_pct, moisture_pct, sulfur_pct),
        locale,
        json,
        db_path,
        log_json,
        validate,
    })
}

fn print_text_report(report: &EvaluationReport) {
    let locale = report.locale.as_str();
    println!("{}", i18n::t_in(locale, "report.title"));
    println!(
        "{}",
        i18n::t_with_args_in(locale, "report.result", &[("verdict", report.verdict_label.as_str())])
    );
    println!(
        "{}",
        i18n::t_with_args_in(
            locale,
            "report.justification",
            &[("text", report.justification().as_str())]
        )
    );
    if let Some(line) = report.surcharge_line() {
        println!("{}", line);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    if args.log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    i18n::set_locale(&args.locale);
    tracing::debug!(version = coal_viability::VERSION, "{}", coal_viability::APP_NAME);

    let db_path = args.db_path.clone().or_else(|| {
        std::env::var(db::DB_PATH_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|_| db::get_default_db_path())
    });

    let config: Arc<dyn CriteriaConfigReader> = match &db_path {
        Some(path) => {
            tracing::info!("使用配置数据库: {}", path);
            Arc::new(
                ConfigManager::new(path)
                    .with_context(|| format!("无法打开配置数据库: {}", path))?,
            )
        }
        None => Arc::new(StaticCriteriaConfig::default()),
    };

    let api = EvaluationApi::new(config);
    let outcome = if args.validate {
        api.evaluate(args.sample, &args.locale).await
    } else {
        api.evaluate_unchecked(args.sample, &args.locale).await
    };

    let report = match outcome {
        Ok(report) => report,
        Err(ApiError::ValidationError { violations, .. }) => {
            eprintln!("{}", i18n::t_in(&args.locale, "report.invalid_input"));
            for v in &violations {
                eprintln!("  - {}", v.reason);
            }
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text_report(&report);
    }

    Ok(())
}
