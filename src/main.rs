use anyhow::Context;
use clap::Parser;
use site_behavior::config::{CliConfig, Command};
use site_behavior::core::map::init_map;
use site_behavior::core::search::search_text;
use site_behavior::core::subscribe::EmailAddress;
use site_behavior::utils::error::ErrorSeverity;
use site_behavior::utils::logger;
use site_behavior::utils::validation::Validate;
use site_behavior::{PageError, RecordingMap, SiteConfig};
use std::path::Path;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting site-behavior CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config.command) {
        let severity = e
            .downcast_ref::<PageError>()
            .map(PageError::severity)
            .unwrap_or(ErrorSeverity::High);

        tracing::error!("❌ {:#} (Severity: {:?})", e, severity);
        eprintln!("❌ {:#}", e);

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match severity {
            ErrorSeverity::Low => 1,    // 輸入錯誤
            ErrorSeverity::Medium => 2, // 元件錯誤
            ErrorSeverity::High => 3,   // 配置或檔案錯誤
        };
        std::process::exit(exit_code);
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::from_file(path)
            .with_context(|| format!("failed to load {}", path.display())),
        None => Ok(SiteConfig::default()),
    }
}

fn run(command: &Command) -> anyhow::Result<()> {
    match command {
        Command::CheckEmail { address } => {
            let email = EmailAddress::parse(address)?;
            println!("✅ {} is a valid address", email.as_ref());
        }
        Command::Search { text_file, query } => {
            let text = std::fs::read_to_string(text_file)
                .with_context(|| format!("failed to read {}", text_file.display()))?;
            let messages = SiteConfig::default().messages;
            let notice = search_text(query, || text);
            println!("{}", messages.render(&notice));
        }
        Command::MapPlan { config } => {
            let site = load_config(config.as_deref())?;
            let mut widget = RecordingMap::new();
            let summary = init_map(&mut widget, &site.map)?;
            tracing::info!(
                markers = summary.markers,
                polygons = summary.polygons,
                "map plan recorded"
            );
            println!("{}", serde_json::to_string_pretty(widget.calls())?);
        }
        Command::Validate { config } => {
            load_config(config.as_deref())?.validate()?;
            println!("✅ Configuration is valid");
        }
    }
    Ok(())
}
