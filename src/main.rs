use clap::Parser;
use license_inserter::utils::{logger, validation::Validate};
use license_inserter::{CliConfig, InserterEngine, LicenseError, LocalStorage, RunConfig};

fn fail(e: &LicenseError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting license-inserter");
    tracing::debug!("CLI config: {:?}", cli);

    // 讀取環境變數並驗證配置
    let config = match RunConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    if let Err(e) = config.validate() {
        fail(&e);
    }

    // 處理目標並輸出統計
    let engine = InserterEngine::new(LocalStorage::new(), config);
    let report = match engine.run().await {
        Ok(report) => report,
        Err(e) => fail(&e),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    // --keep-going 仍有失敗時以非零狀態結束
    if report.failed > 0 {
        fail(&LicenseError::PartialFailure {
            failed: report.failed,
        });
    }

    Ok(())
}
