use clap::Parser;
use cicd_demo::utils::{logger, validation::Validate};
use cicd_demo::{CaptureConfig, CaptureEngine, CapturePlan, JenkinsCaptureFlow, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CaptureConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("🚀 Jenkins pipeline screenshot capture");
    tracing::info!(
        "🎯 Target: {} job '{}' build #{}",
        config.base_url,
        config.job,
        config.build
    );

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建存儲和瀏覽器會話
    let storage = LocalStorage::new(config.output_dir.clone());
    let plan = CapturePlan::standard(&config.job, config.build);
    let output_dir = config.output_dir.clone();

    let flow = match JenkinsCaptureFlow::connect(storage, config).await {
        Ok(flow) => flow,
        Err(e) => {
            tracing::error!("❌ Could not start WebDriver session: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(3);
        }
    };
    tracing::info!("✅ WebDriver session initialized");

    // 創建引擎並運行
    let engine = CaptureEngine::new_with_monitoring(flow, plan, monitor_enabled);

    match engine.run().await {
        Ok(report) => {
            tracing::info!("✅ All screenshots captured successfully!");
            tracing::info!("📁 Screenshots saved to: {}/", output_dir);
            println!("✅ All screenshots captured successfully!");
            println!("📁 Screenshots saved to: {}/", output_dir);
            for artifact in &report.artifacts {
                println!(
                    "  - {} ({:.1} KB)",
                    artifact.file_name,
                    artifact.bytes as f64 / 1024.0
                );
            }
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Capture failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                cicd_demo::utils::error::ErrorSeverity::Low => 0,
                cicd_demo::utils::error::ErrorSeverity::Medium => 2,
                cicd_demo::utils::error::ErrorSeverity::High => 1,
                cicd_demo::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
