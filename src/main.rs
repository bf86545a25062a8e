use clap::Parser;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use recycle_vision::{cli, classifier, config, error, rewards, scan, storage};
use cli::{Cli, Commands};
use config::Config;
use error::{RecycleVisionError, Result};
use recycle_vision_common::{
    DashboardStats, Notification, RedeemOutcome, RewardStore, ScanSession, REWARD_CATALOG,
};
use std::path::Path;
use std::time::Duration;
use storage::FileStorage;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;
    let data_dir = Config::data_dir(cli.data_dir.clone())?;

    match cli.command {
        Commands::Scan { file, delay_ms, yes, no_prompt } => {
            println!("♻️  recycle-vision - スキャン\n");

            let classifier =
                classifier::CommandClassifier::from_config(&config)?.with_verbose(cli.verbose);
            let mut store = open_store(&data_dir, &config, cli.verbose);
            let delay = Duration::from_millis(delay_ms.unwrap_or(config.processing_delay_ms));

            let spinner = spinner("画像を解析中...");
            let report =
                scan::scan_file(&mut store, &classifier, &file, delay, &mut rand::thread_rng())
                    .await;
            spinner.finish_and_clear();
            let mut report = report?;

            for notification in &report.notifications {
                print_notification(notification);
            }
            println!();
            print_session(&report.session);

            if report.session.can_mark_recycled() {
                let confirmed = if yes {
                    true
                } else if no_prompt {
                    false
                } else {
                    Confirm::new()
                        .with_prompt(report.session.recycle_button_label())
                        .default(true)
                        .interact()
                        .map_err(|e| RecycleVisionError::CommandExecution(e.to_string()))?
                };

                if confirmed {
                    let recycled = scan::mark_recycled(&mut store, &mut report.session)?;
                    if let Some(notification) = recycled {
                        if cli.verbose {
                            if let Some(record) = report.session.record() {
                                println!("  Item recycled: {}", record.name);
                            }
                        }
                        print_notification(&notification);
                        println!("✔ {}", report.session.recycle_button_label());
                    }
                }
            }

            println!();
            print_stats(&store.stats());
            println!("\n✅ 完了");
        }

        Commands::Stats => {
            let store = open_store(&data_dir, &config, cli.verbose);
            print_stats(&store.stats());
        }

        Commands::Rewards => {
            let store = open_store(&data_dir, &config, cli.verbose);
            print_rewards(store.state().points);
        }

        Commands::Redeem { reward } => {
            let mut store = open_store(&data_dir, &config, cli.verbose);
            let outcome = rewards::redeem(&mut store, &reward)?;
            print_notification(&outcome.notification());
            if let RedeemOutcome::Claimed { remaining, .. } = outcome {
                println!("  残りポイント: {}", remaining);
            }
        }

        Commands::Reset { yes } => {
            let confirmed = yes
                || Confirm::new()
                    .with_prompt("統計を初期状態に戻しますか？")
                    .default(false)
                    .interact()
                    .map_err(|e| RecycleVisionError::CommandExecution(e.to_string()))?;

            if confirmed {
                let mut store = open_store(&data_dir, &config, cli.verbose);
                store.reset()?;
                println!("✔ 統計をリセットしました");
            }
        }

        Commands::Config { show, set_classifier, classifier_args, set_delay_ms } => {
            if let Some(command) = set_classifier {
                config.set_classifier(command, classifier_args);
                config.save()?;
                println!("✔ 分類コマンドを設定しました");
            }

            if let Some(delay_ms) = set_delay_ms {
                config.processing_delay_ms = delay_ms;
                config.save()?;
                println!("✔ 処理待ち時間を設定しました");
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!(
                    "  保存データ: {}",
                    FileStorage::new(&data_dir)
                        .path_for(&config.app_config().storage_key)
                        .display()
                );
                match &config.classifier_command {
                    Some(command) => println!(
                        "  分類コマンド: {} {}",
                        command,
                        config.classifier_args.join(" ")
                    ),
                    None => println!("  分類コマンド: 未設定"),
                }
                println!("  処理待ち時間: {}ms", config.processing_delay_ms);
            }
        }
    }

    Ok(())
}

fn open_store(data_dir: &Path, config: &Config, verbose: bool) -> RewardStore<FileStorage> {
    let store = storage::open_store(data_dir, &config.app_config());

    if verbose {
        println!("  保存データ: {}", store.storage().path_for(store.key()).display());
    }
    if let Some(e) = store.load_error() {
        eprintln!("⚠ 保存データを読み込めませんでした。初期状態で開始します: {}", e);
    }

    store
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn print_notification(notification: &Notification) {
    if notification.is_destructive() {
        eprintln!("✖ {}: {}", notification.title, notification.description);
    } else {
        println!("✔ {}: {}", notification.title, notification.description);
    }
}

fn print_session(session: &ScanSession) {
    let Some(identification) = session.identification() else {
        println!("We couldn't identify this item.");
        return;
    };

    let record = identification.record;
    println!("Scan Results [{}]", record.badge());
    println!(
        "  Detected: {} ({}% confidence)",
        identification.detected.label,
        identification.detected.confidence_percent()
    );
    println!("  {}", record.name);
    println!("  Material: {}", record.material);
    println!("  Instructions: {}", record.instructions);
    println!("  Disposal: {}", record.disposal);
}

fn print_stats(stats: &DashboardStats) {
    println!("Your Recycling Impact");
    println!("  Items Scanned:  {}", stats.total_scans);
    println!("  Items Recycled: {}", stats.total_recycled);
    println!("  Recycling Rate: {}%", stats.recycle_rate);
    println!("  Current Streak: {}", stats.streak_label());
    println!();
    println!("Reward Points");
    println!("  Level {}  {} points", stats.level, stats.points);
    println!(
        "  Next level: {}%  ({} points to Level {})",
        stats.level_progress,
        stats.points_to_next_level,
        stats.level + 1
    );
}

fn print_rewards(points: u32) {
    println!("Available Rewards (You have {} points to spend)\n", points);
    for (i, entry) in REWARD_CATALOG.iter().enumerate() {
        println!(
            "{}. {} {} - {} points [{}]",
            i + 1,
            entry.icon.glyph(),
            entry.title,
            entry.points,
            entry.claim_label(points)
        );
        println!("   {}", entry.description);
    }
}
