use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
mod config;
mod error;
mod events;
mod services;
mod utils;

use config::Config;
use services::{create_window_system, execute_plan, read_window_state, PlacementPlanner};

#[derive(Parser, Debug)]
#[command(name = "swapmonitor")]
#[command(about = "Переносит активное окно на другую половину двухмониторного экрана")]
struct Args {
    /// Путь к файлу конфигурации (необязательный)
    #[arg(short, long, default_value = "swapmonitor.toml")]
    config: String,

    /// Режим сухого запуска (без реальных действий)
    #[arg(long)]
    dry_run: bool,

    /// Уровень логирования (по умолчанию из конфигурации)
    #[arg(long)]
    log_level: Option<String>,

    /// Отступ на рамку окна в пикселях
    #[arg(long)]
    padding: Option<u32>,

    /// Запас по высоте для почти развёрнутых окон в пикселях
    #[arg(long)]
    height_tolerance: Option<u32>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Загрузка конфигурации
    let config = load_config(&args)?;

    // Инициализация системы логирования
    init_tracing(&config.logging.level, &config.logging.format)?;

    info!("Запуск swapmonitor v{}", env!("CARGO_PKG_VERSION"));

    if args.dry_run {
        warn!("Режим сухого запуска - реальные действия отключены");
    } else {
        utils::check_display_environment();
    }

    // Соединение живёт до конца функции и закрывается при drop
    let window_system = create_window_system(&config, args.dry_run)?;

    let snapshot = read_window_state(window_system.as_ref())?;
    let plan = PlacementPlanner::new(config.placement).plan_snapshot(&snapshot)?;
    execute_plan(window_system.as_ref(), snapshot.window.id, &plan)?;

    info!("swapmonitor завершил работу");
    Ok(())
}

/// Файл и окружение, поверх них флаги командной строки; проверка один раз в конце
fn load_config(args: &Args) -> Result<Config> {
    let mut config = Config::load(&args.config)?;

    if let Some(padding) = args.padding {
        config.placement.decoration_padding = padding;
    }
    if let Some(tolerance) = args.height_tolerance {
        config.placement.height_tolerance = tolerance;
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }

    config.validate(args.dry_run)?;
    Ok(config)
}

fn init_tracing(level: &str, format: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    // Диагностика всегда в stderr
    match format {
        "full" => tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .init(),
        _ => tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .init(),
    }

    Ok(())
}
