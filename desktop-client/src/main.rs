mod colors;
mod config;
mod ui;

use clap::Parser;
use eframe::egui;
use snake_egg_common::games::snake::GameMode;
use snake_egg_common::{log, log_warn, logger};

use config::{CONFIG_FILE, Config, get_config_manager, parse_mode};
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "snake_egg")]
struct Args {
    /// YAML config file; created with defaults on first run.
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Fixed RNG seed for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_parser = parse_mode)]
    mode: Option<GameMode>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let manager = get_config_manager(&args.config);
    let mut config = match manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log_warn!("Failed to load {}: {}. Using defaults", args.config, e);
            Config::default()
        }
    };
    if !std::path::Path::new(&args.config).exists()
        && let Err(e) = manager.set_config(&config)
    {
        log_warn!("Failed to write default config: {}", e);
    }

    if let Some(seed) = args.seed {
        config.game.seed = Some(seed);
    }
    if let Some(mode) = args.mode {
        config.game.mode = mode;
    }

    let (width, height) = config.game.canvas_size();
    log!(
        "Starting {}x{} board, mode {}",
        config.game.grid_width,
        config.game.grid_height,
        config.game.mode.name()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32 + 40.0, height as f32 + 140.0])
            .with_min_inner_size([width as f32 + 40.0, height as f32 + 140.0])
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(config)))),
    )?;

    Ok(())
}
