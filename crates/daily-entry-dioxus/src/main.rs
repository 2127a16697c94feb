use daily_entry::io;
use daily_entry::ui::App;
use daily_entry_config::Config;
use dioxus::prelude::*;
use std::env;
use std::path::PathBuf;
use std::process;

/// Text the editor opens with, handed to the root component through context
#[derive(Clone)]
struct Seed(Option<String>);

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("daily-entry starting up");

    let entry_path = resolve_entry_path();
    let seed = match entry_path {
        Some(path) => match io::read_entry(&path) {
            Ok(Some(content)) => {
                log::info!("Loaded entry from {}", path.display());
                Some(content)
            }
            Ok(None) => {
                log::info!("No entry at {}, starting empty", path.display());
                None
            }
            Err(e) => {
                log::warn!("Failed to read entry {}: {e}", path.display());
                None
            }
        },
        None => None,
    };

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .with_context(Seed(seed))
        .launch(app_root);
}

/// CLI argument wins, then the config file, otherwise nothing to seed from
fn resolve_entry_path() -> Option<PathBuf> {
    let args: Vec<String> = env::args().collect();
    let program_name = args
        .first()
        .cloned()
        .unwrap_or_else(|| "daily-entry".to_string());

    match args.len() {
        2 => {
            let path = PathBuf::from(&args[1]);
            log::info!("Using entry path from CLI argument: {}", path.display());
            Some(path)
        }
        1 => match Config::load() {
            Ok(Some(config)) => {
                log::info!(
                    "Using entry path from config: {}",
                    config.entry_path.display()
                );
                Some(config.entry_path)
            }
            Ok(None) => {
                log::info!(
                    "No config file at {}, starting with an empty entry",
                    Config::config_path().display()
                );
                None
            }
            Err(e) => {
                log::error!("Config::load() failed: {e}");
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {program_name} [entry-file]");
                process::exit(1);
            }
        },
        _ => {
            eprintln!("Usage: {program_name} [entry-file]");
            process::exit(1);
        }
    }
}

fn app_root() -> Element {
    let Seed(initial_content) = use_context::<Seed>();

    rsx! {
        App { initial_content }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("daily-entry")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
