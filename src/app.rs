use crate::cli::{Cli, Commands};
use skindash::routine::{Catalog, Period, clock};
use skindash::ui::state::Screen;
use skindash::{config, ui};
use std::path::PathBuf;
use std::process;

pub fn run(cli: Cli) {
    if cli.debug || cfg!(feature = "dev-logging") {
        init_debug_logging();
    }

    // Handle subcommands first
    if let Some(command) = cli.command {
        match command {
            Commands::Show { period, json } => handle_show(cli.catalog, period, json),
            Commands::CheckCatalog { file } => handle_check_catalog(file),
            Commands::InitConfig => handle_init_config(),
        }
        return;
    }

    let config = config::Config::load().unwrap_or_default();

    // Forced period from CLI only; the default path is always clock-derived
    let period_override = match cli.period.as_deref().map(parse_active_period).transpose() {
        Ok(period) => period,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    // Startup screen: CLI flag > config > default
    let start_screen = match cli.screen.as_deref() {
        Some(name) => match Screen::from_name(name) {
            Some(screen) => Some(screen),
            None => {
                eprintln!(
                    "Error: unknown screen '{}' (expected home, routines, products or profile)",
                    name
                );
                process::exit(2);
            }
        },
        None => None,
    };

    // Catalog: CLI flag > config > built-in
    let catalog = match load_catalog(cli.catalog.or_else(|| config.defaults.catalog.clone())) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    // Launch TUI (default behavior)
    if let Err(e) = ui::run_ui_with_options(catalog, start_screen, period_override, &config) {
        eprintln!("Error running UI: {}", e);
        process::exit(1);
    }
}

fn parse_active_period(s: &str) -> Result<Period, String> {
    match s.parse::<Period>() {
        Ok(Period::Both) => Err("'both' is not a selectable period".to_string()),
        Ok(period) => Ok(period),
        Err(e) => Err(e.to_string()),
    }
}

fn load_catalog(path: Option<PathBuf>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => Catalog::load(&path),
        None => Ok(Catalog::embedded()),
    }
}

fn handle_show(catalog_path: Option<PathBuf>, period: Option<String>, json: bool) {
    let config = config::Config::load().unwrap_or_default();

    let catalog = match load_catalog(catalog_path.or(config.defaults.catalog)) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    let period = match period.as_deref() {
        Some(s) => match parse_active_period(s) {
            Ok(period) => period,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(2);
            }
        },
        None => clock::current_period(&chrono::Local::now()),
    };

    let products = catalog.products_for(period);

    if json {
        match serde_json::to_string_pretty(&products) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    println!("{} routine, {} steps:", period, products.len());
    for (index, product) in products.iter().enumerate() {
        println!("{:>2}. [{}] {}", index + 1, product.category, product.name);
    }
}

fn handle_check_catalog(file: PathBuf) {
    match Catalog::load(&file) {
        Ok(catalog) => {
            let morning = catalog.products_for(Period::Morning).len();
            let evening = catalog.products_for(Period::Evening).len();
            println!(
                "Catalog OK: {} products ({} morning, {} evening)",
                catalog.len(),
                morning,
                evening
            );
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn handle_init_config() {
    match config::Config::load() {
        Ok(cfg) => {
            match config::Config::config_path() {
                Ok(path) => println!("Config loaded successfully from {}", path.display()),
                Err(e) => println!("Config loaded, but config path unknown: {:#}", e),
            }
            println!("{:#?}", cfg);
        }
        Err(e) => {
            println!("Config missing or invalid: {:#}", e);
            println!("Creating default config...");

            let cfg = config::Config::default();
            if let Err(err) = cfg.save() {
                eprintln!("Failed to save default config: {:#}", err);
                process::exit(1);
            } else {
                match config::Config::config_path() {
                    Ok(path) => println!("Default config saved to {}", path.display()),
                    Err(e) => println!("Default config saved (path unknown): {:#}", e),
                }
            }
        }
    }
}

fn init_debug_logging() {
    use std::sync::Arc;

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("skindash.log")
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: could not open skindash.log: {}", e);
            return;
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
