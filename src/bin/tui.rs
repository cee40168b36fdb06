use anyhow::Result;
use orthotrack::cli::{self, CliArgs, Command};
use orthotrack::config::Config;
use orthotrack::context::{AppContext, StandardContext};
use orthotrack::session::Session;
use std::env;

fn main() -> Result<()> {
    let args = match CliArgs::parse(env::args().skip(1)) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    if args.command == Command::Help {
        cli::print_help("orthotrack");
        return Ok(());
    }

    let ctx = StandardContext::new(args.root.clone());
    let mut cfg = match Config::load_or_init(&ctx) {
        Ok(c) => c,
        Err(e) => {
            // A missing file falls back to defaults; this is a parse or write failure.
            eprintln!("Error loading configuration:\n{}", e);
            std::process::exit(1);
        }
    };
    if let Some(seed) = args.seed {
        cfg.rng_seed = Some(seed);
    }

    if let Err(e) = orthotrack::logging::init(&ctx, cfg.log_level_filter()) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    log::info!(
        "Starting orthotrack v{} (config: {:?})",
        env!("CARGO_PKG_VERSION"),
        ctx.get_config_file_path().ok()
    );

    match args.command {
        Command::Report | Command::Export => {
            let mut session = Session::from_config(&cfg);
            let count = args.count.unwrap_or(cfg.synthetic_count);
            session.generate_synthetic_data(count);

            if args.command == Command::Report {
                print!("{}", cli::render_text_report(&mut session));
            } else {
                println!("{}", serde_json::to_string_pretty(session.list_records())?);
            }
            Ok(())
        }
        Command::Tui => orthotrack::tui::run(Session::from_config(&cfg)),
        Command::Help => Ok(()),
    }
}
