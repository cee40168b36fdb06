// File: ./src/cli.rs
//! Command-line parsing, help text and the plain-text `report` output.
use crate::model::CategoryField;
use crate::session::Session;
use anyhow::{Result, anyhow};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tui,
    Report,
    Export,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: Command,
    pub root: Option<PathBuf>,
    pub seed: Option<u64>,
    pub count: Option<usize>,
}

impl CliArgs {
    /// Parses arguments, excluding the binary name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = CliArgs {
            command: Command::Tui,
            root: None,
            seed: None,
            count: None,
        };

        let mut iter = args.into_iter().map(Into::into);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" | "help" => out.command = Command::Help,
                "report" => out.command = Command::Report,
                "export" => out.command = Command::Export,
                "-r" | "--root" => {
                    let v = iter.next().ok_or_else(|| anyhow!("--root requires a path"))?;
                    out.root = Some(PathBuf::from(v));
                }
                "--seed" => {
                    let v = iter.next().ok_or_else(|| anyhow!("--seed requires a number"))?;
                    out.seed = Some(v.parse::<u64>().map_err(|_| anyhow!("Invalid seed '{}'", v))?);
                }
                "-n" | "--count" => {
                    let v = iter.next().ok_or_else(|| anyhow!("--count requires a number"))?;
                    out.count = Some(v.parse::<usize>().map_err(|_| anyhow!("Invalid count '{}'", v))?);
                }
                other => return Err(anyhow!("Unknown argument '{}'. Try --help.", other)),
            }
        }
        Ok(out)
    }
}

pub fn print_help(binary_name: &str) {
    println!(
        "Orthotrack v{} - Orthopedic procedure tracker (TUI)",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>] [--seed <n>]", binary_name);
    println!("    {} report [--count <n>] [--seed <n>]", binary_name);
    println!("    {} export [--count <n>] [--seed <n>]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and logs.");
    println!("    --seed <n>            Seed the random generator (reproducible test data).");
    println!("    -n, --count <n>       Number of synthetic records for report/export.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("COMMANDS:");
    println!("    report    Generate a synthetic session and print every report as text");
    println!("    export    Generate a synthetic session and print the records as JSON");
    println!();
    println!("Records live only for the duration of the session; nothing is saved.");
}

/// Renders the dashboard, monthly cross-tab and forecast as plain text.
pub fn render_text_report(session: &mut Session) -> String {
    let mut out = String::new();

    let dashboard = match session.dashboard() {
        Ok(d) => d,
        Err(e) => return format!("{}\n", e),
    };

    let s = dashboard.summary;
    let _ = writeln!(out, "== Dashboard ==");
    let _ = writeln!(
        out,
        "Procedures: {}  Hospitals: {}  Regions: {}  Staff: {}",
        s.procedures, s.hospitals, s.regions, s.staff
    );

    let _ = writeln!(out, "\n== Monthly Growth ==");
    for (period, count) in &dashboard.monthly {
        let _ = writeln!(out, "{}  {:>4}", period, count);
    }

    for (title, counts) in [
        (CategoryField::Region, &dashboard.regions),
        (CategoryField::Staff, &dashboard.top_staff),
    ] {
        let _ = writeln!(out, "\n== {} Distribution ==", title);
        for (name, count) in counts {
            let _ = writeln!(out, "{:<20} {:>4}", name, count);
        }
    }

    let _ = writeln!(out, "\n== Monthly Report ==");
    for row in session.list_cross_tab() {
        let _ = writeln!(out, "{}  {:<20} {:>4}", row.period, row.region, row.count);
    }

    let _ = writeln!(out, "\n== Forecast ==");
    let horizon = session.forecast_horizon;
    match session.forecast_next(horizon) {
        Ok(points) => {
            for p in points {
                let marker = if p.projected { " (projected)" } else { "" };
                let _ = writeln!(out, "{}  {:>4}{}", p.period, p.value, marker);
            }
        }
        Err(e) => {
            let _ = writeln!(out, "{}", e);
        }
    }

    out
}
