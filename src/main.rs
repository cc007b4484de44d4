//! Context Vault CLI entry point.

use clap::Parser;
use cv::cli::commands;
use cv::cli::{Cli, Commands, OutputFormat};
use cv::error::Error;
use std::process::ExitCode;
use std::sync::atomic::Ordering;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.silent {
        cv::SILENT.store(true, Ordering::Relaxed);
    }
    if cli.dry_run {
        cv::DRY_RUN.store(true, Ordering::Relaxed);
    }
    if cli.format == OutputFormat::Csv {
        cv::CSV_OUTPUT.store(true, Ordering::Relaxed);
    }
    if cli.no_color {
        colored::control::set_override(false);
    }

    init_tracing(cli.verbose, cli.quiet);

    // --json, --format json, or piped stdout
    let json = cli.json
        || cli.format == OutputFormat::Json
        || !std::io::IsTerminal::is_terminal(&std::io::stdout());

    match run(&cli, json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if json {
                eprintln!("{}", e.to_structured_json());
            } else if !cli.quiet {
                if let Some(hint) = e.hint() {
                    eprintln!("Error: {e}\n  Hint: {hint}");
                } else {
                    eprintln!("Error: {e}");
                }
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    if quiet {
        return;
    }

    // RUST_LOG wins over -v
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug,rusqlite=info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: &Cli, json: bool) -> Result<(), Error> {
    let db = cli.db.as_ref();

    match &cli.command {
        Commands::Add(args) => commands::item::execute_add(args, db, json),
        Commands::List(args) => commands::item::execute_list(args, db, json),
        Commands::Show { id } => commands::item::execute_show(id, db, json),
        Commands::Edit(args) => commands::item::execute_edit(args, db, json),
        Commands::Delete { id } => commands::item::execute_delete(id, db, json),
        Commands::Copy { id, stdout } => commands::item::execute_copy(id, *stdout, db, json),

        Commands::Export { output } => {
            commands::transfer::execute_export(output.as_deref(), db, json)
        }
        Commands::Import { path } => commands::transfer::execute_import(path, db, json),

        Commands::Tools => commands::catalog::execute_tools(json),
        Commands::Types => commands::catalog::execute_types(json),
        Commands::Theme { theme } => commands::theme::execute(*theme, db, json),

        Commands::Version => commands::version::execute(json),
        Commands::Completions { shell } => commands::completions::execute(shell),
    }
}
