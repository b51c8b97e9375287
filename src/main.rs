//! Folio CLI - portfolio and blog data core.

use clap::Parser;
use folio::cli::{Cli, Commands, ContactCommands, PageCommands};
use folio::commands::{self, CommandResult};
use folio::storage;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logging goes to stderr so stdout stays parseable JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let human = cli.human_readable;

    // Determine data dir: --data-dir flag > FOLIO_DATA_DIR env > platform default
    let data_dir = resolve_data_dir(cli.data_dir, human);

    let result = run_command(cli.command, &data_dir, human);

    if let Err(e) = result {
        if human {
            eprintln!("Error: {}", e);
        } else {
            eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
        }
        process::exit(1);
    }
}

/// Resolve the data directory from the CLI flag or the platform default.
fn resolve_data_dir(explicit: Option<PathBuf>, human: bool) -> PathBuf {
    match explicit {
        Some(path) => path,
        None => match storage::default_data_dir() {
            Ok(path) => path,
            Err(e) => {
                if human {
                    eprintln!("Error: {}", e);
                } else {
                    eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
                }
                process::exit(1);
            }
        },
    }
}

fn run_command(command: Commands, data_dir: &Path, human: bool) -> folio::Result<()> {
    match command {
        Commands::Init => output(&commands::init(data_dir)?, human),

        Commands::Page { command } => match command {
            PageCommands::Home => output(&commands::page_home(data_dir)?, human),
            PageCommands::About => output(&commands::page_about(data_dir)?, human),
            PageCommands::Projects {
                category,
                search,
                page,
            } => output(
                &commands::page_projects(data_dir, category.as_deref(), search.as_deref(), page)?,
                human,
            ),
            PageCommands::Project { slug } => {
                output(&commands::page_project(data_dir, &slug)?, human)
            }
            PageCommands::Blog {
                category,
                search,
                page,
            } => output(
                &commands::page_blog(data_dir, category.as_deref(), search.as_deref(), page)?,
                human,
            ),
            PageCommands::Post { slug } => output(&commands::page_post(data_dir, &slug)?, human),
            PageCommands::Services => output(&commands::page_services(data_dir)?, human),
        },

        Commands::Search { query } => output(&commands::search(data_dir, &query)?, human),

        Commands::Contact { command } => match command {
            ContactCommands::Submit {
                name,
                email,
                phone,
                subject,
                message,
            } => output(
                &commands::contact_submit(data_dir, name, email, phone, subject, message)?,
                human,
            ),
            ContactCommands::List { status } => {
                output(&commands::contact_list(data_dir, status.as_deref())?, human)
            }
            ContactCommands::Read { id } => output(&commands::contact_read(data_dir, id)?, human),
            ContactCommands::Replied { id } => {
                output(&commands::contact_replied(data_dir, id)?, human)
            }
        },

        Commands::Project { command } => output(&commands::project(data_dir, command)?, human),
        Commands::Post { command } => output(&commands::post(data_dir, command)?, human),
        Commands::Service { command } => output(&commands::service(data_dir, command)?, human),
        Commands::Skill { command } => output(&commands::skill(data_dir, command)?, human),
        Commands::Testimonial { command } => {
            output(&commands::testimonial(data_dir, command)?, human)
        }
    }

    Ok(())
}

/// Print a command result to stdout in the selected format.
fn output<T: CommandResult>(result: &T, human: bool) {
    if human {
        println!("{}", result.to_human().trim_end());
    } else {
        println!("{}", result.to_json());
    }
}
