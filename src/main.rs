use clap::{Parser, Subcommand, builder::styling};
use eyre::Result;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use workflow_organizer::cli::{
    BrowseOptions, apply_browse_options, export_failure_message, export_workflow, load_config,
    load_table, render_columns, render_options, render_page,
};
use workflow_organizer::table::ArrayMatch;

// CLI Styling
const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::BrightWhite.on_default())
    .usage(styling::AnsiColor::BrightWhite.on_default())
    .literal(styling::AnsiColor::Green.on_default())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// Workflow Organizer: browse, filter and export snapshots of automation workflows
#[derive(Parser)]
#[command(name = "wfo", version, styles = STYLES)]
struct Cli {
    /// The dotenv file to source WFO_* settings from
    #[arg(short, long, global = true, default_value = ".env")]
    env: String,

    /// YAML file with table settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// More verbose logging
    #[arg(long, global = true)]
    debug: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of workflows
    List {
        /// JSON or NDJSON snapshot of workflow records
        snapshot: PathBuf,

        /// Substring filter on the workflow name
        #[arg(long)]
        name: Option<String>,

        /// Substring filter on the description
        #[arg(long)]
        description: Option<String>,

        /// Node type to filter by, repeatable
        #[arg(long = "node-type")]
        node_types: Vec<String>,

        /// Credential to filter by, repeatable
        #[arg(long = "credential")]
        credentials: Vec<String>,

        /// Search across node types and credentials
        #[arg(short, long)]
        search: Option<String>,

        /// Require every selected node type / credential instead of any
        #[arg(long)]
        match_all: bool,

        /// Sort as column[:asc|desc]
        #[arg(long)]
        sort: Option<String>,

        /// Zero-based page index
        #[arg(short, long, default_value_t = 0)]
        page: usize,

        /// Rows per page, overrides configuration
        #[arg(long)]
        page_size: Option<usize>,

        /// Column to hide, repeatable
        #[arg(long = "hide")]
        hidden: Vec<String>,
    },

    /// List the distinct node types and credentials available as filters
    Options {
        /// JSON or NDJSON snapshot of workflow records
        snapshot: PathBuf,
    },

    /// List the table columns
    Columns,

    /// Save one workflow's definition as workflow.json
    Export {
        /// JSON or NDJSON snapshot of workflow records
        snapshot: PathBuf,

        /// Id of the workflow to export
        id: String,

        /// Directory to write workflow.json to
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let dotenv = dotenvy::from_filename(&cli.env);

    let log_level = match cli.debug {
        true => "debug",
        false => "info",
    };
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", log_level);
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();

    if let Err(e) = dotenv {
        log::debug!("No environment loaded from {}: {}", cli.env, e);
    }

    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::List {
            snapshot,
            name,
            description,
            node_types,
            credentials,
            search,
            match_all,
            sort,
            page,
            page_size,
            hidden,
        } => {
            if let Some(page_size) = page_size {
                config.page_size = page_size;
            }
            if match_all {
                config.array_match = ArrayMatch::All;
            }
            config.validate()?;

            let mut table = load_table(&snapshot, config)?;
            let options = BrowseOptions {
                name,
                description,
                node_types,
                credentials,
                search,
                sort,
                page,
                hidden,
            };
            apply_browse_options(&mut table, &options)?;
            println!("{}", render_page(&table));
        }
        Commands::Options { snapshot } => {
            let table = load_table(&snapshot, config)?;
            println!("{}", render_options(&table));
        }
        Commands::Columns => {
            println!("{}", render_columns());
        }
        Commands::Export {
            snapshot,
            id,
            output_dir,
        } => {
            log::info!(
                "Exporting {} to {}",
                id.cyan(),
                output_dir.display().bright_black()
            );
            match export_workflow(&snapshot, &id, &output_dir, config) {
                Ok(path) => log::info!("✓ Saved {}", path.display().green()),
                Err(e) => {
                    eprintln!("{}", export_failure_message(&e).red());
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
