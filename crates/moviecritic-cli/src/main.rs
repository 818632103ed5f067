use clap::{ArgAction, Parser, Subcommand};
use commands::{browse, config, movies, reviews, Context};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;
mod render;

#[derive(Parser)]
#[command(name = "moviecritic")]
#[command(about = "MovieCritic - Browse movies and their reviews")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Movie service URL (overrides config and MOVIECRITIC_BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Write logs to this file instead of stderr (rotated daily)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List movies, optionally filtered by title
    Movies {
        /// Only show movies whose title contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show one movie and its reviews
    Show {
        /// Movie id
        id: String,

        /// Only show reviews whose comments contain this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Add a movie
    #[command(long_about = "Add a movie to the catalog. Fields not given on the command line are prompted for.")]
    AddMovie {
        #[arg(long)]
        name: Option<String>,

        /// Release date (YYYY-MM-DD)
        #[arg(long)]
        release_date: Option<String>,
    },
    /// Edit a movie's name or release date
    #[command(long_about = "Edit a movie. Fields not given keep their current values; both must end up non-empty.")]
    EditMovie {
        /// Movie id
        id: String,

        #[arg(long)]
        name: Option<String>,

        /// Release date (YYYY-MM-DD)
        #[arg(long)]
        release_date: Option<String>,
    },
    /// Delete a movie
    DeleteMovie {
        /// Movie id
        id: String,

        /// Don't ask for confirmation
        #[arg(short, long, action = ArgAction::SetTrue)]
        yes: bool,
    },
    /// Review a movie
    #[command(long_about = "Post a review for a movie. Fields not given on the command line are prompted for. Ratings are whole numbers from 1 to 10.")]
    Review {
        /// Movie id
        movie_id: String,

        /// Your name
        #[arg(long)]
        name: Option<String>,

        /// Rating from 1 to 10
        #[arg(long)]
        rating: Option<String>,

        #[arg(long)]
        comments: Option<String>,
    },
    /// Interactive session: search, open, add, edit and delete
    Browse,
    /// View or change settings
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the config file location
    Path,
    /// Set the movie service URL
    SetBaseUrl {
        url: String,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let settings = commands::load_settings(cli.base_url.as_deref())?;
    let log_file = cli.log_file.clone().or_else(|| settings.logging.file.clone());
    logging::init_logging(cli.verbose, cli.quiet, &settings.logging, log_file)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    // `config` must keep working when the configured base URL is invalid
    let connect = || Context::connect(settings.clone());

    match cli.command {
        Commands::Config { cmd } => config::run_config(cmd.unwrap_or(ConfigCommands::Show), &settings, &output),
        Commands::Movies { search } => movies::run_list(&connect()?, search, &output).await,
        Commands::Show { id, search } => reviews::run_show(&connect()?, id, search, &output).await,
        Commands::AddMovie { name, release_date } => {
            movies::run_add(&connect()?, name, release_date, &output).await
        }
        Commands::EditMovie { id, name, release_date } => {
            movies::run_edit(&connect()?, id, name, release_date, &output).await
        }
        Commands::DeleteMovie { id, yes } => movies::run_delete(&connect()?, id, yes, &output).await,
        Commands::Review { movie_id, name, rating, comments } => {
            reviews::run_review(&connect()?, movie_id, name, rating, comments, &output).await
        }
        Commands::Browse => browse::run_browse(&connect()?, &output).await,
    }
}
