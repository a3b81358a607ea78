use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use fondash::core::category::Category;
use fondash::log::init_logging;
use fondash::view::{CategoryFilter, SortKey, ViewState};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone)]
struct ViewArgs {
    /// Filter by canonical category key (e.g. hisse-senedi, karma)
    #[arg(long)]
    category: Option<Category>,

    /// Case-insensitive search over fund code and name
    #[arg(long, default_value = "")]
    search: String,

    /// Sort column: daily, weekly, monthly or yearly
    #[arg(long, default_value = "daily")]
    sort: SortKey,

    /// Sort low to high instead of high to low
    #[arg(long)]
    ascending: bool,
}

impl From<ViewArgs> for ViewState {
    fn from(args: ViewArgs) -> ViewState {
        ViewState {
            filter: args
                .category
                .map_or(CategoryFilter::All, CategoryFilter::One),
            search: args.search,
            sort: args.sort,
            ascending: args.ascending,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display investor movers and the fund performance table
    Dashboard(ViewArgs),
    /// Display the fund performance table
    Funds(ViewArgs),
    /// Display funds with the largest investor-count growth
    Investors,
}

impl From<Commands> for fondash::AppCommand {
    fn from(cmd: Commands) -> fondash::AppCommand {
        match cmd {
            Commands::Dashboard(args) => fondash::AppCommand::Dashboard(args.into()),
            Commands::Funds(args) => fondash::AppCommand::Funds(args.into()),
            Commands::Investors => fondash::AppCommand::Investors,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fondash::cli::setup::run(),
        Some(cmd) => fondash::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
