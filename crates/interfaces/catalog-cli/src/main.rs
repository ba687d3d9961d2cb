use catalog_app_core::ListQuery;
use catalog_cli::{commands, CliSort};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Base URL of the catalog service
    #[arg(
        long,
        global = true,
        env = catalog_config::ENV_API_URL,
        default_value = catalog_config::DEFAULT_API_URL
    )]
    api_url: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products, optionally filtered and sorted
    List {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        min_price: Option<f64>,
        #[arg(long)]
        max_price: Option<f64>,
        #[arg(long, value_enum, default_value_t = CliSort::Arrival)]
        sort: CliSort,
    },
    Add {
        name: String,
        #[arg(allow_hyphen_values = true)]
        price: String,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        price: Option<String>,
    },
    #[command(alias = "rm")]
    Delete {
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let default = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut kernel = commands::connect(&cli.api_url)?;

    match cli.command {
        Commands::List {
            search,
            min_price,
            max_price,
            sort,
        } => {
            let query = ListQuery {
                search,
                min_price,
                max_price,
                sort: sort.into(),
            };
            commands::cmd_list(&mut kernel, query).await?;
        }
        Commands::Add { name, price } => {
            commands::cmd_add(&mut kernel, name, &price).await?;
        }
        Commands::Update { id, name, price } => {
            commands::cmd_update(&mut kernel, id, name, price.as_deref()).await?;
        }
        Commands::Delete { id } => commands::cmd_delete(&mut kernel, id).await?,
    }

    Ok(())
}
