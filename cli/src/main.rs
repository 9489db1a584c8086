use clap::{Parser, Subcommand};
use dotenv::dotenv;
use job_api::{ApiClient, ApiConfig, CompanyCreate, JobCreate, JobFilters};
use job_query::QueryClient;
use thiserror::Error;

mod browse;
mod create;
mod routes;
mod show;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Api(#[from] job_api::Error),
    #[error("{0}")]
    Query(#[from] job_query::QueryError),
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Page(String),
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base url, overrides JOB_API_URL
    #[clap(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive listing, starting at `path` ("/" or "/companies")
    Browse {
        #[clap(default_value = "/")]
        path: String,
    },
    /// Print one page of jobs
    Jobs {
        #[clap(long)]
        search: Option<String>,
        #[clap(long)]
        location: Option<String>,
        #[clap(long)]
        company_id: Option<i64>,
        #[clap(long, default_value_t = 1)]
        page: u32,
        #[clap(long, default_value_t = job_api::types::DEFAULT_PAGE_SIZE)]
        size: u32,
    },
    Job {
        id: i64,
    },
    Companies {
        #[clap(long)]
        search: Option<String>,
    },
    CreateJob {
        #[clap(long)]
        title: String,
        #[clap(long)]
        job_url: String,
        #[clap(long)]
        company_id: i64,
        #[clap(long)]
        location: Option<String>,
        #[clap(long)]
        employment_type: Option<String>,
        #[clap(long)]
        external_id: Option<String>,
    },
    CreateCompany {
        #[clap(long)]
        name: String,
        #[clap(long)]
        career_page_url: String,
        #[clap(long)]
        logo_url: Option<String>,
    },
}

async fn run(args: Cli) -> Result<()> {
    let config = match args.api_url {
        Some(url) => ApiConfig::new(url),
        None => ApiConfig::from_env(),
    };
    let api = ApiClient::new(&config)?;
    log::info!("Using backend at {}", api.base_url());
    let client = QueryClient::new();
    match args.command {
        Commands::Browse { path } => browse::browse(client, api, &path).await,
        Commands::Jobs {
            search,
            location,
            company_id,
            page,
            size,
        } => {
            let filters = JobFilters {
                search,
                location,
                company_id,
                page: Some(page),
                size: Some(size),
            };
            show::jobs(&client, &api, filters).await
        }
        Commands::Job { id } => show::job(&client, &api, id).await,
        Commands::Companies { search } => show::companies(&client, &api, search).await,
        Commands::CreateJob {
            title,
            job_url,
            company_id,
            location,
            employment_type,
            external_id,
        } => {
            let payload = JobCreate {
                title,
                location,
                employment_type,
                job_url,
                external_id,
                company_id,
            };
            create::create_job(&client, &api, payload).await
        }
        Commands::CreateCompany {
            name,
            career_page_url,
            logo_url,
        } => {
            let payload = CompanyCreate::new(name, career_page_url, logo_url);
            create::create_company(&client, &api, payload).await
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    if let Err(e) = run(args).await {
        log::error!("Command failed: {:?}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
