//! site-content - read the real-estate website content from the command line
//!
//! Usage:
//! ```bash
//! # Company record as seen by the site header and footer
//! site-content company
//!
//! # Published apartments from 100k, featured only
//! site-content properties --type apartment --min-price 100000 --featured
//!
//! # Free-text search narrowed to one city
//! site-content search jardim --city "São Paulo"
//!
//! # Newest three blog posts
//! site-content posts --limit 3
//! ```
//!
//! Credentials come from `SUPABASE_URL` and `SUPABASE_ANON_KEY`
//! (`SUPABASE_SERVICE_ROLE_KEY` with `--admin`).

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use site_content::domain::CompanyProvider;
use site_content::{Config, PropertyFilters, SiteContentApi, SiteContentModule};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "site-content",
    about = "Real-estate site content reader",
    long_about = "Reads company settings, branding, property listings and blog posts from the site backend."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// YAML configuration file, overlaid by the environment
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Query with the service-role key
    #[arg(long, global = true)]
    admin: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Show the published company settings
    Company,

    /// Show the site branding
    Branding,

    /// List published properties
    Properties {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show one published property
    Property {
        /// Property slug
        slug: String,
    },

    /// List the newest featured properties
    Featured {
        /// Maximum number of properties (defaults to the configured limit)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Search published properties by title, description or neighborhood
    Search {
        /// Search term
        term: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List distinct property types
    Types,

    /// List distinct cities
    Cities,

    /// List published blog posts, newest first
    Posts {
        /// Maximum number of posts
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show one published blog post
    Post {
        /// Post slug
        slug: String,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Property type
    #[arg(long = "type")]
    property_type: Option<String>,

    /// Minimum price (inclusive)
    #[arg(long)]
    min_price: Option<f64>,

    /// Maximum price (inclusive)
    #[arg(long)]
    max_price: Option<f64>,

    /// City
    #[arg(long)]
    city: Option<String>,

    /// Minimum number of bedrooms
    #[arg(long)]
    bedrooms: Option<u32>,

    /// Featured properties only
    #[arg(long)]
    featured: bool,
}

impl From<FilterArgs> for PropertyFilters {
    fn from(args: FilterArgs) -> Self {
        PropertyFilters {
            property_type: args.property_type,
            min_price: args.min_price,
            max_price: args.max_price,
            city: args.city,
            bedrooms: args.bedrooms,
            featured: args.featured,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref())?;
    info!(url = %config.url, "loaded site content configuration");

    let module = SiteContentModule::new();
    module.init(config)?;

    let api = if cli.admin {
        module.admin_client()?
    } else {
        module.client()?
    };

    match cli.command {
        Command::Company => {
            let provider = if cli.admin {
                module.admin_company()?
            } else {
                module.company()?
            };
            show_company(&provider).await;
        }
        Command::Branding => print_optional(api.fetch_branding().await, "branding"),
        Command::Properties { filters } => {
            print_list(&api.fetch_properties(&filters.into()).await);
        }
        Command::Property { slug } => print_optional(api.fetch_property(&slug).await, &slug),
        Command::Featured { limit } => {
            let limit = match limit {
                Some(limit) => limit,
                None => module.featured_limit()?,
            };
            print_list(&api.fetch_featured_properties(limit).await);
        }
        Command::Search { term, filters } => {
            print_list(&api.search_properties(&term, &filters.into()).await);
        }
        Command::Types => print_names(&api.fetch_property_types().await),
        Command::Cities => print_names(&api.fetch_cities().await),
        Command::Posts { limit } => print_list(&api.fetch_blog_posts(limit).await),
        Command::Post { slug } => print_optional(api.fetch_blog_post(&slug).await, &slug),
    }

    Ok(())
}

async fn show_company(provider: &CompanyProvider) {
    provider.load().await;

    if let Some(message) = provider.error() {
        eprintln!("{}", message);
    }

    println!("{}", provider.display_name());
    let address = provider.formatted_address();
    if !address.is_empty() {
        println!("{}", address);
    }
    if let Some(company) = provider.company() {
        println!("{:#?}", provider.contact_or_default());
        println!("{:#?}", company.business());
        println!("{:#?}", company.social());
    }
}

fn print_optional<T: std::fmt::Debug>(value: Option<T>, what: &str) {
    match value {
        Some(value) => println!("{:#?}", value),
        None => eprintln!("{} not found", what),
    }
}

fn print_list<T: std::fmt::Debug>(items: &[T]) {
    for item in items {
        println!("{:#?}", item);
    }
    eprintln!("{} result(s)", items.len());
}

fn print_names(names: &[String]) {
    for name in names {
        println!("{}", name);
    }
}
