// catalog_probe - drive the catalog against a live course service
//
// Applies filters from the command line, loads the first page and then
// keeps pressing "load more" (up to --pages pages), printing what the
// catalog page would display.
//
//   cargo run --bin catalog_probe --features cli-tools -- --search python --pages 3

use anyhow::Result;
use clap::Parser;
use course_catalog::web_app::api::HttpCourseSource;
use course_catalog::web_app::config::CatalogConfig;
use course_catalog::web_app::model::{Category, FilterState, SortKey};
use course_catalog::web_app::orchestrator::Catalog;
use course_catalog::web_app::state::FetchOutcome;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "catalog_probe", about = "Fetch course catalog pages the way the catalog page does")]
struct Args {
    /// Free-text search
    #[arg(long, default_value = "")]
    search: String,

    /// programming | design | data-analytics (or the literal label)
    #[arg(long)]
    category: Option<Category>,

    #[arg(long)]
    min_price: Option<i64>,

    #[arg(long)]
    max_price: Option<i64>,

    /// price_asc | price_desc | popularity
    #[arg(long)]
    sort: Option<SortKey>,

    /// Maximum number of pages to load
    #[arg(long, default_value_t = 1)]
    pages: u32,

    /// Course service base URL (defaults to COURSE_API_URL)
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let config = match &args.api_url {
        Some(url) => CatalogConfig::with_base_url(url.as_str()),
        None => CatalogConfig::from_env(),
    };

    let filters = FilterState {
        search_text: args.search.clone(),
        category: args.category,
        min_price: args.min_price,
        max_price: args.max_price,
        sort: args.sort,
    };

    println!("Querying {}", config.courses_url());
    let source = HttpCourseSource::new(&config)?;
    let mut catalog = Catalog::with_filters(source, filters);

    report(1, catalog.mount().await);
    for page in 2..=args.pages.max(1) {
        match catalog.load_more().await {
            Some(outcome) => report(page, outcome),
            None => break,
        }
    }

    if let Some(failure) = catalog.state().error() {
        anyhow::bail!("{} ({})", failure.user_message(), failure.message);
    }

    println!();
    for course in catalog.courses() {
        println!(
            "  #{:<4} {:<40} {:<18} {:>8}Тг {:>5} покупателей",
            course.id, course.name, course.category, course.price, course.customer_count
        );
    }

    let page = catalog.state().page();
    println!(
        "\n{} courses, page {}, {}",
        catalog.courses().len(),
        page.current_page,
        if page.has_more { "more available" } else { "no more pages" }
    );

    Ok(())
}

fn report(page: u32, outcome: FetchOutcome) {
    match outcome {
        FetchOutcome::Replaced { count } | FetchOutcome::Appended { count } => {
            println!("✓ page {page}: {count} courses");
        }
        FetchOutcome::Failed => println!("✗ page {page}: request failed"),
        FetchOutcome::Stale => println!("- page {page}: superseded"),
    }
}
