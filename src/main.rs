use std::sync::Arc;

use clap::Parser;
use log::{debug, info};

use github_trending::{
    GITHUB_API_ENDPOINT, ListController, RestFetcher, StdResult, SystemClock,
};

/// Command line arguments for the trending repositories list
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// GitHub REST API base URL
    #[arg(short, long, env = "GITHUB_API_ENDPOINT", default_value = GITHUB_API_ENDPOINT)]
    endpoint: String,

    /// Number of additional pages loaded after the first one
    #[arg(short, long, default_value_t = 0)]
    more: u32,

    /// Refresh the current page once the pages are loaded
    #[arg(short, long)]
    refresh: bool,

    /// Print the repositories as JSON instead of text rows
    #[arg(short, long)]
    json: bool,
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("Arguments: {args:?}");

    let controller = build_list_controller(&args)?;
    controller.load_initial().await;
    for _ in 0..args.more {
        controller.load_more().await;
    }
    if args.refresh {
        controller.refresh().await;
    }

    render(&controller, args.json).await?;
    info!(
        "Listed {} repositories, page cursor at {}",
        controller.items().await.len(),
        controller.page().await
    );

    Ok(())
}

fn build_list_controller(args: &Args) -> StdResult<ListController> {
    let fetcher = Arc::new(RestFetcher::try_new(&args.endpoint)?);

    Ok(ListController::new(fetcher, Arc::new(SystemClock)))
}

async fn render(controller: &ListController, json: bool) -> StdResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&controller.items().await)?);
        return Ok(());
    }

    for (key, item) in controller.keyed_items().await {
        println!("{key}\t{item}");
    }
    println!("page: {}", controller.page().await);

    Ok(())
}
