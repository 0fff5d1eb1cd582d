use std::process::ExitCode;

use dabs_explorer::{render, DabsError, DabsExplorer, Result, Screen, Settings, View};
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "usage: dabs-explorer [dashboard|products|inventory|stores|trending] [key=value ...]
  products:  search=<text> category=<name> page=<n>
  inventory: sku=<sku> store=<store id>
  stores:    search=<text> store=<store id>";

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the rendered view.
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(std::env::args().skip(1).collect()).await {
        Ok(code) => code,
        Err(DabsError::InvalidArgument(msg)) => {
            eprintln!("{}\n{}", msg, USAGE);
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!(error = %e, "dabs-explorer failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Vec<String>) -> Result<ExitCode> {
    let mut args = args.into_iter();
    let view: View = match args.next() {
        Some(name) => name.parse()?,
        None => View::default(),
    };
    let filters = args
        .map(|arg| match arg.split_once('=') {
            Some((k, v)) => Ok((k.to_string(), v.to_string())),
            None => Err(DabsError::InvalidArgument(format!("Expected key=value, got {}", arg))),
        })
        .collect::<Result<Vec<_>>>()?;

    let settings = Settings::load()?;
    let explorer = DabsExplorer::builder().settings(settings).build()?;
    tracing::info!(%explorer, view = %view, "starting");

    let mut shell = explorer.shell(view);
    shell.settle().await;
    apply_filters(shell.screen_mut(), &filters).await?;

    println!("{}", render::page(shell.screen()));

    Ok(if shell.error().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

async fn apply_filters(screen: &mut Screen, filters: &[(String, String)]) -> Result<()> {
    let get = |key: &str| {
        filters
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };
    let allowed: &[&str] = match screen.view() {
        View::Products => &["search", "category", "page"],
        View::Inventory => &["sku", "store"],
        View::Stores => &["search", "store"],
        View::Dashboard | View::Trending => &[],
    };
    if let Some((key, _)) = filters.iter().find(|(k, _)| !allowed.contains(&k.as_str())) {
        return Err(DabsError::InvalidArgument(format!(
            "Filter {} does not apply to the {} view",
            key,
            screen.view()
        )));
    }

    match screen {
        Screen::Products(products) => {
            let changed_search = get("search").is_some_and(|s| products.set_search(s));
            let changed_category = get("category").is_some_and(|c| products.set_category(c));
            if changed_search || changed_category {
                products.settle().await;
            }
            if let Some(raw) = get("page") {
                let page: u64 = raw
                    .parse()
                    .map_err(|_| DabsError::InvalidArgument(format!("Invalid page: {}", raw)))?;
                if page == 0 {
                    return Err(DabsError::InvalidArgument("Pages are numbered from 1".into()));
                }
                if products.go_to_page(page - 1) {
                    products.settle().await;
                } else if page > 1 {
                    tracing::warn!(page, "page out of range; staying on page 1");
                }
            }
        }
        Screen::Inventory(inventory) => {
            inventory.set_sku(get("sku").unwrap_or_default());
            inventory.set_store_id(get("store").unwrap_or_default());
            // A missing SKU and store is reported by the rendered view.
            if inventory.search().is_ok() {
                inventory.settle().await;
            }
        }
        Screen::Stores(stores) => {
            if let Some(term) = get("search") {
                stores.set_search(term);
            }
            if let Some(id) = get("store") {
                if !stores.select(id) {
                    tracing::warn!(store = id, "no such store");
                }
            }
        }
        Screen::Dashboard(_) | Screen::Trending(_) => {}
    }
    Ok(())
}
