//! # Catalog Loader
//!
//! Runs the initialization sequence against a JSON fixture and prints what
//! the builder would show.
//!
//! ## Usage
//! ```bash
//! # Bundled menu, anonymous session
//! cargo run -p pizza-store --bin pizza-catalog
//!
//! # Custom menu
//! cargo run -p pizza-store --bin pizza-catalog -- --fixture ./menu.json
//!
//! # Logged in, so addresses and past orders are loaded too
//! PIZZA_AUTHENTICATED=1 cargo run -p pizza-store --bin pizza-catalog
//! ```

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use pizza_core::{DoughSpelling, EntityKind};
use pizza_store::{
    init_with_report, AuthEvent, JsonFixtureApi, PizzaConfig, Store, StoreEvent, StorePlugin,
    TracingPlugin, User,
};

const BUNDLED_FIXTURE: &str = include_str!("../../fixtures/catalog.json");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut fixture_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--fixture" | "-f" => {
                if i + 1 < args.len() {
                    fixture_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Pizza Catalog Loader");
                println!();
                println!("Usage: pizza-catalog [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>   Config file (default: platform config dir/pizza.toml)");
                println!("  -f, --fixture <PATH>  Catalog JSON fixture (default: bundled menu)");
                println!("  -h, --help            Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let config = PizzaConfig::load(config_path)?;
    init_tracing(&config.log.filter);

    let api = match fixture_path.or_else(|| config.catalog.fixture.clone()) {
        Some(path) => JsonFixtureApi::from_path(path)?,
        None => JsonFixtureApi::from_json_str(BUNDLED_FIXTURE)?,
    };

    let plugins: Vec<Arc<dyn StorePlugin>> = vec![Arc::new(TracingPlugin)];
    let store = Store::with_plugins(Default::default(), plugins);

    if config.session.authenticated {
        store.dispatch(StoreEvent::Auth(AuthEvent::SetSession(User {
            id: "local".into(),
            name: "Local User".into(),
            email: "user@example.com".into(),
            avatar: None,
            phone: None,
        })))?;
    }

    let (report, init_error) = init_with_report(&store, &api, &api).await;
    if let Some(err) = init_error {
        if store.read(|state| state.catalog.is_empty()) {
            return Err(err.into());
        }
        eprintln!("warning: {}", err);
    }

    println!("Pizza Catalog");
    println!("=============");
    for (kind, count) in &report.collections {
        println!("  {:<12} {:>3} items", kind.collection_name(), count);
    }
    println!(
        "  loaded in {} ms",
        (report.finished_at - report.started_at).num_milliseconds()
    );
    println!();

    let spelling = DoughSpelling::default();
    let (price, description) = store.read(|state| {
        Ok::<_, pizza_core::CoreError>((
            state.builder_price()?,
            state.builder_description(&spelling)?,
        ))
    })?;

    if let (Some(price), Some(description)) = (price, description) {
        println!("Builder default");
        println!("  {}", description.dough_and_size);
        println!("  {}", description.sauce);
        println!("  {}", description.ingredients);
        println!("  Итого: {}", price);
        println!();
    }

    if report.user_data_requested {
        let state = store.snapshot();
        println!("Past orders ({})", state.orders.orders.len());
        for order in &state.orders.orders {
            println!("  #{:<4} {}", order.id, state.order_total(order)?);
        }
        println!("Saved addresses: {}", state.orders.addresses.len());
    }

    let misc = store.read(|state| state.catalog.collection(EntityKind::Misc).len());
    println!("Extras on the menu: {}", misc);

    Ok(())
}

/// Installs the subscriber. `RUST_LOG` wins over the configured filter.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
