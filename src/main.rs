use clap::Parser;
use strum::IntoEnumIterator;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use railbook::cli::Args;
use railbook::config::NetworkConfig;
use railbook::schema::FareClass;
use railbook::{Outcome, load_config, run};

fn show_list(items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        println!("{}: {}", i + 1, item);
    }
}

fn show_class(config: &NetworkConfig) {
    for (i, class) in FareClass::iter().enumerate() {
        println!("{}: {} (Rs {:.2}/km)", i + 1, class, config.rates.rate(class));
    }
}

fn show_route(config: &NetworkConfig) -> anyhow::Result<()> {
    for route in config.fare_engine()?.table().routes() {
        println!("{} - {}: {} km", route.from, route.to, route.km);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    if args.list_station {
        show_list(&config.stations);
        return Ok(());
    }

    if args.list_train {
        show_list(&config.trains);
        return Ok(());
    }

    if args.list_class {
        show_class(&config);
        return Ok(());
    }

    if args.list_route {
        return show_route(&config);
    }

    let stdin = std::io::stdin();
    if let Outcome::Rejected(_) = run(&args, &config, &mut stdin.lock())? {
        std::process::exit(2);
    }
    Ok(())
}
