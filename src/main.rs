use analytics::{FilteredOrders, ReportEngine};
use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Table};
use configuration::Config;
use core_types::Order;
use datastore::{load_fixture, OrderCollection};
use std::fmt::Display;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the Orderlens report runner.
fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => handle_run(args)?,
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Analytical reports over an e-commerce order fixture.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the order fixture and run the full report battery.
    Run(RunArgs),
}

#[derive(Parser)]
struct RunArgs {
    /// Path to the JSON fixture of order records.
    #[arg(long, default_value = "mock_data.json")]
    fixture: PathBuf,

    /// Path to the report-parameter file (reference defaults apply if absent).
    #[arg(long, default_value = "config.toml")]
    config: String,
}

// ==============================================================================
// Run Command Logic
// ==============================================================================

/// Loads the configuration and fixture, then runs every report in a fixed
/// order. The fixture must load before any report executes; an empty
/// collection is not an error and still produces zero-count reports.
fn handle_run(args: RunArgs) -> anyhow::Result<()> {
    let config = configuration::load_config_from(&args.config)
        .context("failed to load report configuration")?;
    let collection = load_fixture(&args.fixture).context("failed to load order fixture")?;

    info!(records = collection.len(), "running report battery");

    let engine = ReportEngine::new();
    print_region_totals(&engine, &collection);
    print_product_frequencies(&engine, &collection);
    print_high_value_orders(&engine, &collection, &config);
    print_top_regions(&engine, &collection, &config);
    print_premium_orders(&engine, &collection, &config);
    print_orders_by_city_and_date(&engine, &collection, &config);

    Ok(())
}

// ==============================================================================
// Report Rendering
// ==============================================================================

fn print_region_totals(engine: &ReportEngine, collection: &OrderCollection) {
    let totals = engine.region_totals(collection);

    println!("Total no. of orders: {}", totals.total);
    println!("Number of orders per region:");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Region", "Orders"]);
    for row in &totals.per_region {
        table.add_row(vec![
            Cell::new(display_opt(row.region.as_ref())),
            Cell::new(row.count),
        ]);
    }
    println!("{table}");
}

fn print_product_frequencies(engine: &ReportEngine, collection: &OrderCollection) {
    let report = engine.product_frequencies(collection);

    println!("Product frequencies:");
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Product ID", "Frequency"]);
    for product in &report.products {
        table.add_row(vec![
            Cell::new(display_opt(product.product_id.as_ref())),
            Cell::new(product.frequency),
        ]);
    }
    println!("{table}");
}

fn print_high_value_orders(
    engine: &ReportEngine,
    collection: &OrderCollection,
    config: &Config,
) {
    let report = engine.high_value_orders(
        collection,
        &config.high_value.region,
        config.high_value.threshold,
    );
    println!(
        "Total high-value orders (>{}) in {}: {}",
        config.high_value.threshold,
        config.high_value.region,
        report.count()
    );
    print_order_lines(&report);
}

fn print_top_regions(engine: &ReportEngine, collection: &OrderCollection, config: &Config) {
    let report = engine.top_regions(
        collection,
        config.top_regions.threshold,
        config.top_regions.limit,
    );

    println!(
        "Top {} regions with orders above {}:",
        config.top_regions.limit, config.top_regions.threshold
    );
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Rank", "Region", "Orders"]);
    for row in &report.regions {
        table.add_row(vec![
            Cell::new(row.rank),
            Cell::new(display_opt(row.region.as_ref())),
            Cell::new(row.count),
        ]);
    }
    println!("{table}");
}

fn print_premium_orders(engine: &ReportEngine, collection: &OrderCollection, config: &Config) {
    let report = engine.premium_orders(
        collection,
        &config.premium.region,
        config.premium.threshold,
    );
    println!(
        "Total premium orders (>{}) in {}: {}",
        config.premium.threshold,
        config.premium.region,
        report.count()
    );
    print_order_lines(&report);
}

fn print_orders_by_city_and_date(
    engine: &ReportEngine,
    collection: &OrderCollection,
    config: &Config,
) {
    let report = engine.orders_by_city_and_date(
        collection,
        &config.city_date.city,
        &config.city_date.date,
    );
    println!(
        "Total orders placed in {} on {}: {}",
        config.city_date.city,
        config.city_date.date,
        report.count()
    );
    print_order_lines(&report);
}

/// Renders a matched record set as one "label: value" line per order.
/// Absent fields render as empty, never as an error.
fn print_order_lines(report: &FilteredOrders) {
    println!("Order details:");
    for order in &report.orders {
        println!("{}", format_order(order));
    }
}

fn format_order(order: &Order) -> String {
    format!(
        "Order ID: {}, Customer ID: {}, Product ID: {}, Quantity: {}, \
         Unit Price: {}, Order Date: {}, State: {}, Total Price: {}, \
         Premium Customer: {}, City: {}",
        display_opt(order.order_id.as_ref()),
        display_opt(order.customer_id.as_ref()),
        display_opt(order.product_id.as_ref()),
        display_opt(order.quantity.as_ref()),
        display_opt(order.unit_price.as_ref()),
        display_opt(order.order_date.as_ref()),
        display_opt(order.state.as_ref()),
        display_opt(order.total_price.as_ref()),
        display_opt(order.premium_customer.as_ref()),
        display_opt(order.city.as_ref()),
    )
}

fn display_opt<T: Display>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn absent_fields_render_as_empty() {
        let order = Order {
            order_id: Some(42),
            customer_id: None,
            product_id: None,
            quantity: None,
            unit_price: None,
            total_price: Some(dec!(19.99)),
            order_date: None,
            state: None,
            city: None,
            premium_customer: None,
        };

        let line = format_order(&order);
        assert!(line.contains("Order ID: 42,"));
        assert!(line.contains("Customer ID: ,"));
        assert!(line.contains("Total Price: 19.99,"));
    }
}
