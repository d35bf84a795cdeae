use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let config = flowershop_demo::DemoConfig::from_env()?;
    flowershop_observability::init(config.log_format);

    let shop = flowershop_demo::run(&config)?;

    let snapshot = serde_json::to_string_pretty(&shop.snapshot())
        .context("failed to render inventory snapshot")?;
    println!("{snapshot}");

    for line in shop.restock_report() {
        tracing::info!(
            bouquet = %line.bouquet,
            quantity = line.quantity,
            suggested_order = line.suggested_order,
            "restock needed"
        );
    }

    Ok(())
}
