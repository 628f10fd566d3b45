//! One-shot provisioning of the BI message-queue topology.
//!
//! Declares the exchange, queue, and binding that the messaging side of the
//! wider system expects to exist. Safe to re-run: declaring the same names
//! with the same parameters is a no-op on the broker.

use std::path::PathBuf;

use clap::Parser;
use lapin::options::{ExchangeDeclareOptions, QueueBindOptions, QueueDeclareOptions};
use lapin::types::FieldTable;
use lapin::{Connection, ConnectionProperties, ExchangeKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use deepchart::config::Config;

#[derive(Parser)]
#[command(name = "mq-init", about = "Declare the BI exchange, queue, and binding")]
struct Args {
    /// Path to the configuration file.
    #[arg(long, default_value = "deepchart.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::load(&args.config).await?;
    let mq = &config.mq;

    let connection = Connection::connect(&mq.uri, ConnectionProperties::default()).await?;
    let channel = connection.create_channel().await?;

    channel
        .exchange_declare(
            &mq.exchange,
            ExchangeKind::Direct,
            ExchangeDeclareOptions {
                durable: true,
                ..Default::default()
            },
            FieldTable::default(),
        )
        .await?;

    channel
        .queue_declare(
            &mq.queue,
            QueueDeclareOptions {
                durable: true,
                ..Default::default()
            },
            FieldTable::default(),
        )
        .await?;

    channel
        .queue_bind(
            &mq.queue,
            &mq.exchange,
            &mq.routing_key,
            QueueBindOptions::default(),
            FieldTable::default(),
        )
        .await?;

    info!(
        exchange = %mq.exchange,
        queue = %mq.queue,
        routing_key = %mq.routing_key,
        "exchange and queue declared and bound"
    );

    channel.close(200, "OK").await?;
    connection.close(200, "OK").await?;

    Ok(())
}
