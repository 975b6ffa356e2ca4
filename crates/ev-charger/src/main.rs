use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ev_charger::DeviceService;
use ev_charger::host::format_reading;
use infrastructure::config::ServiceConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to config directory
    #[arg(long, default_value = "config")]
    config_dir: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List configured station groups
    Devices,

    /// Read resources of a station group
    Read {
        device: String,
        #[arg(required = true)]
        resources: Vec<String>,
    },

    /// Write one resource of a station group
    Write {
        device: String,
        resource: String,
        value: String,
    },
}

async fn run() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,ev_charger=debug,application=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    info!("🔌 EV Charger Device Service Starting...");
    info!("📂 Config directory: {}", args.config_dir);

    let config = ServiceConfig::load(&args.config_dir)?;
    let service = DeviceService::start(config).await?;

    let (outcome, force) = {
        let batch = execute(&service, &args.command);
        tokio::pin!(batch);

        let finished = tokio::select! {
            result = &mut batch => Some(result),
            _ = interrupted() => None,
        };

        // An interrupted batch still runs to completion, failing with `Cancelled`.
        match finished {
            Some(result) => (result, false),
            None => {
                info!("🛑 Interrupted, cancelling in-flight requests...");
                service.interrupt().await?;
                (batch.await, true)
            }
        }
    };

    service.shutdown(force).await?;
    outcome
}

async fn interrupted() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Unable to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

async fn execute(service: &DeviceService, command: &Command) -> Result<()> {
    match command {
        Command::Devices => {
            for device in service.devices() {
                println!(
                    "{}\t{}\t{}",
                    device.name,
                    device.address,
                    device.description.as_deref().unwrap_or("")
                );
            }
        }
        Command::Read { device, resources } => {
            let readings = service.read(device, resources.as_slice()).await?;
            for (name, reading) in resources.iter().zip(&readings) {
                println!("{}\t{}", name, format_reading(reading.as_ref()));
            }
        }
        Command::Write {
            device,
            resource,
            value,
        } => {
            service.write(device, resource, value).await?;
            info!(device = %device, resource = %resource, "✅ Write applied");
        }
    }
    Ok(())
}

fn main() {
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("❌ Failed to start runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = rt.block_on(run()) {
        eprintln!("\n❌ ERROR: {:?}", e);
        std::process::exit(1);
    }
}
