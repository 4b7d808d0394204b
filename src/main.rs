use clap::Parser;
use proplog::console;
use proplog::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "proplog", about = "Interactive terminal log for property listings")]
struct Args {
    /// Path to the listings store file (overrides config and env)
    #[arg(short, long)]
    store: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to proplog.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("proplog.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config()?;
    let resolved = config::resolve(&file_config, args.store.as_deref());
    log::info!(
        "Proplog starting up, store: {}",
        resolved.store_path.display()
    );

    console::run(&resolved)?;
    Ok(())
}
