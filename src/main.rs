use clap::Parser;
use folio::core::config::{self, CliOverrides};
use folio::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio", version, about = "A portfolio in your terminal")]
struct Args {
    /// Page to open first (e.g. /weather)
    #[arg(short, long)]
    page: Option<String>,

    /// City for the weather page
    #[arg(long)]
    city: Option<String>,

    /// Config file to use instead of ~/.folio/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to folio.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("folio.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Folio starting up");

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            page: args.page,
            city: args.city,
        },
    );

    tui::run(resolved)
}
