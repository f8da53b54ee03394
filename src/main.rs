use clap::Parser;

use bookmarker::cli::Cli;
use bookmarker::config::{StaticConfig, get_config, init_config, normalize_base_url, update_config};
use bookmarker::runtime::modes::{Mode, detect_mode};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_config(cli.config.as_deref());
    if let Some(api_url) = &cli.api_url {
        let mut config: StaticConfig = (*get_config()).clone();
        config.api.base_url = normalize_base_url(api_url);
        update_config(config);
    }

    match detect_mode(cli.command) {
        #[cfg(feature = "cli")]
        Mode::Cli(cmd) => {
            if let Err(e) = bookmarker::runtime::modes::run_cli(cmd, cli.verbose).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
        #[cfg(feature = "tui")]
        Mode::Tui => {
            if let Err(e) = bookmarker::runtime::modes::run_tui().await {
                eprintln!("TUI error: {}", e);
                std::process::exit(1);
            }
        }
        Mode::Unknown => {
            eprintln!("No interface enabled; rebuild with the `cli` or `tui` feature");
            std::process::exit(2);
        }
    }
}
