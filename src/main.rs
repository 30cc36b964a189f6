// Standard library
use std::path::PathBuf;
use std::process::ExitCode;

// 3rd party crates
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project imports
use cloudflare_purge::hooks::{on_page_delete_complete, on_page_save_complete};
use cloudflare_purge::providers::cloudflare::{Cloudflare, PurgeError};
use cloudflare_purge::providers::CachePurger;
use cloudflare_purge::settings::ConfigManager;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fires the page-save hook for a page.
    Saved {
        /// Canonical URL of the saved page.
        url: String,
    },
    /// Fires the page-delete hook for a page.
    Deleted {
        /// Canonical URL of the deleted page.
        url: String,
    },
    /// Purges each URL with its own request, in order.
    Purge {
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

/// Entry point for firing wiki page events at the Cloudflare purge API.
#[tokio::main]
async fn main() -> ExitCode {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let cli = Cli::parse();

    let config: ConfigManager = match ConfigManager::new(cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to initialize configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // setup logging.
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(config.get_log_level())
        .add_directive("hyper_util=error".parse().unwrap())
        .add_directive("reqwest=error".parse().unwrap())
        .add_directive("hyper=error".parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .init();

    info!("Settings have been loaded from {:?}", config.config_path);

    let cloudflare: Cloudflare =
        match Cloudflare::new(config.get_settings().get_cloudflare().resolve()) {
            Ok(cloudflare) => cloudflare,
            Err(e) => {
                error!("Failed to create Cloudflare client: {}", e);
                return ExitCode::FAILURE;
            }
        };

    match run(&cloudflare, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Application error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cloudflare: &Cloudflare, command: Command) -> Result<(), PurgeError> {
    if !cloudflare.is_enabled() {
        info!("Cloudflare purging is disabled, nothing will be sent");
    }

    match command {
        Command::Saved { url } => on_page_save_complete(cloudflare, &url).await,
        Command::Deleted { url } => on_page_delete_complete(cloudflare, &url).await,
        Command::Purge { urls } => {
            let mut last_error: Option<PurgeError> = None;
            for url in &urls {
                if let Err(e) = cloudflare.purge(url).await {
                    error!(url = %url, "Purge failed: {}", e);
                    last_error = Some(e);
                }
            }
            match last_error {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purge_requires_at_least_one_url() {
        assert!(Cli::try_parse_from(["cloudflare-purge", "purge"]).is_err());
    }

    #[test]
    fn saved_takes_config_override() {
        let cli = Cli::try_parse_from([
            "cloudflare-purge",
            "--config",
            "/tmp/cfpurge.toml",
            "saved",
            "https://example.org/wiki/Foo",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/cfpurge.toml")));
        assert!(matches!(cli.command, Command::Saved { url } if url == "https://example.org/wiki/Foo"));
    }
}
