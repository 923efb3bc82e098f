use anyhow::Result;
use clap::Parser;
use relfind::config::Config;
use std::time::Duration;

/// relfind - GitHub Release asset finder
///
/// Print the download URLs of the files attached to a release.
///
/// Examples:
///   relfind find owner/repo             # Assets of the latest release
///   relfind find owner/repo@v1.2.3      # Assets of a tagged release
///   relfind find https://host/tool.zip  # A known URL, printed as-is
#[derive(Parser, Debug)]
#[command(author, version = env!("RELFIND_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(
        long = "api-url",
        env = "RELFIND_API_URL",
        value_name = "URL",
        global = true
    )]
    pub api_url: Option<String>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(
        long = "timeout",
        env = "RELFIND_TIMEOUT",
        value_name = "SECONDS",
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    pub timeout: Option<u64>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the asset URLs of one or more releases
    Find(FindArgs),
}

#[derive(clap::Args, Debug)]
pub struct FindArgs {
    /// "owner/repo", "owner/repo@tag", or a direct http(s) URL
    #[arg(value_name = "SPEC", required = true)]
    pub specs: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = Config::new(cli.api_url, cli.timeout.map(Duration::from_secs))?;

    match cli.command {
        Commands::Find(args) => {
            let mut stdout = std::io::stdout().lock();
            relfind::commands::find(&args.specs, &config, &mut stdout).await?
        }
    }
    Ok(())
}
