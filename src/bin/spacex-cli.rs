use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "spacex-cli")]
#[command(about = "Command-line client for the SpaceX facade", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all rockets
    Rockets {
        /// Sort by id, name, active or success_rate_pct
        #[arg(short, long)]
        sort: Option<String>,
    },
    /// List active rockets
    Active,
    /// List launches flown by a rocket
    Launches { rocket_id: String },
    /// Check facade and upstream health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::Rockets { sort } => {
            let request = client.get(format!("{}/api/rockets/all", base));
            match sort {
                Some(sort) => request.query(&[("sort", sort)]),
                None => request,
            }
        }
        Commands::Active => client.get(format!("{}/api/rockets/active", base)),
        Commands::Launches { rocket_id } => client.get(launches_url(base, &rocket_id)?),
        Commands::Health => client.get(format!("{}/health/ready", base)),
    };

    print_response(request.send().await?).await
}

/// `{base}/api/launches/id/{rocket_id}`, with the id escaped as a single path segment.
fn launches_url(base: &str, rocket_id: &str) -> Result<reqwest::Url, Box<dyn std::error::Error>> {
    let mut url = reqwest::Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| format!("facade URL cannot be a base: {}", base))?
        .pop_if_empty()
        .extend(["api", "launches", "id", rocket_id]);
    Ok(url)
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: facade returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("{}", text);
        }
        std::process::exit(1);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
