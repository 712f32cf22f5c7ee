use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "advisor-cli")]
#[command(about = "Command-line client for the advisor proxy", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service liveness
    Health,
    /// Send a single question, optionally with wallet context
    Ask {
        /// Question text
        text: String,

        #[arg(long)]
        wallet: Option<String>,

        /// SOL balance
        #[arg(long)]
        balance: Option<f64>,

        /// Portfolio value in USD
        #[arg(long)]
        portfolio_value: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Health => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Ask {
            text,
            wallet,
            balance,
            portfolio_value,
        } => {
            let mut body = json!({
                "messages": [{ "role": "user", "content": text }],
            });
            if wallet.is_some() || balance.is_some() || portfolio_value.is_some() {
                body["context"] = json!({
                    "walletAddress": wallet,
                    "solBalance": balance,
                    "portfolioValue": portfolio_value,
                });
            }

            let res = client
                .post(format!("{}/api/openclaw", cli.url))
                .json(&body)
                .send()
                .await?;

            let status = res.status();
            let json: Value = res.json().await?;
            match json.get("message").and_then(Value::as_str) {
                Some(message) if status.is_success() => println!("{}", message),
                _ => {
                    eprintln!("Error: proxy returned status {}", status);
                    eprintln!("{}", serde_json::to_string_pretty(&json)?);
                }
            }
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: proxy returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
