use clap::Parser;
use serde_json::Value;

use translate_gateway::TranslateRequest;

#[derive(Parser)]
#[command(name = "translate-cli")]
#[command(about = "Send a translation to a running translate-gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// Source language code; empty lets the backend detect it.
    #[arg(short, long, default_value = "")]
    source: String,

    /// Target language code; empty means English.
    #[arg(short, long, default_value = "")]
    target: String,

    /// Text to translate.
    text: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let request = TranslateRequest {
        text: cli.text,
        source_lang: cli.source,
        target_lang: cli.target,
    };

    let res = client
        .post(format!("{}/translate", cli.url.trim_end_matches('/')))
        .json(&request)
        .send()
        .await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
