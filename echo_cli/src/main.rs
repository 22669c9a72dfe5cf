use anyhow::Result;
use clap::Parser;
use tokio::io::BufReader;

use echo_cli::ChatClient;

#[derive(Parser, Debug)]
#[clap(version, about = "Terminal chat window for the echo bot")]
struct Args {
    #[clap(short, long, env = "ECHO_SERVER_ADDRESS", default_value = "127.0.0.1:8000")]
    server_address: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    let client = ChatClient::new(&args.server_address);
    tracing::info!("Chatting with {}", client.url());

    echo_cli::run(&client, BufReader::new(tokio::io::stdin()), std::io::stdout()).await?;

    tracing::info!("End of input, bye");
    Ok(())
}
