//! # Quill Blog Client
//!
//! Terminal front end for the posts service. Renders the post list and the
//! form to stdout and reads commands from stdin, one per line.

use tokio::io::{AsyncBufReadExt, BufReader};

use quill_core::PostListController;
use quill_infra::HttpPostsApi;

mod command;
mod config;
mod telemetry;
mod view;

use command::{Command, Flow, USAGE};
use config::ClientConfig;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    telemetry::init_telemetry(config.json_logs);

    let api = HttpPostsApi::for_host(&config.hostname);
    tracing::info!(hostname = %config.hostname, backend = api.base_url(), "Starting blog client");

    let mut controller = PostListController::new(api);

    println!("{}", view::LOADING);
    controller.load().await;
    println!("{}", view::render(&controller));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}\n{}", e, USAGE);
                continue;
            }
        };

        match command::apply(&mut controller, command).await {
            Flow::Quit => break,
            Flow::Usage => println!("{}", USAGE),
            Flow::Render => println!("{}", view::render(&controller)),
        }
    }

    tracing::info!("Blog client stopped");
    Ok(())
}
