use actix_web::{web, App, HttpServer};
use clap::Parser;
use seabattle::{init_logging, server};

#[derive(Parser)]
#[command(author, version, about = "Two-player Battleship engine behind a thin HTTP API")]
struct Cli {
    /// Address to bind the HTTP server to.
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: String,
    /// Fix the RNG seed for reproducible board generation (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    if let Some(seed) = cli.seed {
        log::info!("Using fixed seed: {} (board generation will be reproducible)", seed);
    }
    log::info!("Listening on {}", cli.bind);

    let state = web::Data::new(server::AppState::new(cli.seed));
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(server::config)
    })
    .bind(&cli.bind)?
    .run()
    .await?;
    Ok(())
}
