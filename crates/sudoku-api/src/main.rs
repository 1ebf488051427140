//! JSON-over-HTTP front end for the Sudoku engine.

mod routes;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "sudoku-api", about = "Sudoku solving and placement-checking API server")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    /// Port to listen on
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let app = routes::router();
    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port)).await?;
    log::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}
