use cafe_server::{Config, Server, init_logger_with_file};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    let server = Server::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("Server exited with error: {}", e);
        std::process::exit(1);
    }
}
