use forecast::{ApiClient, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Progress goes to stderr, RUST_LOG=debug for request urls
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    log::debug!("{:?}", config);
    let client = ApiClient::new(&config)?;
    let result = forecast::forecast(&client, &config.competition).await?;
    print!("{}", result.render());
    Ok(())
}
