use {
    aave_positions_api::{
        build_router, build_schema, serve, Args, Config, OnChainReader, PositionFetcher,
    },
    clap::Parser,
    std::sync::Arc,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize environment and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let config = Config::from_args(args);

    log::info!("Starting AAVE Positions API");

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        return Err(e.into());
    }

    config.log_configuration();

    let reader = OnChainReader::connect(
        &config.rpc_url()?,
        config.pool()?,
        config.data_provider()?,
    )?;
    let fetcher = PositionFetcher::new(Arc::new(reader), config.max_concurrent_reserves);

    let router = build_router(build_schema(fetcher), &config.graphql_path);

    serve(router, config.port, &config.graphql_path).await
}
