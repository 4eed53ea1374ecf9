use vcfgw_core::Config;

// Use mimalloc as the global allocator for lower fragmentation on musl-based containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration; missing bucket, region or credentials are fatal here
    let config = Config::from_env()?;

    let (_state, router) = vcfgw_api::setup::initialize_app(config.clone()).await?;

    vcfgw_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
