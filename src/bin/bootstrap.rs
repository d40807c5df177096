use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region};
use lambda_runtime::{Error, run, service_fn};

use blogforge::ai::BedrockGenerator;
use blogforge::api::function_handler;
use blogforge::core::config::AppConfig;
use blogforge::storage::S3ArtifactStore;

#[tokio::main]
async fn main() -> Result<(), Error> {
    blogforge::setup_logging();

    let config = AppConfig::from_env();
    let region = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    let shared_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region)
        .load()
        .await;

    let generator = BedrockGenerator::new(&shared_config, config.model_id.clone());
    let store = S3ArtifactStore::new(&shared_config, config.bucket.clone());

    run(service_fn(|event| {
        function_handler(event, &config, &generator, &store)
    }))
    .await
}
