use chat_gateway::config::GatewayConfig;
use chat_gateway::gateway::Gateway;
use chat_gateway::llm::GeminiClient;
use chat_gateway::routes::configure_routes;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match GatewayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let gemini = config.gemini;
    let client = match GeminiClient::new(gemini.api_key, gemini.model, gemini.base_url, gemini.timeout) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create Gemini client");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        addr = %config.bind_addr,
        model = client.model(),
        cors_origin = %config.cors_origin,
        "Starting chat gateway"
    );

    let gateway = Gateway::new(Arc::new(client), gemini.generation);
    let routes = configure_routes(gateway, &config.cors_origin);

    warp::serve(routes).run(config.bind_addr).await;
    ExitCode::SUCCESS
}
