// Route definitions and handlers

use crate::gateway::Gateway;
use crate::handlers;
use std::convert::Infallible;
use warp::Filter;

/// Largest accepted request body, in bytes
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

/// The API filter tree: every route, JSON error recovery, CORS and request tracing
///
/// Rejections from the routes and from the CORS layer both come back as JSON.
pub fn configure_routes(
    gateway: Gateway,
    cors_origin: &str,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    let cors = warp::cors()
        .allow_origin(cors_origin)
        .allow_methods(vec!["GET", "POST"])
        .allow_headers(vec!["content-type"]);

    api_routes(gateway)
        .recover(handlers::handle_rejection)
        .with(cors)
        .recover(handlers::handle_rejection)
        .with(warp::trace::request())
}

fn api_routes(
    gateway: Gateway,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let api = warp::path("api");

    // POST /api/chat
    let chat = api
        .and(warp::path("chat"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(with_gateway(gateway.clone()))
        .and_then(handlers::chat_handler);

    // GET /api/health
    let health = api
        .and(warp::path("health"))
        .and(warp::path::end())
        .and(warp::get())
        .and(with_gateway(gateway.clone()))
        .and_then(handlers::health_handler);

    // GET /api/history
    let history = api
        .and(warp::path("history"))
        .and(warp::path::end())
        .and(warp::get())
        .and(with_gateway(gateway.clone()))
        .and_then(handlers::history_handler);

    // POST /api/clear-history
    let clear_history = api
        .and(warp::path("clear-history"))
        .and(warp::path::end())
        .and(warp::post())
        .and(with_gateway(gateway))
        .and_then(handlers::clear_history_handler);

    chat.or(health).or(history).or(clear_history)
}

fn with_gateway(gateway: Gateway) -> impl Filter<Extract = (Gateway,), Error = Infallible> + Clone {
    warp::any().map(move || gateway.clone())
}
