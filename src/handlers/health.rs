// GET /api/health handler

use crate::gateway::Gateway;
use std::convert::Infallible;
use warp::http::StatusCode;

pub async fn health_handler(gateway: Gateway) -> Result<impl warp::Reply, Infallible> {
    let response = gateway.health().await;

    Ok(warp::reply::with_status(
        warp::reply::json(&response),
        StatusCode::OK,
    ))
}
