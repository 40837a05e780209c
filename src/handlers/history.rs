// GET /api/history and POST /api/clear-history handlers

use crate::gateway::Gateway;
use std::convert::Infallible;
use warp::http::StatusCode;

pub async fn history_handler(gateway: Gateway) -> Result<impl warp::Reply, Infallible> {
    let response = gateway.history().await;

    Ok(warp::reply::with_status(
        warp::reply::json(&response),
        StatusCode::OK,
    ))
}

pub async fn clear_history_handler(gateway: Gateway) -> Result<impl warp::Reply, Infallible> {
    let response = gateway.clear_history().await;

    Ok(warp::reply::with_status(
        warp::reply::json(&response),
        StatusCode::OK,
    ))
}
