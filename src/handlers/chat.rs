// POST /api/chat handler

use crate::gateway::Gateway;
use crate::models::ChatRequest;
use std::convert::Infallible;
use warp::http::StatusCode;

pub async fn chat_handler(
    request: ChatRequest,
    gateway: Gateway,
) -> Result<impl warp::Reply, Infallible> {
    match gateway.submit_message(request.message.as_deref()).await {
        Ok(response) => Ok(warp::reply::with_status(
            warp::reply::json(&response),
            StatusCode::OK,
        )),
        Err(err) => Ok(warp::reply::with_status(
            warp::reply::json(&err.to_response()),
            err.status_code(),
        )),
    }
}
