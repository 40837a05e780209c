// Turns warp rejections into JSON error bodies

use crate::models::ErrorResponse;
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::Rejection;

pub async fn handle_rejection(err: Rejection) -> Result<impl warp::Reply, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found")
    } else if err.find::<warp::filters::body::BodyDeserializeError>().is_some()
        || err.find::<warp::reject::UnsupportedMediaType>().is_some()
        || err.find::<warp::reject::LengthRequired>().is_some()
    {
        // A body we cannot read carries no message.
        (StatusCode::BAD_REQUEST, "Message is required")
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large")
    } else if let Some(forbidden) = err.find::<warp::filters::cors::CorsForbidden>() {
        tracing::warn!(reason = %forbidden, "CORS request refused");
        (StatusCode::FORBIDDEN, "Origin not allowed")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    } else {
        tracing::error!(rejection = ?err, "Unhandled rejection");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    };

    let body = ErrorResponse {
        error: message.to_string(),
        status: None,
    };

    Ok(warp::reply::with_status(warp::reply::json(&body), status))
}
