use std::convert::Infallible;

use serde::Serialize;
use warp::{
    body::BodyDeserializeError,
    http::StatusCode,
    reject::{InvalidQuery, MethodNotAllowed, Reject},
    Rejection, Reply,
};

use solgain_core::{AnalysisError, DesignError};
use solgain_store::StoreError;

/// A request failure carrying the status and message to send back.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl Reject for ApiError {}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Rejection {
        warp::reject::custom(Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        })
    }
}

/// Store failures are always missing records.
pub fn reject_store(err: StoreError) -> Rejection {
    warp::reject::custom(ApiError {
        status: StatusCode::NOT_FOUND,
        message: err.to_string(),
    })
}

pub fn reject_design(err: DesignError) -> Rejection {
    ApiError::bad_request(err.to_string())
}

/// Maps analysis failures onto response statuses: unresolved designs are
/// 404, bad input never reaches the estimator, and an estimator failure
/// is the server's fault.
pub fn reject_analysis(err: AnalysisError) -> Rejection {
    let status = match &err {
        AnalysisError::DesignNotFound(_) | AnalysisError::DesignsNotFound => StatusCode::NOT_FOUND,
        AnalysisError::NotEnoughDesigns | AnalysisError::UnsupportedCity(_) => {
            StatusCode::BAD_REQUEST
        }
        AnalysisError::Estimate(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    warp::reject::custom(ApiError {
        status,
        message: err.to_string(),
    })
}

#[derive(Debug, Serialize)]
struct ErrorMessage {
    message: String,
}

/// Turns every rejection into a JSON `{"message": ...}` payload.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_owned())
    } else if let Some(api) = err.find::<ApiError>() {
        (api.status, api.message.clone())
    } else if let Some(body) = err.find::<BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, body.to_string())
    } else if let Some(query) = err.find::<InvalidQuery>() {
        (StatusCode::BAD_REQUEST, query.to_string())
    } else if err.find::<MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed".to_owned(),
        )
    } else {
        log::error!("unhandled rejection: {err:?}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_owned(),
        )
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&ErrorMessage { message }),
        status,
    ))
}
