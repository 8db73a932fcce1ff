use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::http::HeaderMap;
use axum::Json;

use crate::contact::model::SubmissionResult;
use crate::contact::pipeline::{self, Outcome};
use crate::error::AppError;
use crate::state::SharedState;

pub async fn send_email(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SubmissionResult>, AppError> {
    // A discarded submission gets the same answer so bots can't tell it was filtered.
    if pipeline::run(&state, &headers, addr.ip(), &body).await? == Outcome::Discarded {
        tracing::info!(peer = %addr.ip(), "Honeypot field filled, submission discarded");
    }
    Ok(Json(SubmissionResult::ok("Message sent successfully!")))
}
