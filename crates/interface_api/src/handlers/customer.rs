//! Customer handlers

use axum::{extract::State, http::StatusCode};
use tracing::instrument;

use crate::dto::customer::CreateCustomerRequest;
use crate::extract::ValidatedJson;
use crate::{error::ApiError, AppState};

/// Creates a customer whose address is resolved from the zip code
///
/// Responds `200 OK` with an empty body on success.
#[instrument(skip_all)]
pub async fn create_customer(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCustomerRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .create_customer
        .create(request.to_customer(), &request.zip_code)
        .await?;

    Ok(StatusCode::OK)
}
