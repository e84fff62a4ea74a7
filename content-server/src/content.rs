use axum::extract::{Path, State};
use axum::Json;
use content_variation::{assemble_batch, get_content, Content, EntityKey, VariationError};
use tracing::instrument;

use crate::api::{BatchRequest, BatchResponse, BatchResult, ContentError};
use crate::identifier::{canonical_key, display_name};
use crate::prometheus::{ASSEMBLY_ERRORS, RECORDS_ASSEMBLED};
use crate::router;

#[instrument(skip_all, fields(city = %city))]
pub async fn location(
    State(state): State<router::State>,
    Path(city): Path<String>,
) -> Result<Json<Content>, ContentError> {
    let city = display_name(&city, state.max_identifier_length)?;
    render(&state, EntityKey::location(city))
}

#[instrument(skip_all, fields(city = %city, service = %service))]
pub async fn location_service(
    State(state): State<router::State>,
    Path((city, service)): Path<(String, String)>,
) -> Result<Json<Content>, ContentError> {
    let city = display_name(&city, state.max_identifier_length)?;
    let service = display_name(&service, state.max_identifier_length)?;
    render(&state, EntityKey::location_service(city, service))
}

#[instrument(skip_all, fields(city = %city))]
pub async fn reviews(
    State(state): State<router::State>,
    Path(city): Path<String>,
) -> Result<Json<Content>, ContentError> {
    let city = display_name(&city, state.max_identifier_length)?;
    render(&state, EntityKey::reviews(city))
}

/// Assembles many pages in one call, in request order. Names are normalized like path slugs.
#[instrument(skip_all)]
pub async fn batch(
    State(state): State<router::State>,
    Json(request): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, ContentError> {
    tracing::debug!(keys = request.keys.len(), "assembling batch");
    if request.keys.len() > state.max_batch_size {
        return Err(ContentError::BatchTooLarge {
            size: request.keys.len(),
            limit: state.max_batch_size,
        });
    }
    let keys = request
        .keys
        .iter()
        .map(|key| canonical_key(key, state.max_identifier_length))
        .collect::<Result<Vec<_>, _>>()?;

    let pools = state.pools.clone();
    let reference = state.timesource.today();
    let (keys, outcomes) = tokio::task::spawn_blocking(move || {
        let outcomes = assemble_batch(&pools, &keys, reference);
        (keys, outcomes)
    })
    .await
    .map_err(|e| {
        tracing::error!("batch assembly task failed: {}", e);
        ContentError::Internal("batch assembly did not complete".to_string())
    })?;

    let results = keys
        .iter()
        .zip(outcomes)
        .map(|(key, outcome)| match record_outcome(key, outcome) {
            Ok(content) => BatchResult::Ok(content),
            Err(err) => BatchResult::Error(err.to_string()),
        })
        .collect();

    Ok(Json(BatchResponse { results }))
}

fn render(state: &router::State, key: EntityKey) -> Result<Json<Content>, ContentError> {
    let outcome = get_content(&state.pools, &key, state.timesource.today());
    let content = record_outcome(&key, outcome)?;
    Ok(Json(content))
}

fn record_outcome(
    key: &EntityKey,
    outcome: Result<Content, VariationError>,
) -> Result<Content, VariationError> {
    let kind = key.kind().as_str();
    match &outcome {
        Ok(_) => metrics::counter!(RECORDS_ASSEMBLED, "kind" => kind).increment(1),
        Err(err) => {
            tracing::error!(kind, city = key.city(), "failed to assemble content: {}", err);
            metrics::counter!(ASSEMBLY_ERRORS, "kind" => kind).increment(1);
        }
    }
    outcome
}
