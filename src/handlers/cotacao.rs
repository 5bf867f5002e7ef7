use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    models::cotacao::PriceResponse,
    services::awesome_api::FetchError,
    services::quote_store::{self, StoreError},
};

/// Handler for GET /cotacao
///
/// Fetches the current USD-BRL quote under the fetch deadline, persists it
/// under the store deadline, and answers with the bid value. Either deadline
/// elapsing maps to 408; any other internal failure maps to 500. The body
/// never carries failure detail.
pub async fn get_cotacao(State(state): State<AppState>) -> Result<Json<PriceResponse>, StatusCode> {
    let quote = match state.awesome_api.fetch_usd_brl().await {
        Ok(quote) => quote,
        Err(FetchError::DeadlineExceeded(deadline)) => {
            tracing::warn!(?deadline, "quote fetch timed out");
            return Err(StatusCode::REQUEST_TIMEOUT);
        }
        Err(e) => {
            tracing::error!(error = %e, "quote fetch failed");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    match quote_store::save_cotacao(&state.db, &quote, state.config.store_timeout).await {
        Ok(_record) => {}
        Err(StoreError::DeadlineExceeded(deadline)) => {
            // The fetched quote is dropped here; there is no retry or
            // dead-letter path for a store that misses its deadline.
            tracing::warn!(?deadline, bid = %quote.bid, "quote store timed out");
            return Err(StatusCode::REQUEST_TIMEOUT);
        }
        Err(e) => {
            tracing::error!(error = %e, bid = %quote.bid, "quote store failed");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    Ok(Json(PriceResponse { bid: quote.bid }))
}
