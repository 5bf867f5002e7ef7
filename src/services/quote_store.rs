use std::time::Duration;

use futures_util::FutureExt;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use thiserror::Error;

use crate::entities::cotacoes;
use crate::models::cotacao::Quote;

/// Failure modes of one quote persistence attempt.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persistence deadline fired before completion was confirmed. The
    /// row may still have been written; callers must treat the attempt as
    /// failed regardless.
    #[error("quote store exceeded its {0:?} deadline")]
    DeadlineExceeded(Duration),

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

/// Persists one fetched quote as a new `cotacoes` row.
///
/// The deadline check is a single non-blocking poll of a timer armed before
/// the insert: if the timer has already fired once the insert returns, the
/// call reports [`StoreError::DeadlineExceeded`] even though the write may
/// have applied. The insert itself is not cancelled mid-flight.
pub async fn save_cotacao(
    db: &DatabaseConnection,
    quote: &Quote,
    deadline: Duration,
) -> Result<cotacoes::Model, StoreError> {
    let timer = tokio::time::sleep(deadline);
    let now = chrono::Utc::now().naive_utc();

    let record = cotacoes::ActiveModel {
        code: Set(quote.code.clone()),
        codein: Set(quote.codein.clone()),
        name: Set(quote.name.clone()),
        high: Set(quote.high.clone()),
        low: Set(quote.low.clone()),
        var_bid: Set(quote.var_bid.clone()),
        pct_change: Set(quote.pct_change.clone()),
        bid: Set(quote.bid.clone()),
        ask: Set(quote.ask.clone()),
        timestamp: Set(quote.timestamp.clone()),
        create_date: Set(quote.create_date.clone()),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
        deleted_at: Set(None),
        ..Default::default()
    };

    let model = record.insert(db).await?;

    if timer.now_or_never().is_some() {
        return Err(StoreError::DeadlineExceeded(deadline));
    }

    tracing::debug!(id = model.id, bid = %model.bid, "persisted cotacao");

    Ok(model)
}
