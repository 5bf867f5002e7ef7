//! `SeaORM` Entity for the cotacoes table
//!
//! Append-only log of fetched USD-BRL quotes. Rows are never updated or
//! deleted; the audit columns exist for schema parity with the rest of the
//! deployment.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "cotacoes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Base currency code (e.g. "USD")
    pub code: String,
    /// Counter currency code (e.g. "BRL")
    pub codein: String,
    /// Upstream display name for the pair
    pub name: String,
    pub high: String,
    pub low: String,
    pub var_bid: String,
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    /// Upstream quote timestamp, verbatim text
    pub timestamp: String,
    /// Upstream creation date, verbatim text
    pub create_date: String,
    pub created_at: Option<DateTime>,
    pub updated_at: Option<DateTime>,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
