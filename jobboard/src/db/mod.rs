//! Database layer for data persistence and access.
//!
//! ```text
//! ┌─────────────┐
//! │  Services   │  (business rules, transaction boundaries)
//! └──────┬──────┘
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - queries)
//! └──────┬──────┘
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - database records)
//! └──────┬──────┘
//!        ↓
//! ┌─────────────┐
//! │  PostgreSQL │
//! └─────────────┘
//! ```
//!
//! # Transactions
//!
//! Repositories borrow a connection, so the caller decides the transaction boundary. Paginated
//! reads issue a COUNT and a page SELECT; open them with [`begin_snapshot`] so both statements
//! see the same snapshot.
//!
//! # Migrations
//!
//! Managed by SQLx from the crate's `migrations/` directory, see [`crate::migrator`].

pub mod errors;
pub mod handlers;
pub mod models;

use sqlx::{PgPool, Postgres, Transaction};

/// Begin a `REPEATABLE READ, READ ONLY` transaction.
pub async fn begin_snapshot(pool: &PgPool) -> errors::Result<Transaction<'static, Postgres>> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await?;
    Ok(tx)
}
