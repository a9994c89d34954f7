//! PostgreSQL-backed deadline store

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;
use crate::model::DeadlineRecord;
use crate::Result;

use super::DeadlineStore;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Deadline store over a PostgreSQL connection pool
pub struct PgDeadlineStore {
    pool: PgPool,
    select: String,
}

impl PgDeadlineStore {
    /// Build the store from configuration.
    ///
    /// The pool is lazy: no connection is opened until the first query,
    /// so the server comes up while the database is down and failures
    /// surface per request instead.
    pub fn connect(config: &DatabaseConfig) -> Self {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database_name);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_lazy_with(options);

        Self {
            select: select_statement(&config.table_name),
            pool,
        }
    }

    /// The underlying pool, used by the migration runner at startup
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// SELECT with the columns named in frontend order; the table name has
/// already been validated as a plain identifier at config load.
fn select_statement(table: &str) -> String {
    format!(
        "SELECT \"State\", \"DeadlineInPerson\", \"DeadlineByMail\", \
         \"DeadlineOnline\", \"ElectionDayRegistration\", \
         \"OnlineRegistrationLink\", \"Description\" \
         FROM \"{table}\" ORDER BY \"State\""
    )
}

#[async_trait]
impl DeadlineStore for PgDeadlineStore {
    async fn fetch_all(&self) -> Result<Vec<DeadlineRecord>> {
        let records = sqlx::query_as::<_, DeadlineRecord>(&self.select)
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
