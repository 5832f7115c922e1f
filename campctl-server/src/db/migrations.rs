//! Schema creation for the camp tables
//!
//! Constraint names follow `pk_<table>`, `fk_<table>_<column>_<referred>`
//! and `ck_<table>_<name>`.

use sqlx::SqlitePool;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS activities (
        id INTEGER NOT NULL,
        name TEXT,
        difficulty INTEGER,
        CONSTRAINT pk_activities PRIMARY KEY (id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS campers (
        id INTEGER NOT NULL,
        name TEXT NOT NULL,
        age INTEGER NOT NULL,
        CONSTRAINT pk_campers PRIMARY KEY (id),
        CONSTRAINT ck_campers_name_not_empty CHECK (name <> ''),
        CONSTRAINT ck_campers_age_range CHECK (age BETWEEN 8 AND 18)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS signups (
        id INTEGER NOT NULL,
        time INTEGER NOT NULL,
        activity_id INTEGER NOT NULL,
        camper_id INTEGER NOT NULL,
        CONSTRAINT pk_signups PRIMARY KEY (id),
        CONSTRAINT ck_signups_time_range CHECK (time BETWEEN 0 AND 23),
        CONSTRAINT fk_signups_activity_id_activities FOREIGN KEY (activity_id)
            REFERENCES activities (id) ON DELETE CASCADE,
        CONSTRAINT fk_signups_camper_id_campers FOREIGN KEY (camper_id)
            REFERENCES campers (id) ON DELETE CASCADE
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_signups_activity_id ON signups (activity_id)",
    "CREATE INDEX IF NOT EXISTS ix_signups_camper_id ON signups (camper_id)",
];

/// Create all tables and indexes. Safe to run on every start.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Applying camp schema...");

    let mut tx = pool.begin().await?;
    for statement in SCHEMA {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::info!("Camp schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    #[tokio::test]
    async fn creates_tables_idempotently() {
        let pool = create_memory_pool().await.unwrap();
        run(&pool).await.unwrap();
        run(&pool).await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        let names: Vec<_> = tables.into_iter().map(|(n,)| n).collect();
        assert_eq!(names, ["activities", "campers", "signups"]);
    }

    #[tokio::test]
    async fn check_constraints_reject_out_of_range_rows() {
        let pool = create_memory_pool().await.unwrap();
        run(&pool).await.unwrap();

        let err = sqlx::query("INSERT INTO campers (name, age) VALUES ('Sam', 5)")
            .execute(&pool)
            .await
            .unwrap_err();

        let db_err = err.as_database_error().expect("database error");
        assert!(db_err.is_check_violation());
    }
}
