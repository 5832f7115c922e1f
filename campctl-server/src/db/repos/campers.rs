//! Camper repository
//!
//! Handles camper CRUD:
//! - create/update only accept validated models
//! - update applies every patched field in one statement

use sqlx::{FromRow, SqliteConnection};

use super::{Activity, DbError};
use crate::models::{CamperPatch, NewCamper};

/// Camper record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Camper {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

/// Camper repository
pub struct CamperRepo<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> CamperRepo<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&mut self) -> Result<Vec<Camper>, DbError> {
        let campers = sqlx::query_as::<_, Camper>("SELECT id, name, age FROM campers ORDER BY id")
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(campers)
    }

    pub async fn find(&mut self, id: i64) -> Result<Option<Camper>, DbError> {
        let camper = sqlx::query_as::<_, Camper>("SELECT id, name, age FROM campers WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(camper)
    }

    /// Get a camper by id, failing with `NotFound` when absent.
    pub async fn get(&mut self, id: i64) -> Result<Camper, DbError> {
        self.find(id).await?.ok_or(DbError::NotFound {
            resource: "Camper",
            id,
        })
    }

    pub async fn create(&mut self, camper: NewCamper) -> Result<Camper, DbError> {
        let created = sqlx::query_as::<_, Camper>(
            r#"
            INSERT INTO campers (name, age)
            VALUES (?, ?)
            RETURNING id, name, age
            "#,
        )
        .bind(camper.name.as_str())
        .bind(camper.age.get())
        .fetch_one(&mut *self.conn)
        .await?;

        tracing::debug!(camper_id = created.id, "camper created");
        Ok(created)
    }

    /// Apply a validated patch. Fields absent from the patch keep their value.
    pub async fn update(&mut self, id: i64, patch: &CamperPatch) -> Result<Camper, DbError> {
        let updated = sqlx::query_as::<_, Camper>(
            r#"
            UPDATE campers
            SET name = COALESCE(?, name),
                age = COALESCE(?, age)
            WHERE id = ?
            RETURNING id, name, age
            "#,
        )
        .bind(patch.name().map(|n| n.as_str()))
        .bind(patch.age().map(|a| a.get()))
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or(DbError::NotFound {
            resource: "Camper",
            id,
        })?;

        tracing::debug!(camper_id = id, "camper updated");
        Ok(updated)
    }

    /// Activities a camper is signed up for, through their signups.
    pub async fn activities_for(&mut self, camper_id: i64) -> Result<Vec<Activity>, DbError> {
        let activities = sqlx::query_as::<_, Activity>(
            r#"
            SELECT DISTINCT a.id, a.name, a.difficulty
            FROM activities a
            JOIN signups s ON s.activity_id = a.id
            WHERE s.camper_id = ?
            ORDER BY a.id
            "#,
        )
        .bind(camper_id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(activities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, migrations};
    use serde_json::json;

    async fn setup() -> sqlx::SqlitePool {
        let pool = create_memory_pool().await.unwrap();
        migrations::run(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn create_then_get() {
        let pool = setup().await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = CamperRepo::new(&mut conn);

        let created = repo
            .create(NewCamper::new(Some("Alex"), Some(12)).unwrap())
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let fetched = repo.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert!(repo.find(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_keeps_unpatched_fields() {
        let pool = setup().await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = CamperRepo::new(&mut conn);

        let created = repo
            .create(NewCamper::new(Some("Alex"), Some(12)).unwrap())
            .await
            .unwrap();

        let fields = json!({"age": 13}).as_object().cloned().unwrap();
        let patch = CamperPatch::from_fields(&fields).unwrap();
        let updated = repo.update(created.id, &patch).await.unwrap();

        assert_eq!(updated.name, "Alex");
        assert_eq!(updated.age, 13);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let pool = setup().await;
        let mut conn = pool.acquire().await.unwrap();

        let err = CamperRepo::new(&mut conn)
            .update(7, &CamperPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "Camper", id: 7 }));
    }
}
