//! Activity repository
//!
//! Deleting an activity relies on `ON DELETE CASCADE` to remove its signups.

use sqlx::{FromRow, SqliteConnection};

use super::{Camper, DbError};
use crate::models::NewActivity;

/// Activity record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Activity {
    pub id: i64,
    pub name: Option<String>,
    pub difficulty: Option<i64>,
}

/// Activity repository
pub struct ActivityRepo<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> ActivityRepo<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// List all activities in id order.
    pub async fn list(&mut self) -> Result<Vec<Activity>, DbError> {
        let activities = sqlx::query_as::<_, Activity>(
            "SELECT id, name, difficulty FROM activities ORDER BY id",
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(activities)
    }

    pub async fn create(&mut self, activity: NewActivity) -> Result<Activity, DbError> {
        let created = sqlx::query_as::<_, Activity>(
            r#"
            INSERT INTO activities (name, difficulty)
            VALUES (?, ?)
            RETURNING id, name, difficulty
            "#,
        )
        .bind(activity.name)
        .bind(activity.difficulty)
        .fetch_one(&mut *self.conn)
        .await?;

        tracing::debug!(activity_id = created.id, "activity created");
        Ok(created)
    }

    /// Delete an activity and, through the cascade, all of its signups.
    pub async fn delete(&mut self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM activities WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "Activity",
                id,
            });
        }

        tracing::debug!(activity_id = id, "activity deleted");
        Ok(())
    }

    /// Campers signed up for an activity, through its signups.
    ///
    /// A camper with several signups for the same activity appears once.
    pub async fn campers_for(&mut self, activity_id: i64) -> Result<Vec<Camper>, DbError> {
        let campers = sqlx::query_as::<_, Camper>(
            r#"
            SELECT DISTINCT c.id, c.name, c.age
            FROM campers c
            JOIN signups s ON s.camper_id = c.id
            WHERE s.activity_id = ?
            ORDER BY c.id
            "#,
        )
        .bind(activity_id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(campers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, migrations};

    #[tokio::test]
    async fn create_and_list() {
        let pool = create_memory_pool().await.unwrap();
        migrations::run(&pool).await.unwrap();
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = ActivityRepo::new(&mut conn);

        let archery = repo
            .create(NewActivity::new(Some("Archery".into()), Some(2)))
            .await
            .unwrap();
        repo.create(NewActivity::default()).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], archery);
        assert_eq!(all[1].name, None);
        assert_eq!(all[1].difficulty, None);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let pool = create_memory_pool().await.unwrap();
        migrations::run(&pool).await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        let err = ActivityRepo::new(&mut conn).delete(99).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::NotFound {
                resource: "Activity",
                id: 99
            }
        ));
    }
}
