//! Signup repository
//!
//! Existence of the referenced camper and activity is enforced by the
//! foreign keys; a violation surfaces as `DbError::ForeignKey`.

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqliteConnection};

use super::{Activity, DbError};
use crate::models::NewSignup;

/// Signup record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Signup {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
}

/// Signup joined with its activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupWithActivity {
    pub signup: Signup,
    pub activity: Activity,
}

impl SignupWithActivity {
    fn from_row(row: &SqliteRow) -> Self {
        Self {
            signup: Signup {
                id: row.get("id"),
                time: row.get("time"),
                camper_id: row.get("camper_id"),
                activity_id: row.get("activity_id"),
            },
            activity: Activity {
                id: row.get("activity_id"),
                name: row.get("activity_name"),
                difficulty: row.get("activity_difficulty"),
            },
        }
    }
}

const SELECT_WITH_ACTIVITY: &str = r#"
    SELECT
        s.id,
        s.time,
        s.camper_id,
        s.activity_id,
        a.name AS activity_name,
        a.difficulty AS activity_difficulty
    FROM signups s
    JOIN activities a ON a.id = s.activity_id
"#;

/// Signup repository
pub struct SignupRepo<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> SignupRepo<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    pub async fn create(&mut self, signup: NewSignup) -> Result<Signup, DbError> {
        let created = sqlx::query_as::<_, Signup>(
            r#"
            INSERT INTO signups (time, camper_id, activity_id)
            VALUES (?, ?, ?)
            RETURNING id, time, camper_id, activity_id
            "#,
        )
        .bind(signup.time.get())
        .bind(signup.camper_id)
        .bind(signup.activity_id)
        .fetch_one(&mut *self.conn)
        .await?;

        tracing::debug!(
            signup_id = created.id,
            camper_id = created.camper_id,
            activity_id = created.activity_id,
            "signup created"
        );
        Ok(created)
    }

    pub async fn find(&mut self, id: i64) -> Result<Option<Signup>, DbError> {
        let signup = sqlx::query_as::<_, Signup>(
            "SELECT id, time, camper_id, activity_id FROM signups WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(signup)
    }

    /// Get one signup with its activity in a single query.
    pub async fn get_with_activity(&mut self, id: i64) -> Result<SignupWithActivity, DbError> {
        let sql = format!("{SELECT_WITH_ACTIVITY} WHERE s.id = ?");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or(DbError::NotFound {
                resource: "Signup",
                id,
            })?;

        Ok(SignupWithActivity::from_row(&row))
    }

    /// All signups of a camper, each joined with its activity (no N+1).
    pub async fn list_for_camper(
        &mut self,
        camper_id: i64,
    ) -> Result<Vec<SignupWithActivity>, DbError> {
        let sql = format!("{SELECT_WITH_ACTIVITY} WHERE s.camper_id = ? ORDER BY s.id");
        let rows = sqlx::query(&sql)
            .bind(camper_id)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(rows.iter().map(SignupWithActivity::from_row).collect())
    }
}
