use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

use crate::models::feedback_models::FeedbackRecord;

/// Where submitted feedback lives. Append-only: insert and bulk read,
/// no update or delete path exists.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    async fn insert_feedback(&self, record: &FeedbackRecord) -> Result<()>;
    async fn get_feedbacks(&self) -> Result<Vec<FeedbackRecord>>;
}

#[derive(Debug, Clone)]
pub struct PgFeedbackStore {
    pub connection: Pool<Postgres>,
}

impl PgFeedbackStore {
    pub async fn new() -> Self {
        let database_url = std::env::var("DATABASE_URL").unwrap();
        let max_connections = std::env::var("MAX_CONNECTIONS").unwrap().parse::<u32>().unwrap();
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(&database_url)
            .await
            .unwrap();
        Self { connection: pool }
    }
}

#[async_trait]
impl FeedbackStore for PgFeedbackStore {
    async fn insert_feedback(&self, record: &FeedbackRecord) -> Result<()> {
        let query = r#"
            INSERT INTO feedbacks (feedback, sentiment, date)
            VALUES ($1, $2, $3)
        "#;

        let result = sqlx::query(query)
            .bind(&record.feedback)
            .bind(record.sentiment)
            .bind(record.date)
            .execute(&self.connection)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::warn!("error occured while inserting feedback {}", err);
                Err(err.into())
            }
        }
    }

    async fn get_feedbacks(&self) -> Result<Vec<FeedbackRecord>> {
        let feedbacks =
            sqlx::query_as::<_, FeedbackRecord>("SELECT feedback, sentiment, date FROM feedbacks")
                .fetch_all(&self.connection)
                .await;

        match feedbacks {
            Ok(feedbacks) => Ok(feedbacks),
            Err(err) => {
                tracing::warn!("error occured while getting feedbacks {}", err);
                Err(err.into())
            }
        }
    }
}
