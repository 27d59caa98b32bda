use chrono::Utc;

use crate::domain::{
    common::entities::app_errors::CoreError,
    like::{
        entities::LikeRecord,
        ports::{LikeRepository, WriteOutcome},
        value_objects::SaveLikeCommand,
    },
};

/// Validates a raw save-like body and persists it with idempotent semantics.
#[derive(Debug, Clone)]
pub struct LikeService<R> {
    repository: R,
}

impl<R: LikeRepository> LikeService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Parses, stamps, and writes one like record. A replayed like for the
    /// same `(userId, mealId)` pair resolves to `WriteOutcome::Duplicate`.
    pub async fn save_like(&self, raw_body: &str) -> Result<WriteOutcome, CoreError> {
        let command = SaveLikeCommand::parse(raw_body)?;
        let record = LikeRecord::new(command, Utc::now());
        self.repository.put_if_absent(record).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::like::ports::MockLikeRepository;

    fn body() -> String {
        json!({ "userId": "u1", "meal": { "id": "m1", "name": "Ramen" } }).to_string()
    }

    #[tokio::test]
    async fn test_save_like_created() {
        let mut repository = MockLikeRepository::new();
        repository
            .expect_put_if_absent()
            .withf(|record| record.pk == "USER#u1" && record.sk == "LIKE#m1")
            .times(1)
            .returning(|_| Box::pin(async { Ok(WriteOutcome::Created) }));

        let service = LikeService::new(repository);
        let outcome = service.save_like(&body()).await.unwrap();
        assert_eq!(outcome, WriteOutcome::Created);
    }

    #[tokio::test]
    async fn test_save_like_duplicate_is_not_an_error() {
        let mut repository = MockLikeRepository::new();
        repository
            .expect_put_if_absent()
            .returning(|_| Box::pin(async { Ok(WriteOutcome::Duplicate) }));

        let service = LikeService::new(repository);
        let outcome = service.save_like(&body()).await.unwrap();
        assert_eq!(outcome, WriteOutcome::Duplicate);
    }

    #[tokio::test]
    async fn test_save_like_store_failure_propagates() {
        let mut repository = MockLikeRepository::new();
        repository
            .expect_put_if_absent()
            .returning(|_| Box::pin(async { Err(CoreError::Store("throttled".to_string())) }));

        let service = LikeService::new(repository);
        let err = service.save_like(&body()).await.unwrap_err();
        assert!(matches!(err, CoreError::Store(ref m) if m == "throttled"));
    }

    #[tokio::test]
    async fn test_validation_failure_never_reaches_store() {
        // No expectation set: any repository call would panic the mock.
        let repository = MockLikeRepository::new();
        let service = LikeService::new(repository);

        let err = service.save_like("{}").await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(ref m) if m == "userId is required"));
    }

    #[tokio::test]
    async fn test_record_carries_stamped_timestamp_into_sort_key() {
        let mut repository = MockLikeRepository::new();
        repository
            .expect_put_if_absent()
            .withf(|record| {
                record.liked_at.ends_with('Z')
                    && record.liked_at.len() == 20
                    && record.gsi2_sk == format!("{}#LIKE#m1", record.liked_at)
                    && record.updated_at == record.liked_at
            })
            .returning(|_| Box::pin(async { Ok(WriteOutcome::Created) }));

        let service = LikeService::new(repository);
        service.save_like(&body()).await.unwrap();
    }
}
