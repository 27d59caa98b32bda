use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        like::{
            entities::LikeRecord,
            ports::{LikeRepository, WriteOutcome},
        },
    },
    infrastructure::like::mappers::record_to_item,
};

/// Makes the insert fail when the primary identity already exists. This is
/// the sole concurrency-control mechanism for likes.
const INSERT_IF_ABSENT: &str = "attribute_not_exists(PK) AND attribute_not_exists(SK)";

#[derive(Debug, Clone)]
pub struct DynamoStoreConfig {
    pub table_name: String,
    /// Endpoint override for local DynamoDB.
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DynamoLikeRepository {
    client: Client,
    table_name: String,
}

impl DynamoLikeRepository {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// Builds a repository from ambient AWS configuration (env, profile,
    /// instance role), honoring an endpoint override for local development.
    pub async fn from_env(config: DynamoStoreConfig) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest()).load().await;

        tracing::info!(
            table_name = %config.table_name,
            endpoint = ?config.endpoint,
            "Initializing DynamoDB client"
        );

        let mut builder = aws_sdk_dynamodb::config::Builder::from(&shared);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint.trim_end_matches('/'));
        }

        Self::new(Client::from_conf(builder.build()), config.table_name)
    }
}

impl LikeRepository for DynamoLikeRepository {
    async fn put_if_absent(&self, record: LikeRecord) -> Result<WriteOutcome, CoreError> {
        let item = record_to_item(&record)?;

        match self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression(INSERT_IF_ABSENT)
            .send()
            .await
        {
            Ok(_) => Ok(WriteOutcome::Created),
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_conditional_check_failed_exception() {
                    // Already liked; idempotent replay, not a failure.
                    return Ok(WriteOutcome::Duplicate);
                }
                error!("Failed to put like record: {}", service_err);
                Err(CoreError::Store(service_err.to_string()))
            }
        }
    }
}
