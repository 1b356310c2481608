//! DynamoDB repository implementation.
//!
//! Implements [`HeroRepository`] from `heroes_core::storage` using DynamoDB.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_dynamodb::operation::delete_table::DeleteTableError;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ReturnValue,
    ScalarAttributeType, TableStatus,
};
use aws_sdk_dynamodb::Client;

use heroes_core::hero::Hero;
use heroes_core::storage::{HeroRepository, HeroStream, RepositoryError, Result};

use crate::config::DynamoDbConfig;

use super::conversions::{hero_to_item, item_to_hero};
use super::error::{
    map_create_table_error, map_delete_item_error, map_delete_table_error,
    map_describe_table_error, map_get_item_error, map_put_item_error, map_scan_error,
};
use super::keys;

const TABLE_POLL_ATTEMPTS: u32 = 60;
const TABLE_POLL_DELAY: Duration = Duration::from_millis(500);

/// DynamoDB-based repository implementation.
///
/// Owns an immutably configured client handle; clones share the underlying
/// connection pool.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
    scan_page_size: Option<i32>,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            scan_page_size: None,
        }
    }

    /// Limits how many items each scan request returns.
    pub fn with_scan_page_size(mut self, page_size: Option<i32>) -> Self {
        self.scan_page_size = page_size;
        self
    }

    /// Builds a client from configuration and makes sure the table exists.
    ///
    /// Uses the AWS SDK default credential chain. The region and optional
    /// endpoint override (e.g. dynamodb-local) come from `config`.
    pub async fn connect(config: &DynamoDbConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        let repository = Self::new(Client::new(&sdk_config), &config.table_name)
            .with_scan_page_size(config.scan_page_size);

        repository.ensure_table().await;
        repository
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Attempts to create the table, logging and ignoring any failure.
    ///
    /// The usual failure is that the table already exists. A newly created
    /// table is waited on until it is `ACTIVE` and accepts item requests.
    pub async fn ensure_table(&self) {
        match self.create_table().await {
            Ok(()) => {
                tracing::info!(table = %self.table_name, "Table created");
                if let Err(err) = self.wait_for_active().await {
                    tracing::warn!(
                        table = %self.table_name,
                        error = %err,
                        "Table is not active yet"
                    );
                }
            }
            Err(err) => tracing::info!(
                table = %self.table_name,
                error = %err,
                "Looks like the table already exists"
            ),
        }
    }

    async fn create_table(&self) -> Result<()> {
        let key_schema = KeySchemaElement::builder()
            .attribute_name(keys::PARTITION_KEY)
            .key_type(KeyType::Hash)
            .build()
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        let attribute_definition = AttributeDefinition::builder()
            .attribute_name(keys::PARTITION_KEY)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        self.client
            .create_table()
            .table_name(&self.table_name)
            .key_schema(key_schema)
            .attribute_definitions(attribute_definition)
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .map_err(map_create_table_error)?;

        Ok(())
    }

    /// Deletes the table. A table that is already gone is not an error.
    pub async fn delete_table(&self) -> Result<()> {
        match self
            .client
            .delete_table()
            .table_name(&self.table_name)
            .send()
            .await
        {
            Ok(_) => Ok(()),
            Err(err)
                if matches!(
                    err.as_service_error(),
                    Some(DeleteTableError::ResourceNotFoundException(_))
                ) =>
            {
                Ok(())
            }
            Err(err) => Err(map_delete_table_error(err)),
        }
    }

    /// Current table status, or `None` once the table is gone.
    pub async fn table_status(&self) -> Result<Option<TableStatus>> {
        match self
            .client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
        {
            Ok(output) => Ok(output
                .table()
                .and_then(|table| table.table_status())
                .cloned()),
            Err(err)
                if matches!(
                    err.as_service_error(),
                    Some(DescribeTableError::ResourceNotFoundException(_))
                ) =>
            {
                Ok(None)
            }
            Err(err) => Err(map_describe_table_error(err)),
        }
    }

    /// Polls until the table status satisfies `done`.
    async fn wait_for_table(&self, done: impl Fn(Option<&TableStatus>) -> bool) -> Result<()> {
        for _ in 0..TABLE_POLL_ATTEMPTS {
            if done(self.table_status().await?.as_ref()) {
                return Ok(());
            }
            tokio::time::sleep(TABLE_POLL_DELAY).await;
        }

        Err(RepositoryError::QueryFailed(format!(
            "Timeout waiting for table {} to settle",
            self.table_name
        )))
    }

    async fn wait_for_active(&self) -> Result<()> {
        self.wait_for_table(|status| status == Some(&TableStatus::Active))
            .await
    }
}

#[async_trait]
impl HeroRepository for DynamoDbRepository {
    async fn get_hero(&self, id: &str) -> Result<Option<Hero>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::hero_key(id)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_hero(&item)?)),
            None => Ok(None),
        }
    }

    fn scan_heroes(&self) -> HeroStream {
        let mut pages = self
            .client
            .scan()
            .table_name(&self.table_name)
            .set_limit(self.scan_page_size)
            .into_paginator()
            .items()
            .send();

        Box::pin(async_stream::stream! {
            while let Some(result) = pages.next().await {
                match result {
                    Ok(item) => yield item_to_hero(&item),
                    Err(err) => {
                        yield Err(map_scan_error(err));
                        break;
                    }
                }
            }
        })
    }

    async fn put_hero(&self, hero: &Hero) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(hero_to_item(hero)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, hero.id.clone()))?;

        Ok(())
    }

    async fn update_hero(&self, hero: &Hero) -> Result<Option<Hero>> {
        let result = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(hero_to_item(hero)))
            .condition_expression(keys::KEY_EXISTS)
            .send()
            .await
            .map_err(|e| map_put_item_error(e, hero.id.clone()));

        match result {
            Ok(_) => Ok(Some(hero.clone())),
            Err(RepositoryError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn delete_hero(&self, id: &str) -> Result<Option<Hero>> {
        let result = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::hero_key(id)))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(map_delete_item_error)?;

        match result.attributes {
            Some(item) => Ok(Some(item_to_hero(&item)?)),
            None => Ok(None),
        }
    }

    async fn reset_table(&self) -> Result<()> {
        self.delete_table().await?;
        self.wait_for_table(|status| status.is_none()).await?;

        self.create_table().await?;
        self.wait_for_active().await?;

        tracing::info!(table = %self.table_name, "Table reset");
        Ok(())
    }
}
