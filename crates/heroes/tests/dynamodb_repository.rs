//! DynamoDB repository tests.
//!
//! These need a reachable DynamoDB, e.g. dynamodb-local:
//!
//! ```bash
//! docker run -p 8000:8000 amazon/dynamodb-local
//! DYNAMODB_ENDPOINT=http://localhost:8000 AWS_ACCESS_KEY_ID=local AWS_SECRET_ACCESS_KEY=local \
//!     cargo test -p heroes --test dynamodb_repository -- --ignored
//! ```

#![cfg(feature = "dynamodb")]

use aws_sdk_dynamodb::types::TableStatus;
use futures_util::{StreamExt, TryStreamExt};
use uuid::Uuid;

use heroes::config::DynamoDbConfig;
use heroes::storage::DynamoDbRepository;
use heroes_core::hero::Hero;
use heroes_core::storage::HeroRepository;

/// Connects to a fresh table so tests can run in parallel.
async fn repository() -> DynamoDbRepository {
    let config = DynamoDbConfig {
        table_name: format!("heroes-test-{}", Uuid::new_v4()),
        ..DynamoDbConfig::from_env()
    };
    DynamoDbRepository::connect(&config).await
}

/// Deletes a test table so runs against AWS leave nothing behind.
async fn drop_table(repo: DynamoDbRepository) {
    repo.delete_table().await.unwrap();
}

#[tokio::test]
#[ignore = "requires DynamoDB"]
async fn connect_waits_for_active_table() {
    let repo = repository().await;

    assert_eq!(
        repo.table_status().await.unwrap(),
        Some(TableStatus::Active)
    );

    drop_table(repo).await;
}

#[tokio::test]
#[ignore = "requires DynamoDB"]
async fn put_and_get() {
    let repo = repository().await;
    let hero = Hero::new("123", "Sonic", "Sonic", 1);

    repo.put_hero(&hero).await.unwrap();

    assert_eq!(repo.get_hero("123").await.unwrap(), Some(hero));

    drop_table(repo).await;
}

#[tokio::test]
#[ignore = "requires DynamoDB"]
async fn get_missing_returns_none() {
    let repo = repository().await;

    assert_eq!(repo.get_hero("missing").await.unwrap(), None);

    drop_table(repo).await;
}

#[tokio::test]
#[ignore = "requires DynamoDB"]
async fn put_and_update_and_get() {
    let repo = repository().await;
    let hero = Hero::new("1234", "Tail", "Sonic", 1);
    let updated = Hero::new("1234", "Tails", "Sonic", 1);

    repo.put_hero(&hero).await.unwrap();
    assert_eq!(
        repo.update_hero(&updated).await.unwrap(),
        Some(updated.clone())
    );

    assert_eq!(repo.get_hero("1234").await.unwrap(), Some(updated));

    drop_table(repo).await;
}

#[tokio::test]
#[ignore = "requires DynamoDB"]
async fn update_missing_writes_nothing() {
    let repo = repository().await;
    let hero = Hero::new("ghost", "Nobody", "Nowhere", 0);

    assert_eq!(repo.update_hero(&hero).await.unwrap(), None);
    assert_eq!(repo.get_hero("ghost").await.unwrap(), None);

    drop_table(repo).await;
}

#[tokio::test]
#[ignore = "requires DynamoDB"]
async fn put_and_delete_by_hero_and_get() {
    let repo = repository().await;
    let hero = Hero::new("12345", "Eggman", "Sonic", 1);

    repo.put_hero(&hero).await.unwrap();
    assert_eq!(
        repo.delete_hero_record(&hero).await.unwrap(),
        Some(hero.clone())
    );

    assert_eq!(repo.get_hero("12345").await.unwrap(), None);

    drop_table(repo).await;
}

#[tokio::test]
#[ignore = "requires DynamoDB"]
async fn put_and_delete_by_id_and_get() {
    let repo = repository().await;
    let hero = Hero::new("123456", "Eggman Nega", "Sonic", 0);

    repo.put_hero(&hero).await.unwrap();
    assert_eq!(repo.delete_hero("123456").await.unwrap(), Some(hero));

    assert_eq!(repo.get_hero("123456").await.unwrap(), None);
    assert_eq!(repo.delete_hero("123456").await.unwrap(), None);

    drop_table(repo).await;
}

#[tokio::test]
#[ignore = "requires DynamoDB"]
async fn reset_put_and_scan() {
    let repo = repository().await;
    repo.reset_table().await.unwrap();

    let heroes = [
        Hero::new("1", "Sonic", "Sonic", 1),
        Hero::new("2", "Shadow", "Sonic", 0),
        Hero::new("3", "Silver", "Sonic", 0),
    ];
    for hero in &heroes {
        repo.put_hero(hero).await.unwrap();
    }

    let scanned: Vec<Hero> = repo.scan_heroes().try_collect().await.unwrap();

    assert_eq!(scanned.len(), 3);
    for hero in &heroes {
        assert!(scanned.contains(hero));
    }

    drop_table(repo).await;
}

#[tokio::test]
#[ignore = "requires DynamoDB"]
async fn reset_put_many_and_scan_across_pages() {
    let config = DynamoDbConfig {
        table_name: format!("heroes-test-{}", Uuid::new_v4()),
        scan_page_size: Some(100),
        ..DynamoDbConfig::from_env()
    };
    let repo = DynamoDbRepository::connect(&config).await;
    repo.reset_table().await.unwrap();

    let limit = 500;
    for i in 1..=limit {
        repo.put_hero(&Hero::new(i.to_string(), "clone", "test", 1))
            .await
            .unwrap();
    }

    let scanned: Vec<Hero> = repo.scan_heroes().try_collect().await.unwrap();

    assert_eq!(scanned.len(), limit);

    drop_table(repo).await;
}

#[tokio::test]
#[ignore = "requires DynamoDB"]
async fn reset_put_and_cancel_scan() {
    let repo = repository().await;
    repo.reset_table().await.unwrap();

    for i in 1..=10 {
        repo.put_hero(&Hero::new(i.to_string(), "clone", "test", 1))
            .await
            .unwrap();
    }

    let mut stream = repo.scan_heroes();
    assert!(matches!(stream.next().await, Some(Ok(_))));
    let next_five: Vec<Hero> = stream.by_ref().take(5).try_collect().await.unwrap();
    drop(stream);

    assert_eq!(next_five.len(), 5);

    drop_table(repo).await;
}
