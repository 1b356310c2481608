//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and heroes.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use heroes_core::hero::Hero;
use heroes_core::storage::RepositoryError;

use super::keys::PARTITION_KEY;

/// Convert a Hero to DynamoDB item.
pub fn hero_to_item(hero: &Hero) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        PARTITION_KEY.to_string(),
        AttributeValue::S(hero.id.clone()),
    );
    item.insert("name".to_string(), AttributeValue::S(hero.name.clone()));
    item.insert(
        "universe".to_string(),
        AttributeValue::S(hero.universe.clone()),
    );
    item.insert("films".to_string(), AttributeValue::N(hero.films.to_string()));

    item
}

/// Convert a DynamoDB item to Hero.
pub fn item_to_hero(item: &HashMap<String, AttributeValue>) -> Result<Hero, RepositoryError> {
    Ok(Hero {
        id: get_string(item, PARTITION_KEY)?,
        name: get_string(item, "name")?,
        universe: get_string(item, "universe")?,
        films: get_i32(item, "films")?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            RepositoryError::Serialization(format!("Missing or invalid field: {}", key))
        })
}

/// Get a required number attribute that fits in an i32.
fn get_i32(item: &HashMap<String, AttributeValue>, key: &str) -> Result<i32, RepositoryError> {
    let n = item.get(key).and_then(|v| v.as_n().ok()).ok_or_else(|| {
        RepositoryError::Serialization(format!("Missing or invalid field: {}", key))
    })?;
    n.parse()
        .map_err(|e| RepositoryError::Serialization(format!("Invalid number {}: {}", key, e)))
}
