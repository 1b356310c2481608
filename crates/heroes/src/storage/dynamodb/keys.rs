//! DynamoDB key schema for the heroes table.
//!
//! The table has a single string partition key and no sort key.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

/// Name of the partition key attribute.
pub const PARTITION_KEY: &str = "id";

/// Condition that only passes when an item is already stored under the key.
pub const KEY_EXISTS: &str = "attribute_exists(id)";

/// Build the primary key map for a hero.
pub fn hero_key(id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(PARTITION_KEY.to_string(), AttributeValue::S(id.to_string()))])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_key_has_only_partition_key() {
        let key = hero_key("11111111-1111-1111-1111-111111111111");

        assert_eq!(key.len(), 1);
        assert_eq!(
            key.get("id").unwrap().as_s().unwrap(),
            "11111111-1111-1111-1111-111111111111"
        );
    }

    #[test]
    fn test_key_exists_condition_targets_partition_key() {
        assert!(KEY_EXISTS.contains(PARTITION_KEY));
    }
}
