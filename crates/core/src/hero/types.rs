use serde::{Deserialize, Serialize};

/// A hero as stored in the table and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hero {
    /// Partition key.
    pub id: String,
    pub name: String,
    pub universe: String,
    pub films: i32,
}

impl Hero {
    /// Creates a new hero with the given identifier and fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        universe: impl Into<String>,
        films: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            universe: universe.into(),
            films,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_serializes_with_flat_fields() {
        let hero = Hero::new("1", "Sonic", "Sonic", 1);

        let json = serde_json::to_string(&hero).unwrap();

        assert_eq!(
            json,
            r#"{"id":"1","name":"Sonic","universe":"Sonic","films":1}"#
        );
    }
}
