use thiserror::Error;

/// Errors that can occur when validating a hero request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeroError {
    #[error("Hero name cannot be blank")]
    BlankName,
    #[error("Hero name must be between 2 and 256 characters (got {len})")]
    NameLength { len: usize },
    #[error("Hero universe cannot be blank")]
    BlankUniverse,
    #[error("Hero universe must be between 2 and 128 characters (got {len})")]
    UniverseLength { len: usize },
    #[error("Hero films must be zero or positive (got {0})")]
    NegativeFilms(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_error_display() {
        assert_eq!(HeroError::BlankName.to_string(), "Hero name cannot be blank");
        assert_eq!(
            HeroError::UniverseLength { len: 200 }.to_string(),
            "Hero universe must be between 2 and 128 characters (got 200)"
        );
        assert_eq!(
            HeroError::NegativeFilms(-1).to_string(),
            "Hero films must be zero or positive (got -1)"
        );
    }
}
