use super::error::HeroError;
use super::requests::HeroRequest;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 256;
pub const UNIVERSE_MIN_LEN: usize = 2;
pub const UNIVERSE_MAX_LEN: usize = 128;

/// Validates a hero request before it reaches storage.
///
/// Rules are checked in field order and the first violation is returned.
/// Lengths are counted in characters, not bytes.
pub fn validate_hero_request(request: &HeroRequest) -> Result<(), HeroError> {
    if request.name.trim().is_empty() {
        return Err(HeroError::BlankName);
    }
    let len = request.name.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        return Err(HeroError::NameLength { len });
    }

    if request.universe.trim().is_empty() {
        return Err(HeroError::BlankUniverse);
    }
    let len = request.universe.chars().count();
    if !(UNIVERSE_MIN_LEN..=UNIVERSE_MAX_LEN).contains(&len) {
        return Err(HeroError::UniverseLength { len });
    }

    if request.films < 0 {
        return Err(HeroError::NegativeFilms(request.films));
    }

    Ok(())
}
