mod error;
mod operations;
mod requests;
mod types;

pub use error::HeroError;
pub use operations::{
    validate_hero_request, NAME_MAX_LEN, NAME_MIN_LEN, UNIVERSE_MAX_LEN, UNIVERSE_MIN_LEN,
};
pub use requests::HeroRequest;
pub use types::Hero;
