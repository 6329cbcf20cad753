pub mod body_type;
pub mod colony;
pub mod error;
pub mod game;
pub mod image;
pub mod labels;
pub mod layout;
pub mod planet;
pub mod player;
pub mod scenery;
pub mod star;
pub mod types;

pub use body_type::BodyType;
pub use colony::Colony;
pub use error::{CoreError, CoreErrorCode};
pub use game::Game;
pub use image::ByteImage;
pub use planet::Planet;
pub use player::Player;
pub use star::Star;
pub use types::{GameSummary, PlanetSummary, PlayerSummary, StarSummary};
