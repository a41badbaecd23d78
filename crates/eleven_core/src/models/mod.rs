pub mod card;
pub mod formation;
pub mod player;
pub mod rating;
pub mod team;

pub use card::Card;
pub use formation::{Formation, FormationSlot, FORMATION_SIZE};
pub use player::{Player, Position};
pub use rating::{PlayStyle, Rating, MAX_RATING, MIN_RATING, RATING_STEP};
pub use team::{AssignedPlayer, IdealTeamSlot, SlotRole};
