pub mod types;
pub mod preferences;
pub mod slot_utils;
pub mod pair_order;
pub mod resolver;
pub mod league;
pub mod round_robin;

pub use types::{FallbackTier, Matchup, PreferenceType, Slot, SlotId, Team, TeamId};
pub use league::LeagueSchedule;
pub use pair_order::TeamOrder;
pub use slot_utils::build_slot_universe;
pub use round_robin::schedule_round_robin;
