use std::fmt;
use serde::{Serialize, Deserialize};

use crate::error::Result;
use super::preferences::PreferenceIndex;

/// Dense slot index, assigned in day-major order starting at 0
pub type SlotId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DayOfWeek {
    Tuesday,
    Wednesday,
    Thursday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 3] = [DayOfWeek::Tuesday, DayOfWeek::Wednesday, DayOfWeek::Thursday];

    pub fn short_name(self) -> &'static str {
        match self {
            DayOfWeek::Tuesday => "Tue",
            DayOfWeek::Wednesday => "Wed",
            DayOfWeek::Thursday => "Thu",
        }
    }

    /// League nights only; any other weekday has no slots
    pub fn from_weekday(day: chrono::Weekday) -> Option<Self> {
        match day {
            chrono::Weekday::Tue => Some(DayOfWeek::Tuesday),
            chrono::Weekday::Wed => Some(DayOfWeek::Wednesday),
            chrono::Weekday::Thu => Some(DayOfWeek::Thursday),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SlotTime {
    Early,
    Late,
}

impl SlotTime {
    pub const ALL: [SlotTime; 2] = [SlotTime::Early, SlotTime::Late];

    pub fn name(self) -> &'static str {
        match self {
            SlotTime::Early => "Early",
            SlotTime::Late => "Late",
        }
    }
}

/// A schedulable (day, time) unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub id: SlotId,
    pub day: DayOfWeek,
    pub time: SlotTime,
}

impl Slot {
    /// Display label, e.g. "Tue Early"
    pub fn label(&self) -> String {
        format!("{} {}", self.day.short_name(), self.time.name())
    }
}

/// A team's disposition toward a slot. Unlisted slots are neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum PreferenceType {
    #[serde(alias = "P")]
    Preferred,
    #[serde(alias = "A")]
    Avoid,
    #[serde(alias = "B")]
    Blacklist,
}

impl PreferenceType {
    pub const ALL: [PreferenceType; 3] = [PreferenceType::Preferred, PreferenceType::Avoid, PreferenceType::Blacklist];

    pub fn code(self) -> char {
        match self {
            PreferenceType::Preferred => 'P',
            PreferenceType::Avoid => 'A',
            PreferenceType::Blacklist => 'B',
        }
    }
}

/// Identity of a team. Names are display data and may repeat; ids never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamId(pub u32);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub preferences: PreferenceIndex,
}

impl Team {
    /// Builds a team, grouping its raw `(slot, type)` list by tier.
    /// Fails if a slot is outside `0..slot_count` or listed under two tiers.
    pub fn new(
        id: TeamId,
        name: impl Into<String>,
        preferences: &[(SlotId, PreferenceType)],
        slot_count: u32,
    ) -> Result<Self> {
        let name = name.into();
        let preferences = PreferenceIndex::build(&name, preferences, slot_count)?;
        Ok(Self { id, name, preferences })
    }

    pub fn has_blacklist(&self) -> bool {
        !self.preferences.slots_of(PreferenceType::Blacklist).is_empty()
    }
}

/// Which fallback tier produced a committed slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FallbackTier {
    /// Both teams prefer the slot
    MutualPreferred,
    /// The first team prefers it and the second neither avoids nor blacklists it
    PreferredAndAcceptable,
    /// Neither team avoids nor blacklists it
    MutualAcceptable,
    /// Neither team blacklists it
    NotBlacklisted,
}

impl FallbackTier {
    pub const ORDER: [FallbackTier; 4] = [
        FallbackTier::MutualPreferred,
        FallbackTier::PreferredAndAcceptable,
        FallbackTier::MutualAcceptable,
        FallbackTier::NotBlacklisted,
    ];

    /// 1-based rank, lower is better
    pub fn rank(self) -> u8 {
        match self {
            FallbackTier::MutualPreferred => 1,
            FallbackTier::PreferredAndAcceptable => 2,
            FallbackTier::MutualAcceptable => 3,
            FallbackTier::NotBlacklisted => 4,
        }
    }
}

/// A pairing of two distinct teams. `slot` is `None` when the pair could not be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matchup {
    pub team1: TeamId,
    pub team1_name: String,
    pub team2: TeamId,
    pub team2_name: String,
    pub slot: Option<SlotId>,
    pub tier: Option<FallbackTier>,
}

impl Matchup {
    pub fn between(team1: &Team, team2: &Team, placement: Option<(FallbackTier, SlotId)>) -> Self {
        Self {
            team1: team1.id,
            team1_name: team1.name.clone(),
            team2: team2.id,
            team2_name: team2.name.clone(),
            slot: placement.map(|(_, slot)| slot),
            tier: placement.map(|(tier, _)| tier),
        }
    }

    /// True if this matchup is between `a` and `b`, in either order
    pub fn involves_pair(&self, a: TeamId, b: TeamId) -> bool {
        (self.team1 == a && self.team2 == b) || (self.team1 == b && self.team2 == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_type_accepts_codes_and_names() {
        let parsed: Vec<PreferenceType> = serde_json::from_str(r#"["P", "Avoid", "B"]"#).unwrap();
        assert_eq!(parsed, vec![PreferenceType::Preferred, PreferenceType::Avoid, PreferenceType::Blacklist]);
        assert!(serde_json::from_str::<PreferenceType>(r#""X""#).is_err());
    }

    #[test]
    fn test_slot_and_tier_serialize_for_reports() {
        let slot = Slot { id: 3, day: DayOfWeek::Wednesday, time: SlotTime::Late };
        assert_eq!(
            serde_json::to_value(slot).unwrap(),
            serde_json::json!({"id": 3, "day": "Wednesday", "time": "Late"})
        );
        assert_eq!(serde_json::to_value(FallbackTier::MutualAcceptable).unwrap(), "MutualAcceptable");
    }
}
