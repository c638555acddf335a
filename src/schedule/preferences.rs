use std::collections::{BTreeMap, BTreeSet};

use crate::error::{LeagueError, Result};
use super::types::{PreferenceType, SlotId};

/// A team's slot ids grouped by preference tier.
///
/// Built once when the team is created and never mutated. Every tier has an
/// entry, possibly empty, and no slot id appears under two tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceIndex {
    by_type: BTreeMap<PreferenceType, BTreeSet<SlotId>>,
    slot_count: u32,
}

impl PreferenceIndex {
    pub fn build(team: &str, preferences: &[(SlotId, PreferenceType)], slot_count: u32) -> Result<Self> {
        let mut by_type: BTreeMap<PreferenceType, BTreeSet<SlotId>> = PreferenceType::ALL
            .iter()
            .map(|&t| (t, BTreeSet::new()))
            .collect();
        let mut seen: BTreeMap<SlotId, PreferenceType> = BTreeMap::new();

        for &(slot, pref_type) in preferences {
            if slot >= slot_count {
                return Err(LeagueError::UnknownSlot { team: team.to_string(), slot });
            }
            if let Some(&first) = seen.get(&slot) {
                if first != pref_type {
                    return Err(LeagueError::ConflictingPreference {
                        team: team.to_string(),
                        slot,
                        first,
                        second: pref_type,
                    });
                }
                continue;
            }
            seen.insert(slot, pref_type);
            by_type.entry(pref_type).or_default().insert(slot);
        }

        Ok(Self { by_type, slot_count })
    }

    /// Size of the slot universe this index was built against
    pub fn slot_count(&self) -> u32 {
        self.slot_count
    }

    /// Slot ids recorded under exactly this tier
    pub fn slots_of(&self, pref_type: PreferenceType) -> &BTreeSet<SlotId> {
        // build() seeds every tier
        &self.by_type[&pref_type]
    }

    /// Every slot in the universe not listed under any of `excluded`, ascending
    pub fn slots_except(&self, excluded: &[PreferenceType]) -> Vec<SlotId> {
        (0..self.slot_count)
            .filter(|slot| !excluded.iter().any(|&t| self.slots_of(t).contains(slot)))
            .collect()
    }

    /// The tier a slot is listed under, or `None` if the team is neutral about it
    pub fn preference_for(&self, slot: SlotId) -> Option<PreferenceType> {
        self.by_type
            .iter()
            .find(|(_, slots)| slots.contains(&slot))
            .map(|(&t, _)| t)
    }
}
