use super::types::{FallbackTier, PreferenceType, SlotId, Team};

const AVOIDED: [PreferenceType; 2] = [PreferenceType::Avoid, PreferenceType::Blacklist];
const BLACKLISTED: [PreferenceType; 1] = [PreferenceType::Blacklist];

/// Candidate slots for `tier`, ascending by id
pub fn tier_candidates(tier: FallbackTier, team1: &Team, team2: &Team) -> Vec<SlotId> {
    let p1 = &team1.preferences;
    let p2 = &team2.preferences;

    match tier {
        FallbackTier::MutualPreferred => p1
            .slots_of(PreferenceType::Preferred)
            .intersection(p2.slots_of(PreferenceType::Preferred))
            .copied()
            .collect(),
        FallbackTier::PreferredAndAcceptable => {
            intersect(p1.slots_of(PreferenceType::Preferred).iter().copied(), &p2.slots_except(&AVOIDED))
        }
        FallbackTier::MutualAcceptable => {
            intersect(p1.slots_except(&AVOIDED), &p2.slots_except(&AVOIDED))
        }
        FallbackTier::NotBlacklisted => {
            intersect(p1.slots_except(&BLACKLISTED), &p2.slots_except(&BLACKLISTED))
        }
    }
}

/// Keeps the slots of `left` that also appear in the ascending `right`
fn intersect(left: impl IntoIterator<Item = SlotId>, right: &[SlotId]) -> Vec<SlotId> {
    left.into_iter()
        .filter(|slot| right.binary_search(slot).is_ok())
        .collect()
}

/// Finds a slot for `team1` vs `team2`, relaxing tier by tier.
///
/// Returns the first free slot of the first tier that has one, or None if
/// every tier is empty or fully occupied.
pub fn resolve_slot(
    team1: &Team,
    team2: &Team,
    is_free: impl Fn(SlotId) -> bool,
) -> Option<(FallbackTier, SlotId)> {
    FallbackTier::ORDER.into_iter().find_map(|tier| {
        tier_candidates(tier, team1, team2)
            .into_iter()
            .find(|&slot| is_free(slot))
            .map(|slot| (tier, slot))
    })
}
