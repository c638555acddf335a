use std::str::FromStr;

use super::types::{DayOfWeek, Slot, SlotId, SlotTime};

/// Builds the slot universe as the product of league days and times.
/// Ids are dense from 0 in day-major order: Tue Early = 0, Tue Late = 1, Wed Early = 2, ...
pub fn build_slot_universe() -> Vec<Slot> {
    let mut slots = Vec::with_capacity(DayOfWeek::ALL.len() * SlotTime::ALL.len());
    for day in DayOfWeek::ALL {
        for time in SlotTime::ALL {
            slots.push(Slot {
                id: slots.len() as SlotId,
                day,
                time,
            });
        }
    }
    slots
}

/// Parses a time-of-night name ("early", "Late") case-insensitively
pub fn parse_slot_time(value: &str) -> Option<SlotTime> {
    SlotTime::ALL
        .into_iter()
        .find(|t| t.name().eq_ignore_ascii_case(value.trim()))
}

/// Resolves a slot reference to an id.
///
/// Accepts either a numeric id ("3") or a "<day> <time>" label such as
/// "Tue Early" or "wednesday late". Returns None if the reference does not
/// name a slot in `slots`.
pub fn parse_slot_ref(value: &str, slots: &[Slot]) -> Option<SlotId> {
    let trimmed = value.trim();
    if let Ok(id) = trimmed.parse::<SlotId>() {
        return slots.iter().find(|s| s.id == id).map(|s| s.id);
    }

    let mut parts = trimmed.split_whitespace();
    let day = parts.next()?;
    let time = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let day = chrono::Weekday::from_str(day).ok().and_then(DayOfWeek::from_weekday)?;
    let time = parse_slot_time(time)?;

    slots
        .iter()
        .find(|s| s.day == day && s.time == time)
        .map(|s| s.id)
}

/// Slots that no committed matchup uses, in id order
pub fn free_slots<'a>(slots: &'a [Slot], is_free: impl Fn(SlotId) -> bool) -> Vec<&'a Slot> {
    slots.iter().filter(|s| is_free(s.id)).collect()
}
