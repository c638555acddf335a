use std::collections::HashSet;

use crate::error::{LeagueError, Result};
use super::types::{FallbackTier, Matchup, Slot, SlotId, Team, TeamId};

/// Result of one scheduling run.
///
/// `matchups` and `unmatched` only ever grow. The occupancy and decided-pair
/// sets mirror them so both checks are O(1).
#[derive(Debug, Clone)]
pub struct LeagueSchedule {
    slots: Vec<Slot>,
    teams: Vec<Team>,
    matchups: Vec<Matchup>,
    unmatched: Vec<Matchup>,
    occupied: HashSet<SlotId>,
    decided: HashSet<(TeamId, TeamId)>,
}

fn pair_key(a: TeamId, b: TeamId) -> (TeamId, TeamId) {
    if a <= b { (a, b) } else { (b, a) }
}

impl LeagueSchedule {
    pub fn new(slots: Vec<Slot>, teams: Vec<Team>) -> Self {
        Self {
            slots,
            teams,
            matchups: Vec::new(),
            unmatched: Vec::new(),
            occupied: HashSet::new(),
            decided: HashSet::new(),
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Committed matchups in commit order
    pub fn matchups(&self) -> &[Matchup] {
        &self.matchups
    }

    /// Pairs that found no slot, in attempt order
    pub fn unmatched(&self) -> &[Matchup] {
        &self.unmatched
    }

    pub fn is_slot_free(&self, slot: SlotId) -> bool {
        !self.occupied.contains(&slot)
    }

    /// True if the unordered pair is already committed or recorded as unmatched
    pub fn is_decided(&self, a: TeamId, b: TeamId) -> bool {
        self.decided.contains(&pair_key(a, b))
    }

    /// Commits `team1` vs `team2` to `slot`
    pub fn commit(&mut self, team1: &Team, team2: &Team, slot: SlotId, tier: FallbackTier) -> Result<()> {
        self.record(Matchup::between(team1, team2, Some((tier, slot))))
    }

    /// Records that no slot could be found for `team1` vs `team2`
    pub fn record_unmatched(&mut self, team1: &Team, team2: &Team) -> Result<()> {
        self.record(Matchup::between(team1, team2, None))
    }

    /// Appends a decided matchup to `matchups` or `unmatched` depending on its slot.
    /// Nothing is recorded unless both teams are distinct league members, the
    /// slot belongs to the league and is free, and the pair is still open.
    pub fn record(&mut self, matchup: Matchup) -> Result<()> {
        if matchup.team1 == matchup.team2 {
            return Err(LeagueError::SelfMatchup(matchup.team1_name));
        }
        for id in [matchup.team1, matchup.team2] {
            if self.team(id).is_none() {
                return Err(LeagueError::UnknownTeam(id));
            }
        }
        if let Some(slot) = matchup.slot {
            if !self.slots.iter().any(|s| s.id == slot) {
                return Err(LeagueError::SlotNotInLeague(slot));
            }
            if !self.is_slot_free(slot) {
                return Err(LeagueError::SlotOccupied(slot));
            }
        }
        if !self.decided.insert(pair_key(matchup.team1, matchup.team2)) {
            return Err(LeagueError::PairAlreadyDecided(matchup.team1_name, matchup.team2_name));
        }

        match matchup.slot {
            Some(slot) => {
                self.occupied.insert(slot);
                self.matchups.push(matchup);
            }
            None => self.unmatched.push(matchup),
        }
        Ok(())
    }

    /// The committed matchup using `slot`, if any
    pub fn matchup_in(&self, slot: SlotId) -> Option<&Matchup> {
        self.matchups.iter().find(|m| m.slot == Some(slot))
    }

    /// Committed matchups in slot order
    pub fn matchups_by_slot(&self) -> Vec<&Matchup> {
        let mut sorted: Vec<&Matchup> = self.matchups.iter().collect();
        sorted.sort_by_key(|m| m.slot);
        sorted
    }

    pub fn free_slots(&self) -> Vec<&Slot> {
        super::slot_utils::free_slots(&self.slots, |id| self.is_slot_free(id))
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// n(n-1)/2 for the league's team count
    pub fn expected_pairs(&self) -> usize {
        let n = self.teams.len();
        n * n.saturating_sub(1) / 2
    }

    pub fn is_complete(&self) -> bool {
        self.decided.len() == self.expected_pairs()
    }
}
