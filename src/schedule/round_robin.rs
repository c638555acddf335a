use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::error::{LeagueError, Result};
use super::league::LeagueSchedule;
use super::pair_order::{candidate_pairs, resolve_team_order, TeamOrder};
use super::resolver::resolve_slot;
use super::types::{Matchup, Slot, Team};

/// Schedules one matchup for every pair of teams.
///
/// Pairs are attempted in the order given by [`candidate_pairs`]; each is
/// placed in the first free slot of the best fallback tier available at the
/// time, or recorded as unmatched. A placement is never revisited.
pub fn schedule_round_robin(slots: Vec<Slot>, teams: Vec<Team>, order: &TeamOrder) -> Result<LeagueSchedule> {
    check_roster(&teams, slots.len())?;

    let run_order = resolve_team_order(&teams, order)?;
    let pairs = candidate_pairs(&teams, &run_order);

    info!(teams = teams.len(), slots = slots.len(), "generating schedule");

    let mut schedule = LeagueSchedule::new(slots, teams);
    for (i, j) in pairs {
        let matchup = {
            let (team1, team2) = (&schedule.teams()[i], &schedule.teams()[j]);
            if schedule.is_decided(team1.id, team2.id) {
                continue;
            }
            let placement = resolve_slot(team1, team2, |slot| schedule.is_slot_free(slot));
            match placement {
                Some((tier, slot)) => {
                    debug!(team1 = %team1.name, team2 = %team2.name, slot, tier = tier.rank(), "placed matchup");
                }
                None => {
                    warn!(team1 = %team1.name, team2 = %team2.name, "no slot left for matchup");
                }
            }
            Matchup::between(team1, team2, placement)
        };
        schedule.record(matchup)?;
    }

    info!(
        scheduled = schedule.matchups().len(),
        unmatched = schedule.unmatched().len(),
        complete = schedule.is_complete(),
        "schedule generated"
    );

    Ok(schedule)
}

/// Ids must be unique and every team must be built against the run's slot
/// universe. Shared names are allowed but worth a warning.
fn check_roster(teams: &[Team], slot_count: usize) -> Result<()> {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for team in teams {
        let found = team.preferences.slot_count();
        if found as usize != slot_count {
            return Err(LeagueError::SlotUniverseMismatch {
                team: team.name.clone(),
                expected: slot_count as u32,
                found,
            });
        }
        if !ids.insert(team.id) {
            return Err(LeagueError::DuplicateTeamId(team.id));
        }
        if !names.insert(team.name.as_str()) {
            warn!(team = %team.name, id = %team.id, "team name is shared with another team");
        }
    }
    Ok(())
}
