use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{LeagueError, Result};
use super::types::{Team, TeamId};

/// How teams are ordered for a run. The same ordering drives both phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamOrder {
    /// Shuffle the roster; a seed makes the shuffle reproducible
    Shuffled(Option<u64>),
    /// Use this exact permutation of the roster
    Fixed(Vec<TeamId>),
}

impl Default for TeamOrder {
    fn default() -> Self {
        TeamOrder::Shuffled(None)
    }
}

/// Resolves `order` into indices into `teams`
pub fn resolve_team_order(teams: &[Team], order: &TeamOrder) -> Result<Vec<usize>> {
    match order {
        TeamOrder::Shuffled(seed) => {
            let mut indices: Vec<usize> = (0..teams.len()).collect();
            match seed {
                Some(seed) => indices.shuffle(&mut StdRng::seed_from_u64(*seed)),
                None => indices.shuffle(&mut rand::thread_rng()),
            }
            Ok(indices)
        }
        TeamOrder::Fixed(ids) => {
            if ids.len() != teams.len() {
                return Err(LeagueError::InvalidTeamOrder(format!(
                    "expected {} teams, got {}",
                    teams.len(),
                    ids.len()
                )));
            }
            let mut seen = HashSet::new();
            let mut indices = Vec::with_capacity(ids.len());
            for id in ids {
                if !seen.insert(*id) {
                    return Err(LeagueError::InvalidTeamOrder(format!("team {} listed twice", id)));
                }
                let index = teams
                    .iter()
                    .position(|t| t.id == *id)
                    .ok_or_else(|| LeagueError::InvalidTeamOrder(format!("team {} is not in the league", id)))?;
                indices.push(index);
            }
            Ok(indices)
        }
    }
}

/// Ordered pair candidates for a run, as indices into `teams`.
///
/// Phase A pairs every team holding a blacklist with every other team, so
/// hard-constrained teams get first pick of free slots. Phase B pairs
/// everyone with everyone. Both unordered orientations of a pair appear;
/// the caller skips any pair it has already decided, which leaves exactly
/// one attempt per unordered pair.
pub fn candidate_pairs(teams: &[Team], order: &[usize]) -> Vec<(usize, usize)> {
    let blacklisted = order.iter().copied().filter(|&i| teams[i].has_blacklist());
    let phase_a = blacklisted.flat_map(move |t1| order.iter().map(move |&t2| (t1, t2)));
    let phase_b = order.iter().flat_map(move |&t1| order.iter().map(move |&t2| (t1, t2)));

    phase_a
        .chain(phase_b)
        .filter(|&(t1, t2)| teams[t1].id != teams[t2].id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::types::PreferenceType;

    fn roster() -> Vec<Team> {
        vec![
            Team::new(TeamId(0), "A", &[], 6).unwrap(),
            Team::new(TeamId(1), "B", &[(0, PreferenceType::Blacklist)], 6).unwrap(),
            Team::new(TeamId(2), "C", &[], 6).unwrap(),
        ]
    }

    #[test]
    fn test_fixed_order_maps_ids_to_indices() {
        let teams = roster();
        let order = TeamOrder::Fixed(vec![TeamId(2), TeamId(0), TeamId(1)]);
        assert_eq!(resolve_team_order(&teams, &order).unwrap(), vec![2, 0, 1]);
    }

    #[test]
    fn test_fixed_order_must_be_a_permutation() {
        let teams = roster();
        assert!(resolve_team_order(&teams, &TeamOrder::Fixed(vec![TeamId(0), TeamId(1)])).is_err());
        assert!(resolve_team_order(&teams, &TeamOrder::Fixed(vec![TeamId(0), TeamId(0), TeamId(1)])).is_err());
        assert!(resolve_team_order(&teams, &TeamOrder::Fixed(vec![TeamId(0), TeamId(1), TeamId(9)])).is_err());
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let teams: Vec<Team> = (0..10).map(|i| Team::new(TeamId(i), format!("T{i}"), &[], 6).unwrap()).collect();
        let first = resolve_team_order(&teams, &TeamOrder::Shuffled(Some(42))).unwrap();
        let second = resolve_team_order(&teams, &TeamOrder::Shuffled(Some(42))).unwrap();
        assert_eq!(first, second);

        let mut sorted = first.clone();
        sorted.sort();
        assert_eq!(sorted, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_blacklist_teams_lead_the_candidates() {
        let teams = roster();
        let pairs = candidate_pairs(&teams, &[0, 1, 2]);

        // Phase A: B against everyone else
        assert_eq!(&pairs[..2], &[(1, 0), (1, 2)]);
        // Phase B: all ordered pairs without self-pairs
        assert_eq!(pairs.len(), 2 + 6);
        assert!(pairs.iter().all(|(a, b)| a != b));
    }
}
