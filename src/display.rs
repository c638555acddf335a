use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::schedule::{FallbackTier, LeagueSchedule, Matchup, Slot, SlotId, TeamId};

/// Serializable view of a finished schedule, used for JSON output
#[derive(Debug, Serialize)]
pub struct ScheduleReport {
    pub slots: Vec<Slot>,
    pub matchups: Vec<MatchupEntry>,
    pub unmatched: Vec<UnmatchedEntry>,
    pub free_slots: Vec<SlotId>,
}

#[derive(Debug, Serialize)]
pub struct MatchupEntry {
    pub team1: String,
    pub team2: String,
    pub slot: SlotId,
    pub label: String,
    pub tier: Option<FallbackTier>,
}

#[derive(Debug, Serialize)]
pub struct UnmatchedEntry {
    pub team1: String,
    pub team2: String,
}

impl ScheduleReport {
    pub fn from_schedule(schedule: &LeagueSchedule) -> Self {
        let matchups = schedule
            .matchups()
            .iter()
            .filter_map(|m| {
                let slot = m.slot?;
                Some(MatchupEntry {
                    team1: m.team1_name.clone(),
                    team2: m.team2_name.clone(),
                    slot,
                    label: slot_label(schedule, slot),
                    tier: m.tier,
                })
            })
            .collect();

        let unmatched = schedule
            .unmatched()
            .iter()
            .map(|m| UnmatchedEntry {
                team1: m.team1_name.clone(),
                team2: m.team2_name.clone(),
            })
            .collect();

        ScheduleReport {
            slots: schedule.slots().to_vec(),
            matchups,
            unmatched,
            free_slots: schedule.free_slots().iter().map(|s| s.id).collect(),
        }
    }
}

fn slot_label(schedule: &LeagueSchedule, slot: SlotId) -> String {
    schedule
        .slots()
        .iter()
        .find(|s| s.id == slot)
        .map(|s| s.label())
        .unwrap_or_else(|| format!("Slot {}", slot))
}

/// Formats a matchup as "team1 vs team2"
pub fn format_matchup(matchup: &Matchup) -> String {
    format!("{} vs {}", matchup.team1_name, matchup.team2_name)
}

/// One-letter disposition of a team toward a slot, '-' when neutral
fn disposition(schedule: &LeagueSchedule, team: TeamId, slot: SlotId) -> char {
    schedule
        .team(team)
        .and_then(|t| t.preferences.preference_for(slot))
        .map(|p| p.code())
        .unwrap_or('-')
}

/// Writes the schedule to a file, one line per slot, then any unmatched pairs
pub fn write_schedule_to_file<P: AsRef<Path>>(
    schedule: &LeagueSchedule,
    path: P,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(path)?;

    writeln!(file, "** League Schedule ({}) **", chrono::Local::now().format("%Y-%m-%d %H:%M"))?;

    for slot in schedule.slots() {
        match schedule.matchup_in(slot.id) {
            Some(matchup) => writeln!(file, "{} {}", slot.label(), format_matchup(matchup))?,
            None => writeln!(file, "{} [EMPTY]", slot.label())?,
        }
    }

    if !schedule.unmatched().is_empty() {
        writeln!(file)?;
        writeln!(file, "Unscheduled:")?;
        for matchup in schedule.unmatched() {
            writeln!(file, "{}", format_matchup(matchup))?;
        }
    }

    Ok(())
}

/// Prints the schedule in a readable format
pub fn print_schedule(schedule: &LeagueSchedule) {
    println!("\n=== League Schedule ===");
    println!(
        "Teams: {}, slots: {}, matchups scheduled: {} of {}",
        schedule.teams().len(),
        schedule.slots().len(),
        schedule.matchups().len(),
        schedule.expected_pairs()
    );

    println!("\nSchedule by slot:");
    for matchup in schedule.matchups_by_slot() {
        let Some(slot) = matchup.slot else { continue };
        let tier = matchup.tier.map(|t| t.rank()).unwrap_or(0);
        println!(
            "  Slot {} ({}) -> {} [{}/{}] (tier {})",
            slot,
            slot_label(schedule, slot),
            format_matchup(matchup),
            disposition(schedule, matchup.team1, slot),
            disposition(schedule, matchup.team2, slot),
            tier
        );
    }

    let free = schedule.free_slots();
    if !free.is_empty() {
        let labels: Vec<String> = free.iter().map(|s| s.label()).collect();
        println!("\nFree slots: {}", labels.join(", "));
    }

    if !schedule.unmatched().is_empty() {
        println!("\n⚠️  Unscheduled matchups ({}):", schedule.unmatched().len());
        for matchup in schedule.unmatched() {
            println!("  - {}", format_matchup(matchup));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_teams;
    use crate::schedule::{build_slot_universe, schedule_round_robin, TeamOrder};

    fn demo_schedule() -> LeagueSchedule {
        let slots = build_slot_universe();
        let teams = demo_teams(slots.len() as u32).unwrap();
        let order = TeamOrder::Fixed(teams.iter().map(|t| t.id).collect());
        schedule_round_robin(slots, teams, &order).unwrap()
    }

    #[test]
    fn test_report_lists_matchups_with_labels() {
        let report = ScheduleReport::from_schedule(&demo_schedule());

        assert_eq!(report.matchups.len(), 6);
        assert_eq!(report.matchups[0].label, "Wed Early");
        assert!(report.free_slots.is_empty());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["matchups"][0]["team1"], "SD");
        assert_eq!(json["matchups"][0]["tier"], "PreferredAndAcceptable");
        assert_eq!(json["slots"][5]["day"], "Thursday");
        assert_eq!(json["unmatched"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_disposition_codes() {
        let schedule = demo_schedule();
        // SD blacklists Tue Early, Beached prefers it
        assert_eq!(disposition(&schedule, TeamId(0), 0), 'B');
        assert_eq!(disposition(&schedule, TeamId(2), 0), 'P');
        assert_eq!(disposition(&schedule, TeamId(1), 0), '-');
    }

    #[test]
    fn test_written_file_has_a_line_per_slot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.txt");

        write_schedule_to_file(&demo_schedule(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("** League Schedule"));
        assert_eq!(lines[1], "Tue Early Spikers vs Beached");
        assert_eq!(lines[3], "Wed Early SD vs Spikers");
    }
}
