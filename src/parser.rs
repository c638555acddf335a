use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::error::{LeagueError, Result};
use crate::schedule::slot_utils::parse_slot_ref;
use crate::schedule::{PreferenceType, Slot, SlotId, Team, TeamId};

/// Column positions, located by header name with positional fallbacks
struct Columns {
    team: usize,
    preferred: usize,
    avoid: usize,
    blacklist: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Self {
        let find = |needle: &str, fallback: usize| {
            headers
                .iter()
                .position(|h| h.trim().to_lowercase().contains(needle))
                .unwrap_or(fallback)
        };
        Columns {
            team: find("team", 0),
            preferred: find("prefer", 1),
            avoid: find("avoid", 2),
            blacklist: find("blacklist", 3),
        }
    }
}

/// Parses one preference cell: comma-separated slot ids or labels
fn parse_slot_list(cell: &str, row: usize, slots: &[Slot]) -> Result<Vec<SlotId>> {
    cell.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            parse_slot_ref(part, slots).ok_or_else(|| LeagueError::UnknownSlotLabel {
                row,
                label: part.to_string(),
            })
        })
        .collect()
}

/// Loads a team roster from a CSV file with columns `team,preferred,avoid,blacklist`
pub fn load_teams<P: AsRef<Path>>(csv_path: P, slots: &[Slot]) -> Result<Vec<Team>> {
    let file = std::fs::File::open(csv_path)?;
    load_teams_from_reader(file, slots)
}

/// Loads a team roster from any CSV source.
///
/// Teams get ids in file order. Blank rows are skipped; a row with
/// preferences but no team name is an error.
pub fn load_teams_from_reader<R: Read>(reader: R, slots: &[Slot]) -> Result<Vec<Team>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = Columns::locate(reader.headers()?);
    let mut teams = Vec::new();

    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let row = i + 1;
        let cell = |col: usize| record.get(col).unwrap_or("");

        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let name = cell(columns.team).to_string();
        if name.is_empty() {
            return Err(LeagueError::InvalidRow {
                row,
                message: "team name is empty".to_string(),
            });
        }

        let mut preferences = Vec::new();
        for (col, pref_type) in [
            (columns.preferred, PreferenceType::Preferred),
            (columns.avoid, PreferenceType::Avoid),
            (columns.blacklist, PreferenceType::Blacklist),
        ] {
            for slot in parse_slot_list(cell(col), row, slots)? {
                preferences.push((slot, pref_type));
            }
        }

        debug!(row, team = %name, preferences = preferences.len(), "loaded team");
        let id = TeamId(teams.len() as u32);
        teams.push(Team::new(id, name, &preferences, slots.len() as u32)?);
    }

    Ok(teams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::build_slot_universe;
    use std::io::Write;

    const ROSTER: &str = "\
team,preferred,avoid,blacklist
SD,Wed Early,,\"Tue Early, Tue Late\"
Spikers,,\"Thu Early, thu late\",
Beached,\"0, 2, 4\",,

Dolomites,\"Thursday Early, 5\",,
";

    #[test]
    fn test_loads_roster_in_file_order() {
        let slots = build_slot_universe();
        let teams = load_teams_from_reader(ROSTER.as_bytes(), &slots).unwrap();

        let names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["SD", "Spikers", "Beached", "Dolomites"]);
        assert_eq!(teams[3].id, TeamId(3));

        let sd = &teams[0].preferences;
        assert_eq!(sd.slots_of(PreferenceType::Preferred).iter().copied().collect::<Vec<_>>(), vec![2]);
        assert_eq!(sd.slots_of(PreferenceType::Blacklist).iter().copied().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(teams[1].preferences.slots_except(&[PreferenceType::Avoid]), vec![0, 1, 2, 3]);
        assert_eq!(teams[3].preferences.slots_of(PreferenceType::Preferred).len(), 2);
    }

    #[test]
    fn test_columns_found_by_header_name() {
        let slots = build_slot_universe();
        let csv = "blacklist,team,preferred,avoid\n\"Tue Early\",Otters,Wed Late,\n";
        let teams = load_teams_from_reader(csv.as_bytes(), &slots).unwrap();

        assert_eq!(teams[0].name, "Otters");
        assert!(teams[0].has_blacklist());
        assert_eq!(teams[0].preferences.preference_for(3), Some(PreferenceType::Preferred));
    }

    #[test]
    fn test_unknown_label_reports_row() {
        let slots = build_slot_universe();
        let csv = "team,preferred,avoid,blacklist\nSD,Wed Early,,\nSpikers,Fri Late,,\n";
        let err = load_teams_from_reader(csv.as_bytes(), &slots).unwrap_err();

        match err {
            LeagueError::UnknownSlotLabel { row, label } => {
                assert_eq!(row, 2);
                assert_eq!(label, "Fri Late");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let slots = build_slot_universe();
        let csv = "team,preferred,avoid,blacklist\n,Wed Early,,\n";
        assert!(matches!(
            load_teams_from_reader(csv.as_bytes(), &slots),
            Err(LeagueError::InvalidRow { row: 1, .. })
        ));
    }

    #[test]
    fn test_conflicting_tiers_are_rejected() {
        let slots = build_slot_universe();
        let csv = "team,preferred,avoid,blacklist\nSD,Wed Early,,Wed Early\n";
        assert!(matches!(
            load_teams_from_reader(csv.as_bytes(), &slots),
            Err(LeagueError::ConflictingPreference { slot: 2, .. })
        ));
    }

    #[test]
    fn test_loads_from_file() {
        let slots = build_slot_universe();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ROSTER.as_bytes()).unwrap();

        let teams = load_teams(file.path(), &slots).unwrap();
        assert_eq!(teams.len(), 4);
    }

    #[test]
    fn test_shipped_sample_roster_matches_demo_league() {
        let slots = build_slot_universe();
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_teams.csv");
        let teams = load_teams(path, &slots).unwrap();

        let demo = crate::demo::demo_teams(slots.len() as u32).unwrap();
        assert_eq!(teams.len(), demo.len());
        for (loaded, built) in teams.iter().zip(&demo) {
            assert_eq!((loaded.id, &loaded.name), (built.id, &built.name));
            assert_eq!(loaded.preferences, built.preferences);
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_teams(dir.path().join("nope.csv"), &build_slot_universe()).unwrap_err();
        assert!(matches!(err, LeagueError::Io(_)));
    }
}
