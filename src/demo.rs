use crate::error::Result;
use crate::schedule::{PreferenceType, Team, TeamId};

/// The four-team league used when no roster is supplied
pub fn demo_teams(slot_count: u32) -> Result<Vec<Team>> {
    use PreferenceType::*;

    let roster: [(&str, &[(u32, PreferenceType)]); 4] = [
        ("SD", &[(2, Preferred), (0, Blacklist), (1, Blacklist)]),
        ("Spikers", &[(4, Avoid), (5, Avoid)]),
        ("Beached", &[(0, Preferred), (2, Preferred), (4, Preferred)]),
        ("Dolomites", &[(4, Preferred), (5, Preferred)]),
    ];

    roster
        .iter()
        .enumerate()
        .map(|(i, (name, prefs))| Team::new(TeamId(i as u32), *name, prefs, slot_count))
        .collect()
}
