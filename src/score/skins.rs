use std::cmp::Ordering;

use crate::model::{ScoreRecord, SkinsResult};

/// Award a skin on every hole where exactly one team holds the lowest
/// entered score and that score is under par.
///
/// Always recomputed from the full field; nothing is carried between calls.
#[must_use]
pub fn compute_skins(records: &[ScoreRecord], pars: &[i32]) -> SkinsResult {
    let mut skins = SkinsResult::default();

    for (idx, &par) in pars.iter().enumerate() {
        let mut lowest = i32::MAX;
        let mut leaders: Vec<&str> = Vec::new();

        for record in records {
            let score = record.hole(idx);
            if score == 0 {
                continue;
            }
            match score.cmp(&lowest) {
                Ordering::Less => {
                    lowest = score;
                    leaders.clear();
                    leaders.push(&record.team);
                }
                Ordering::Equal => leaders.push(&record.team),
                Ordering::Greater => {}
            }
        }

        if let [winner] = leaders.as_slice() {
            if lowest < par {
                skins.award(winner, (idx + 1) as u8);
            }
        }
    }

    skins
}

/// Even split of the pot across every skin won; 0 when nobody has one.
#[must_use]
pub fn payout_per_skin(pot: f64, skins: &SkinsResult) -> f64 {
    match skins.total_skins() {
        0 => 0.0,
        total => pot / total as f64,
    }
}

#[must_use]
pub fn team_payout(pot: f64, skins: &SkinsResult, team: &str) -> f64 {
    match skins.total_skins() {
        0 => 0.0,
        total => pot * skins.holes_for(team).len() as f64 / total as f64,
    }
}

#[must_use]
pub fn format_payout(amount: f64) -> String {
    format!("${amount:.2}")
}
