use serde::Serialize;
use std::cmp::Reverse;

use crate::course::Course;
use crate::model::{ScoreCategory, SkinsResult};
use crate::mvu::Outing;
use crate::score::{RankedTeam, format_payout, payout_per_skin, rank, team_payout};

pub const UNSET_PLACEHOLDER: &str = "---";

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HoleCell {
    pub hole: u8,
    pub par: i32,
    pub score: i32,
    pub category: ScoreCategory,
    pub tie_winning: bool,
    pub tie_equal: bool,
    pub skins_winner: bool,
}

impl HoleCell {
    #[must_use]
    pub fn display(&self) -> String {
        if self.score > 0 {
            self.score.to_string()
        } else {
            "-".to_string()
        }
    }

    /// CSS classes in display order. A skin is always shown; a tie mark
    /// replaces the par category.
    #[must_use]
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::with_capacity(2);
        if self.skins_winner {
            classes.push("skins-winner");
        }
        if self.tie_winning {
            classes.push("tie-win");
        } else if self.tie_equal {
            classes.push("tie-equal");
        } else if let Some(class) = self.category.css_class() {
            classes.push(class);
        }
        classes
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ScoreboardRow {
    pub placement: usize,
    pub team: String,
    pub total: i32,
    pub to_par: String,
    pub holes: Vec<HoleCell>,
    pub front_nine: i32,
    pub back_nine: i32,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SkinsRow {
    pub team: String,
    pub count: usize,
    pub holes: Vec<u8>,
    pub payout_amount: f64,
    pub payout: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SkinsTable {
    pub rows: Vec<SkinsRow>,
    pub total_skins: usize,
    pub payout_per_skin: f64,
    pub pot: f64,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ClosestToPinEntry {
    pub hole: u8,
    pub player: Option<String>,
}

impl ClosestToPinEntry {
    #[must_use]
    pub fn display(&self) -> &str {
        self.player.as_deref().unwrap_or(UNSET_PLACEHOLDER)
    }
}

/// Everything a renderer needs; no further scoring logic required.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ScoreboardSnapshot {
    pub rows: Vec<ScoreboardRow>,
    pub skins: SkinsTable,
    pub closest_to_pin: Vec<ClosestToPinEntry>,
    pub saved_at: Option<String>,
}

#[must_use]
pub fn build_snapshot(outing: &Outing) -> ScoreboardSnapshot {
    let rows = rank(&outing.course, outing.store.all())
        .iter()
        .map(|ranked| build_row(&outing.course, ranked, &outing.skins))
        .collect();

    ScoreboardSnapshot {
        rows,
        skins: build_skins_table(outing.course.pot(), &outing.skins),
        closest_to_pin: outing
            .closest_to_pin
            .entries()
            .map(|(hole, player)| ClosestToPinEntry {
                hole,
                player: player.map(str::to_string),
            })
            .collect(),
        saved_at: outing.saved_at.clone(),
    }
}

fn build_row(course: &Course, ranked: &RankedTeam, skins: &SkinsResult) -> ScoreboardRow {
    let record = &ranked.record;
    let holes = course
        .holes()
        .iter()
        .enumerate()
        .map(|(idx, hole)| {
            let score = record.hole(idx);
            // marks only show on holes that carry a score
            let entered = score > 0;
            HoleCell {
                hole: hole.number,
                par: hole.par,
                score,
                category: ScoreCategory::from_score(score, hole.par),
                tie_winning: entered && ranked.ties.is_winning(idx),
                tie_equal: entered && ranked.ties.is_equal(idx),
                skins_winner: entered && skins.is_skin(&record.team, hole.number),
            }
        })
        .collect();

    ScoreboardRow {
        placement: ranked.placement,
        team: record.team.clone(),
        total: record.total,
        to_par: record.to_par_display(),
        holes,
        front_nine: record.front_nine(),
        back_nine: record.back_nine(),
    }
}

/// Skins rows, most skins first; equal counts in team-name order.
#[must_use]
pub fn build_skins_table(pot: f64, skins: &SkinsResult) -> SkinsTable {
    let mut rows: Vec<SkinsRow> = skins
        .iter()
        .map(|(team, holes)| {
            let payout_amount = team_payout(pot, skins, team);
            SkinsRow {
                team: team.to_string(),
                count: holes.len(),
                holes: holes.to_vec(),
                payout_amount,
                payout: format_payout(payout_amount),
            }
        })
        .collect();
    rows.sort_by_key(|row| Reverse(row.count));

    SkinsTable {
        rows,
        total_skins: skins.total_skins(),
        payout_per_skin: payout_per_skin(pot, skins),
        pot,
    }
}

impl Outing {
    #[must_use]
    pub fn scoreboard(&self) -> ScoreboardSnapshot {
        build_snapshot(self)
    }
}
