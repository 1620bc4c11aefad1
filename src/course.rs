use serde::{Deserialize, Serialize};

use crate::error::CourseError;

pub const HOLE_COUNT: usize = 18;
pub const FRONT_NINE: usize = 9;
/// Highest stroke count accepted on one hole; anything above counts as unplayed.
pub const MAX_HOLE_STROKES: i32 = 99;

pub const DEFAULT_PARS: [i32; HOLE_COUNT] = [4, 4, 4, 3, 4, 3, 4, 4, 3, 4, 4, 5, 3, 4, 4, 4, 5, 4];
pub const DEFAULT_HANDICAPS: [u8; HOLE_COUNT] =
    [10, 8, 2, 18, 12, 16, 6, 4, 14, 11, 5, 1, 7, 13, 17, 15, 9, 3];
pub const DEFAULT_POT: f64 = 360.0;
pub const DEFAULT_CLOSEST_TO_PIN_HOLES: [u8; 4] = [4, 6, 9, 13];
pub const DEFAULT_STORAGE_KEY: &str = "golf_outing_scores";

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hole {
    /// 1-based hole number.
    pub number: u8,
    pub par: i32,
    /// 1 is the hardest hole on the course.
    pub handicap_rank: u8,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TeamPairing {
    #[serde(rename = "team")]
    pub team_name: String,
    pub player1: String,
    pub player2: String,
    pub handicaps: [i32; 2],
}

impl TeamPairing {
    #[must_use]
    pub fn new(team_name: &str, player1: &str, player2: &str, handicaps: [i32; 2]) -> Self {
        Self {
            team_name: team_name.to_string(),
            player1: player1.to_string(),
            player2: player2.to_string(),
            handicaps,
        }
    }

    /// Dropdown label, e.g. `Butters & Ben (6/31)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{} ({}/{})",
            self.team_name, self.handicaps[0], self.handicaps[1]
        )
    }
}

/// Static course data and roster. Built once at startup and never mutated.
#[derive(Clone, Debug)]
pub struct Course {
    holes: [Hole; HOLE_COUNT],
    hardest_first: [usize; HOLE_COUNT],
    total_par: i32,
    pot: f64,
    roster: Vec<TeamPairing>,
    closest_to_pin_holes: Vec<u8>,
}

impl Course {
    /// Validate and build a course.
    ///
    /// # Errors
    /// Returns an error if the hole data is not 18 holes long, a par falls
    /// outside 3..=5, the handicap ranks are not a permutation of 1..=18,
    /// the pot is not positive, team names repeat, or a closest-to-pin hole
    /// is not on the course.
    pub fn new(
        pars: &[i32],
        handicaps: &[u8],
        pot: f64,
        roster: Vec<TeamPairing>,
        closest_to_pin_holes: &[u8],
    ) -> Result<Self, CourseError> {
        let pars: [i32; HOLE_COUNT] =
            pars.try_into().map_err(|_| CourseError::HoleCount {
                field: "pars",
                expected: HOLE_COUNT,
                found: pars.len(),
            })?;
        let handicaps: [u8; HOLE_COUNT] =
            handicaps.try_into().map_err(|_| CourseError::HoleCount {
                field: "handicaps",
                expected: HOLE_COUNT,
                found: handicaps.len(),
            })?;

        for (idx, par) in pars.iter().enumerate() {
            if !(3..=5).contains(par) {
                return Err(CourseError::InvalidPar {
                    hole: idx + 1,
                    par: *par,
                });
            }
        }

        let mut seen = [false; HOLE_COUNT + 1];
        for rank in handicaps {
            let slot = usize::from(rank);
            if slot == 0 || slot > HOLE_COUNT {
                return Err(CourseError::InvalidHandicapRanks(format!(
                    "rank {rank} out of range"
                )));
            }
            if seen[slot] {
                return Err(CourseError::InvalidHandicapRanks(format!(
                    "rank {rank} repeated"
                )));
            }
            seen[slot] = true;
        }

        if !pot.is_finite() || pot <= 0.0 {
            return Err(CourseError::InvalidPot(pot.to_string()));
        }

        for (idx, pairing) in roster.iter().enumerate() {
            if roster[..idx]
                .iter()
                .any(|other| other.team_name == pairing.team_name)
            {
                return Err(CourseError::DuplicateTeam(pairing.team_name.clone()));
            }
        }

        let mut ctp_holes: Vec<u8> = Vec::with_capacity(closest_to_pin_holes.len());
        for &hole in closest_to_pin_holes {
            if hole == 0 || usize::from(hole) > HOLE_COUNT || ctp_holes.contains(&hole) {
                return Err(CourseError::InvalidClosestToPinHole(hole));
            }
            ctp_holes.push(hole);
        }
        ctp_holes.sort_unstable();

        Ok(Self::build(pars, handicaps, pot, roster, ctp_holes))
    }

    fn build(
        pars: [i32; HOLE_COUNT],
        handicaps: [u8; HOLE_COUNT],
        pot: f64,
        roster: Vec<TeamPairing>,
        closest_to_pin_holes: Vec<u8>,
    ) -> Self {
        let holes: [Hole; HOLE_COUNT] = std::array::from_fn(|idx| Hole {
            number: (idx + 1) as u8,
            par: pars[idx],
            handicap_rank: handicaps[idx],
        });
        let mut hardest_first: [usize; HOLE_COUNT] = std::array::from_fn(|idx| idx);
        hardest_first.sort_by_key(|&idx| holes[idx].handicap_rank);

        Self {
            holes,
            hardest_first,
            total_par: pars.iter().sum(),
            pot,
            roster,
            closest_to_pin_holes,
        }
    }

    #[must_use]
    pub fn holes(&self) -> &[Hole; HOLE_COUNT] {
        &self.holes
    }

    #[must_use]
    pub fn pars(&self) -> [i32; HOLE_COUNT] {
        self.holes.map(|hole| hole.par)
    }

    /// Hole indices (0-based) ordered by handicap rank, hardest first.
    ///
    /// Both the ranking comparator and the tie annotations walk holes in
    /// this order.
    pub fn hardest_first(&self) -> impl Iterator<Item = usize> + '_ {
        self.hardest_first.iter().copied()
    }

    #[must_use]
    pub fn total_par(&self) -> i32 {
        self.total_par
    }

    #[must_use]
    pub fn pot(&self) -> f64 {
        self.pot
    }

    #[must_use]
    pub fn roster(&self) -> &[TeamPairing] {
        &self.roster
    }

    #[must_use]
    pub fn team(&self, team_name: &str) -> Option<&TeamPairing> {
        self.roster.iter().find(|p| p.team_name == team_name)
    }

    #[must_use]
    pub fn is_known_team(&self, team_name: &str) -> bool {
        self.team(team_name).is_some()
    }

    #[must_use]
    pub fn closest_to_pin_holes(&self) -> &[u8] {
        &self.closest_to_pin_holes
    }

    /// Every rostered player, sorted by name.
    #[must_use]
    pub fn players(&self) -> Vec<String> {
        let mut players: Vec<String> = self
            .roster
            .iter()
            .flat_map(|p| [p.player1.clone(), p.player2.clone()])
            .collect();
        players.sort();
        players
    }
}

impl Default for Course {
    fn default() -> Self {
        Self::build(
            DEFAULT_PARS,
            DEFAULT_HANDICAPS,
            DEFAULT_POT,
            default_roster(),
            DEFAULT_CLOSEST_TO_PIN_HOLES.to_vec(),
        )
    }
}

#[must_use]
pub fn default_roster() -> Vec<TeamPairing> {
    [
        ("Butters & Ben", "Butters", "Ben", [6, 31]),
        ("Chris & Waldroff", "Chris", "Waldroff", [1, 32]),
        ("Couch & Ray", "Couch", "Ray", [14, 25]),
        ("Curry & Brandon", "Curry", "Brandon", [9, 29]),
        ("Dan & Jason", "Dan", "Jason", [3, 36]),
        ("Foxx & Jack", "Foxx", "Jack", [5, 33]),
        ("Guy & Colton", "Guy", "Colton", [16, 21]),
        ("Han & Jim", "Han", "Jim", [8, 24]),
        ("Jarrett & Trey", "Jarrett", "Trey", [2, 35]),
        ("Joe M & Tony", "Joe M", "Tony", [17, 22]),
        ("Lane & Houck", "Lane", "Houck", [15, 23]),
        ("Meister & Jesse", "Meister", "Jesse", [12, 19]),
        ("Merkle & Josh", "Merkle", "Josh", [11, 30]),
        ("Minges & Creel", "Minges", "Creel", [18, 20]),
        ("Nolan & Miniard", "Nolan", "Miniard", [13, 26]),
        ("Randy & Warman", "Randy", "Warman", [10, 27]),
        ("Seth & Jeff", "Seth", "Jeff", [4, 34]),
        ("Squeek & Noonan", "Squeek", "Noonan", [7, 28]),
    ]
    .into_iter()
    .map(|(team, p1, p2, hcp)| TeamPairing::new(team, p1, p2, hcp))
    .collect()
}
