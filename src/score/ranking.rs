use ahash::RandomState;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use crate::course::Course;
use crate::model::ScoreRecord;
use crate::score::tiebreak::compare_records;

/// Display-only marks from replaying the hardest-holes walk over a group of
/// teams sharing a total. Hole indices are 0-based.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TieMarks {
    /// Holes where the team held the lowest score among those still tied.
    pub winning: BTreeSet<usize>,
    /// Holes where the team was level, beaten, or nobody had scored yet.
    pub equal: BTreeSet<usize>,
}

impl TieMarks {
    #[must_use]
    pub fn is_winning(&self, idx: usize) -> bool {
        self.winning.contains(&idx)
    }

    #[must_use]
    pub fn is_equal(&self, idx: usize) -> bool {
        self.equal.contains(&idx)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.winning.is_empty() && self.equal.is_empty()
    }
}

/// Tie marks keyed by team name. Only teams sharing a total appear.
pub type TieAnnotations = HashMap<String, TieMarks, RandomState>;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RankedTeam {
    /// 1-based; every team gets a distinct placement.
    pub placement: usize,
    pub record: ScoreRecord,
    pub ties: TieMarks,
}

/// Final standings. Ties on total are broken by the hardest-holes
/// comparator; teams that stay level keep their store order.
#[must_use]
pub fn rank(course: &Course, records: &[ScoreRecord]) -> Vec<RankedTeam> {
    let mut annotations = tie_annotations(course, records);

    let mut sorted: Vec<&ScoreRecord> = records.iter().collect();
    sorted.sort_by(|a, b| compare_records(course, a, b));

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, record)| RankedTeam {
            placement: i + 1,
            ties: annotations.remove(&record.team).unwrap_or_default(),
            record: record.clone(),
        })
        .collect()
}

#[must_use]
pub fn tie_annotations(course: &Course, records: &[ScoreRecord]) -> TieAnnotations {
    let mut by_total: HashMap<i32, Vec<&ScoreRecord>, RandomState> = HashMap::default();
    for record in records {
        by_total.entry(record.total).or_default().push(record);
    }

    let mut annotations = TieAnnotations::default();
    for group in by_total.values().filter(|group| group.len() > 1) {
        for record in group {
            annotations.entry(record.team.clone()).or_default();
        }
        annotate_group(course, group, &mut annotations);
    }
    annotations
}

fn annotate_group(course: &Course, group: &[&ScoreRecord], annotations: &mut TieAnnotations) {
    let mut still_tied: Vec<&ScoreRecord> = group.to_vec();

    for idx in course.hardest_first() {
        if still_tied.len() <= 1 {
            break;
        }

        let lowest = still_tied
            .iter()
            .map(|r| r.hole(idx))
            .filter(|&score| score > 0)
            .min();

        let Some(lowest) = lowest else {
            for record in &still_tied {
                mark(annotations, record).equal.insert(idx);
            }
            continue;
        };

        // Beaten scores are all marked equal, not ranked against each other.
        for record in &still_tied {
            match record.hole(idx) {
                score if score == lowest => {
                    mark(annotations, record).winning.insert(idx);
                }
                score if score > 0 => {
                    mark(annotations, record).equal.insert(idx);
                }
                _ => {}
            }
        }
        still_tied.retain(|r| r.hole(idx) == lowest);
    }
}

fn mark<'a>(annotations: &'a mut TieAnnotations, record: &ScoreRecord) -> &'a mut TieMarks {
    annotations.entry(record.team.clone()).or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::HOLE_COUNT;

    fn card(team: &str, holes: [i32; HOLE_COUNT]) -> ScoreRecord {
        ScoreRecord::new(team, holes, 70)
    }

    #[test]
    fn lone_totals_get_no_marks() {
        let course = Course::default();
        let records = vec![card("A", [4; HOLE_COUNT]), card("B", [5; HOLE_COUNT])];
        let ranked = rank(&course, &records);
        assert!(ranked.iter().all(|r| r.ties.is_empty()));
        assert_eq!(ranked[0].record.team, "A");
        assert_eq!(ranked[1].placement, 2);
    }

    #[test]
    fn walk_stops_once_tie_is_broken() {
        let course = Course::default();
        let mut a = [4; HOLE_COUNT];
        let mut b = [4; HOLE_COUNT];
        // hardest hole (index 11) splits them; index 0 evens the totals
        a[11] = 4;
        b[11] = 5;
        a[0] = 5;
        b[0] = 4;
        let marks = tie_annotations(&course, &[card("A", a), card("B", b)]);

        assert_eq!(marks["A"].winning, BTreeSet::from([11]));
        assert!(marks["A"].equal.is_empty());
        assert_eq!(marks["B"].equal, BTreeSet::from([11]));
        assert!(marks["B"].winning.is_empty());
    }

    #[test]
    fn level_holes_are_winning_for_every_leader() {
        let course = Course::default();
        let mut a = [4; HOLE_COUNT];
        let mut b = [4; HOLE_COUNT];
        // index 11 level, index 2 (rank 2) splits
        a[2] = 3;
        b[2] = 4;
        b[0] = 3;
        let marks = tie_annotations(&course, &[card("A", a), card("B", b)]);
        assert_eq!(marks["A"].winning, BTreeSet::from([11, 2]));
        assert_eq!(marks["B"].winning, BTreeSet::from([11]));
        assert_eq!(marks["B"].equal, BTreeSet::from([2]));
    }

    #[test]
    fn unplayed_holes_are_equal_for_whole_group() {
        let course = Course::default();
        let mut a = [0; HOLE_COUNT];
        let mut b = [0; HOLE_COUNT];
        // rank 3 is index 17
        a[17] = 4;
        b[17] = 5;
        a[0] = 5;
        b[0] = 4;
        let marks = tie_annotations(&course, &[card("A", a), card("B", b)]);
        assert_eq!(marks["A"].equal, BTreeSet::from([11, 2]));
        assert_eq!(marks["A"].winning, BTreeSet::from([17]));
        assert_eq!(marks["B"].equal, BTreeSet::from([11, 2, 17]));
    }

    #[test]
    fn three_way_tie_peels_off_losers() {
        let course = Course::default();
        let a = [4; HOLE_COUNT];
        let mut b = [4; HOLE_COUNT];
        let mut c = [4; HOLE_COUNT];
        // index 11: A and B lead, C beaten
        c[11] = 5;
        c[0] = 3;
        // index 2: A leads, B beaten
        b[2] = 5;
        b[0] = 3;
        let records = [card("A", a), card("B", b), card("C", c)];
        let marks = tie_annotations(&course, &records);

        assert_eq!(marks["A"].winning, BTreeSet::from([11, 2]));
        assert_eq!(marks["B"].winning, BTreeSet::from([11]));
        assert_eq!(marks["B"].equal, BTreeSet::from([2]));
        assert_eq!(marks["C"].equal, BTreeSet::from([11]));
        assert!(marks["C"].winning.is_empty());

        let ranked = rank(&course, &records);
        let order: Vec<&str> = ranked.iter().map(|r| r.record.team.as_str()).collect();
        assert_eq!(order, ["A", "B", "C"]);
    }

    #[test]
    fn fully_level_cards_keep_store_order() {
        let course = Course::default();
        let records = vec![
            card("Second", [4; HOLE_COUNT]),
            card("First", [4; HOLE_COUNT]),
        ];
        let ranked = rank(&course, &records);
        assert_eq!(ranked[0].record.team, "Second");
        assert_eq!(ranked[1].record.team, "First");
        assert_eq!(ranked[0].placement, 1);
        assert_eq!(ranked[1].placement, 2);
    }
}
