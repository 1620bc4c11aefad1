use std::cmp::Ordering;

use crate::course::Course;
use crate::model::ScoreRecord;

/// Order two cards with the same total by matching holes hardest first.
///
/// At the first hole where the two differ:
/// - a team with no score yet on the hole goes ahead of a team that has one,
/// - otherwise the lower score goes ahead.
///
/// Holes neither team has played are skipped. Cards that never differ
/// compare equal.
#[must_use]
pub fn compare_by_hardest_holes(course: &Course, a: &ScoreRecord, b: &ScoreRecord) -> Ordering {
    for idx in course.hardest_first() {
        match (a.hole(idx), b.hole(idx)) {
            (0, 0) => {}
            (_, 0) => return Ordering::Greater,
            (0, _) => return Ordering::Less,
            (sa, sb) if sa != sb => return sa.cmp(&sb),
            _ => {}
        }
    }
    Ordering::Equal
}

/// Standings order: fewest strokes first, then the hardest-holes tiebreak.
#[must_use]
pub fn compare_records(course: &Course, a: &ScoreRecord, b: &ScoreRecord) -> Ordering {
    a.total
        .cmp(&b.total)
        .then_with(|| compare_by_hardest_holes(course, a, b))
}
