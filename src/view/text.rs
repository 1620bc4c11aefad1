use std::fmt;

use crate::course::{FRONT_NINE, HOLE_COUNT};
use crate::view::snapshot::{HoleCell, ScoreboardSnapshot};

const TEAM_WIDTH: usize = 20;

fn cell_text(cell: &HoleCell) -> String {
    let mark = if cell.skins_winner {
        "*"
    } else if cell.tie_winning {
        "^"
    } else {
        ""
    };
    format!("{}{mark}", cell.display())
}

fn subtotal(value: i32) -> String {
    if value > 0 {
        value.to_string()
    } else {
        "-".to_string()
    }
}

/// Plain-text scoreboard for a terminal. `*` marks a skin, `^` a hole that
/// broke a tie in the team's favour.
pub struct TextScoreboard<'a>(pub &'a ScoreboardSnapshot);

impl fmt::Display for TextScoreboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;
        write_standings(f, snapshot)?;
        writeln!(f)?;
        write_skins(f, snapshot)?;
        writeln!(f)?;
        writeln!(f, "Closest to the pin")?;
        for entry in &snapshot.closest_to_pin {
            writeln!(f, "  Hole {:>2}: {}", entry.hole, entry.display())?;
        }
        Ok(())
    }
}

#[must_use]
pub fn render_text(snapshot: &ScoreboardSnapshot) -> String {
    TextScoreboard(snapshot).to_string()
}

fn write_standings(f: &mut fmt::Formatter<'_>, snapshot: &ScoreboardSnapshot) -> fmt::Result {
    write!(f, "{:>3} {:<TEAM_WIDTH$} {:>4} {:>5} ", "Pl", "Team", "Tot", "Par")?;
    for hole in 1..=HOLE_COUNT {
        write!(f, "{hole:>4}")?;
        if hole == FRONT_NINE {
            write!(f, "{:>5}", "Out")?;
        }
    }
    writeln!(f, "{:>5}", "In")?;

    if snapshot.rows.is_empty() {
        writeln!(f, "No scores entered yet")?;
    }
    for row in &snapshot.rows {
        write!(
            f,
            "{:>3} {:<TEAM_WIDTH$} {:>4} {:>5} ",
            row.placement,
            truncate(&row.team, TEAM_WIDTH),
            row.total,
            row.to_par
        )?;
        for (idx, cell) in row.holes.iter().enumerate() {
            write!(f, "{:>4}", cell_text(cell))?;
            if idx + 1 == FRONT_NINE {
                write!(f, "{:>5}", subtotal(row.front_nine))?;
            }
        }
        writeln!(f, "{:>5}", subtotal(row.back_nine))?;
    }
    Ok(())
}

fn write_skins(f: &mut fmt::Formatter<'_>, snapshot: &ScoreboardSnapshot) -> fmt::Result {
    let skins = &snapshot.skins;
    writeln!(f, "Skins ({} won, pot {:.2})", skins.total_skins, skins.pot)?;
    if skins.rows.is_empty() {
        writeln!(f, "  No skins won yet")?;
    }
    for row in &skins.rows {
        let holes: Vec<String> = row.holes.iter().map(u8::to_string).collect();
        writeln!(
            f,
            "  {:<TEAM_WIDTH$} {:>2}  holes {:<16} {:>9}",
            truncate(&row.team, TEAM_WIDTH),
            row.count,
            holes.join(", "),
            row.payout
        )?;
    }
    Ok(())
}

fn truncate(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}
