use maud::{Markup, html};

use crate::course::FRONT_NINE;
use crate::view::snapshot::{ClosestToPinEntry, HoleCell, ScoreboardSnapshot, SkinsTable};

fn subtotal(value: i32) -> String {
    if value > 0 {
        value.to_string()
    } else {
        "-".to_string()
    }
}

fn hole_cell(cell: &HoleCell) -> Markup {
    let classes = cell.classes();
    html! {
        @if classes.is_empty() {
            td { (cell.display()) }
        } @else {
            td class=(classes.join(" ")) { (cell.display()) }
        }
    }
}

#[must_use]
pub fn render_scoreboard(snapshot: &ScoreboardSnapshot) -> Markup {
    html! {
        h3 { "Scoreboard" }

        table class="styled-table" id="scoreboard" {
            thead {
                tr {
                    th { "PLACE" }
                    th { "TEAM" }
                    th { "SCORE" }
                    th { "TO PAR" }
                    @for hole in 1..=FRONT_NINE {
                        th { (hole) }
                    }
                    th { "OUT" }
                    @for hole in (FRONT_NINE + 1)..=(2 * FRONT_NINE) {
                        th { (hole) }
                    }
                    th { "IN" }
                }
            }
            tbody {
                @if snapshot.rows.is_empty() {
                    tr {
                        td colspan="24" { "No scores entered yet" }
                    }
                }
                @for row in &snapshot.rows {
                    tr {
                        td { (row.placement) }
                        td { (row.team) }
                        td class="total" { (row.total) }
                        td { (row.to_par) }
                        @for cell in row.holes.iter().take(FRONT_NINE) {
                            (hole_cell(cell))
                        }
                        td class="subtotal" { (subtotal(row.front_nine)) }
                        @for cell in row.holes.iter().skip(FRONT_NINE) {
                            (hole_cell(cell))
                        }
                        td class="subtotal" { (subtotal(row.back_nine)) }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_skins_table(skins: &SkinsTable) -> Markup {
    html! {
        h3 { "Skins" }

        table class="styled-table" id="skins-table" {
            thead {
                tr {
                    th { "TEAM" }
                    th { "SKINS" }
                    th { "HOLES" }
                    th { "PAYOUT" }
                }
            }
            tbody {
                @if skins.rows.is_empty() {
                    tr {
                        td colspan="4" { "No skins won yet" }
                    }
                }
                @for row in &skins.rows {
                    @let holes = row.holes.iter().map(u8::to_string).collect::<Vec<_>>().join(", ");
                    tr {
                        td { (row.team) }
                        td { (row.count) }
                        td { (holes) }
                        td { (row.payout) }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_closest_to_pin(entries: &[ClosestToPinEntry]) -> Markup {
    html! {
        h3 { "Closest to the Pin" }

        table class="styled-table" id="closest-to-pin-table" {
            thead {
                tr {
                    @for entry in entries {
                        th { "Hole " (entry.hole) }
                    }
                }
            }
            tbody {
                tr {
                    @for entry in entries {
                        td id=(format!("ctp-display-hole-{}", entry.hole)) { (entry.display()) }
                    }
                }
            }
        }
    }
}
