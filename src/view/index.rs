use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::view::scoreboard::{render_closest_to_pin, render_scoreboard, render_skins_table};
use crate::view::snapshot::ScoreboardSnapshot;

pub const DEFAULT_INDEX_TITLE: &str = "Golf Outing Scoreboard";

const STYLES: &str = "
body { font-family: sans-serif; background: #111827; color: #f3f4f6; }
table.styled-table { border-collapse: collapse; margin-bottom: 1.5em; }
table.styled-table th, table.styled-table td { padding: 0.3em 0.5em; text-align: center; }
table.styled-table tbody tr { background: #1f2937; }
td.eagle { background: #facc15; color: #111827; }
td.birdie { background: #dc2626; }
td.par { background: transparent; }
td.bogey { background: #2563eb; }
td.double-bogey { background: #1e3a8a; }
td.tie-win { background: #16a34a; }
td.tie-equal { background: #6b7280; }
td.skins-winner { outline: 2px solid #facc15; }
td.subtotal, td.total { font-weight: bold; }
p.refresh { font-size: 0.8em; color: #9ca3af; }
";

#[must_use]
pub fn render_index_template(title: &str, snapshot: &ScoreboardSnapshot) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (title) }
            style { (PreEscaped(STYLES)) }
        }
        body {
            h1 { (title) }
            @if let Some(saved_at) = &snapshot.saved_at {
                p class="refresh" { "Last saved: " (saved_at) }
            }
            div id="scores" {
                (render_scoreboard(snapshot))
            }
            div id="skins" {
                (render_skins_table(&snapshot.skins))
            }
            div id="closest-to-pin" {
                (render_closest_to_pin(&snapshot.closest_to_pin))
            }
        }
    }
}
