use maud::{Markup, html};

use super::types::PlayerLine;
use crate::model::{HoleScores, NUM_HOLES};

/// One row per hole, one editable column per player. Each cell posts its new
/// text back on change and swaps the whole round.
pub fn render_score_grid(players: &[PlayerLine], grid: &[HoleScores]) -> Markup {
    html! {
        table id="score-table" class="styled-table" {
            thead {
                tr {
                    th { "Hole" }
                    @for player in players {
                        th { (player.name) }
                    }
                }
            }
            tbody {
                @for hole in 0..NUM_HOLES {
                    tr {
                        td { (hole + 1) }
                        @for (line, row) in players.iter().zip(grid) {
                            td {
                                input type="number" name="value"
                                    data-player=(line.index) data-hole=(hole)
                                    value=(row[hole])
                                    hx-post=(format!("round/scores?player={}&hole={hole}", line.index))
                                    hx-trigger="change" hx-target="#round" hx-swap="outerHTML";
                            }
                        }
                    }
                }
            }
        }
    }
}
