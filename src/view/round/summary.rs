use maud::{Markup, html};

use super::types::{PlayerLine, display_style};

pub fn render_summary_table(players: &[PlayerLine], started: bool) -> Markup {
    html! {
        table id="summary-table" class="styled-table" style=(display_style(started)) {
            @if started {
                tr {
                    th { "Player" }
                    th { "Total Score" }
                }
                @for player in players {
                    tr {
                        td { (player.name) }
                        td { (player.total) }
                    }
                }
            }
        }
    }
}
