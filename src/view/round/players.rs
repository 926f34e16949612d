use maud::{Markup, html};

use super::types::PlayerLine;

pub fn render_player_list(players: &[PlayerLine]) -> Markup {
    html! {
        ul id="player-list" {
            @for player in players {
                li style=(format!("color: {};", player.color)) {
                    (player.name) " - Total: " (player.total)
                }
            }
        }
    }
}
