use maud::{Markup, html};

use super::types::{RoundView, display_style};
use super::{render_player_list, render_score_grid, render_summary_table};
use crate::model::RoundState;
use crate::mvu::round::RESET_PROMPT;

pub const ROUND_TARGET: &str = "#round";
const CONFIRMED_VALS: &str = r#"{"confirmed": "true"}"#;

#[must_use]
pub fn render_round(state: &RoundState) -> Markup {
    render_round_view(&RoundView::from_state(state))
}

#[must_use]
pub fn render_round_view(view: &RoundView<'_>) -> Markup {
    let panels = view.panels;
    html! {
        div id="round" {
            div id="player-entry" style=(display_style(panels.entry)) {
                h2 { "Players" }
                form hx-post="round/players" hx-target=(ROUND_TARGET) hx-swap="outerHTML" {
                    input id="player-name" type="text" name="name" placeholder="Player name";
                    button id="addPlayerButton" type="submit" { "Add Player" }
                }
                button id="startRoundButton" type="button"
                    hx-post="round/start" hx-target=(ROUND_TARGET) hx-swap="outerHTML" {
                    "Start Round"
                }
            }
            (render_player_list(&view.players))
            div id="scorecard" style=(display_style(panels.scorecard)) {
                h2 { "Scorecard" }
                (render_score_grid(&view.players, view.grid))
            }
            div id="round-summary" style=(display_style(panels.summary)) {
                h2 { "Round Summary" }
                (render_summary_table(&view.players, view.started))
            }
            div id="new-round-button-container" style=(display_style(panels.new_round)) {
                button id="newRoundButton" type="button"
                    hx-post="round/reset" hx-confirm=(RESET_PROMPT)
                    hx-vals=(CONFIRMED_VALS)
                    hx-target=(ROUND_TARGET) hx-swap="outerHTML" {
                    "New Round"
                }
            }
        }
    }
}
