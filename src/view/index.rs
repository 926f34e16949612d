use maud::{Markup, html};

use crate::{HTMX_INTEGRITY, HTMX_PATH};
use crate::model::RoundState;
use crate::view::round::render_round;

pub const INDEX_TITLE: &str = "Golf Scorecard";

#[must_use]
pub fn render_index_template(title: &str, state: &RoundState) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" href="static/scorecard.css";
            title { (title) }
            script src=(HTMX_PATH) defer integrity=(HTMX_INTEGRITY) crossorigin="anonymous" {}
            script src="static/scorecard.js" defer {}
        }
        body {
            h1 { (title) }
            (render_round(state))
        }
    }
}
