use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use super::{SharedRound, WebHost};
use crate::error::ScorecardError;
use crate::view::index::{INDEX_TITLE, render_index_template};

pub const SCORE_REJECTED_EVENT: &str = "scoreRejected";

#[derive(Debug, Deserialize)]
pub struct PlayerForm {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CellQuery {
    pub player: usize,
    pub hole: usize,
}

#[derive(Debug, Deserialize)]
pub struct ScoreForm {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetForm {
    #[serde(default)]
    pub confirmed: String,
}

pub async fn index(round: Data<SharedRound>) -> impl Responder {
    let manager = round.lock().await;
    let markup = render_index_template(INDEX_TITLE, manager.state());
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn round_fragment(round: Data<SharedRound>) -> impl Responder {
    let manager = round.lock().await;
    fragment(&manager.render().into_string(), &WebHost::default())
}

pub async fn add_player(
    round: Data<SharedRound>,
    form: web::Form<PlayerForm>,
) -> impl Responder {
    let mut manager = round.lock().await;
    let mut host = WebHost::default();
    match manager.add_player(&form.name, &mut host) {
        Ok(()) => fragment(&manager.markup().into_string(), &host),
        Err(e) => error_response(&e),
    }
}

pub async fn start_round(round: Data<SharedRound>) -> impl Responder {
    let mut manager = round.lock().await;
    let mut host = WebHost::default();
    match manager.start_round(&mut host) {
        Ok(()) => fragment(&manager.markup().into_string(), &host),
        Err(e) => error_response(&e),
    }
}

pub async fn record_score(
    round: Data<SharedRound>,
    cell: web::Query<CellQuery>,
    form: web::Form<ScoreForm>,
) -> impl Responder {
    let mut manager = round.lock().await;
    let mut host = WebHost::default();
    match manager.record_score(cell.player, cell.hole, &form.value, &mut host) {
        // A rejected value never renders, so project afresh to put the cell back.
        Ok(()) => fragment(&manager.render().into_string(), &host),
        Err(e) => error_response(&e),
    }
}

pub async fn reset_round(
    round: Data<SharedRound>,
    form: Option<web::Form<ResetForm>>,
) -> impl Responder {
    let confirmed = form.is_some_and(|f| f.confirmed.trim().eq_ignore_ascii_case("true"));
    let mut manager = round.lock().await;
    let mut host = WebHost::new(confirmed);
    match manager.reset_round(&mut host) {
        Ok(()) => fragment(&manager.markup().into_string(), &host),
        Err(e) => error_response(&e),
    }
}

fn fragment(body: &str, host: &WebHost) -> HttpResponse {
    let mut resp = HttpResponse::Ok();
    resp.content_type("text/html");
    if let Some(message) = host.alerts().last() {
        resp.insert_header(("HX-Trigger", json!({ SCORE_REJECTED_EVENT: message }).to_string()));
    }
    resp.body(body.to_string())
}

fn error_response(e: &ScorecardError) -> HttpResponse {
    match e {
        ScorecardError::CellOutOfRange { .. } => {
            HttpResponse::BadRequest().json(json!({"error": e.to_string()}))
        }
        _ => {
            log::error!("round operation failed: {e}");
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}
