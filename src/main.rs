use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};
use tokio::sync::Mutex;

use rusty_scorecard::RoundManager;
use rusty_scorecard::args::{self, StorageKind};
use rusty_scorecard::controller::round::{
    SharedRound, add_player, index, record_score, reset_round, round_fragment, start_round,
};
use rusty_scorecard::storage::{KeyValueStore, MemoryStore, SqliteStore};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = args::args_checks();

    let store: Box<dyn KeyValueStore> = match args.storage {
        StorageKind::Sqlite => {
            log::info!("keeping the round in {}", args.db_name.display());
            Box::new(SqliteStore::open(&args.db_name)?)
        }
        StorageKind::Memory => {
            log::info!("keeping the round in memory only");
            Box::new(MemoryStore::new())
        }
    };

    let manager = RoundManager::open(store)?;
    let round: Data<SharedRound> = Data::new(Mutex::new(manager));
    let static_dir = args.static_dir.clone();

    log::info!("listening on {}", args.bind);
    HttpServer::new(move || {
        App::new()
            .app_data(round.clone())
            .route("/", web::get().to(index))
            .route("/round", web::get().to(round_fragment))
            .route("/round/players", web::post().to(add_player))
            .route("/round/start", web::post().to(start_round))
            .route("/round/scores", web::post().to(record_score))
            .route("/round/reset", web::post().to(reset_round))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind(&args.bind)?
    .run()
    .await?;
    Ok(())
}
