use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageKind {
    /// Rounds survive restarts in a sqlite file.
    Sqlite,
    /// Rounds live only as long as the process.
    Memory,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Where the round is kept: sqlite or memory
    #[arg(
        short = 's',
        long,
        value_name = "STORAGE",
        value_enum,
        default_value_t = StorageKind::Sqlite
    )]
    pub storage: StorageKind,
    /// For sqlite, the database filename.
    #[arg(short = 'n', long, value_name = "DATABASE_NAME", default_value = "scorecard.db")]
    pub db_name: PathBuf,
    #[arg(short = 'b', long, value_name = "BIND_ADDR", default_value = "0.0.0.0:8081")]
    pub bind: String,
    #[arg(long, value_name = "STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub storage: StorageKind,
    pub db_name: PathBuf,
    pub bind: String,
    pub static_dir: PathBuf,
}
