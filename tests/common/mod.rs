#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use rusty_scorecard::RoundManager;
use rusty_scorecard::mvu::Host;
use rusty_scorecard::storage::MemoryStore;

/// Host that answers confirmations with a fixed reply and remembers everything
/// it was asked to show.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub answer: bool,
    pub confirms: Vec<String>,
    pub alerts: Vec<String>,
    pub reverts: Vec<(usize, usize, i32)>,
}

impl RecordingHost {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            ..Self::default()
        }
    }
}

impl Host for RecordingHost {
    fn confirm(&mut self, message: &str) -> bool {
        self.confirms.push(message.to_string());
        self.answer
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn revert_cell(&mut self, player: usize, hole: usize, value: i32) {
        self.reverts.push((player, hole, value));
    }
}

pub fn memory_manager() -> RoundManager<MemoryStore> {
    RoundManager::new(MemoryStore::new())
}

pub fn manager_with_players(names: &[&str]) -> RoundManager<MemoryStore> {
    let mut manager = memory_manager();
    let mut host = RecordingHost::default();
    for name in names {
        manager
            .add_player(name, &mut host)
            .expect("memory store never fails");
    }
    manager
}

pub fn temp_db_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "scorecard_{tag}_{}.db",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time went backwards")
            .as_nanos()
    ))
}
