use crate::mvu::Host;

/// Host for a single htmx request.
///
/// The browser has already asked its `hx-confirm` question before the request
/// is sent, so the answer arrives with the form. Alerts are collected and sent
/// back as an `HX-Trigger` event for the page script to show.
#[derive(Debug, Default, Clone)]
pub struct WebHost {
    confirmed: bool,
    alerts: Vec<String>,
}

impl WebHost {
    #[must_use]
    pub fn new(confirmed: bool) -> Self {
        Self {
            confirmed,
            alerts: Vec::new(),
        }
    }

    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl Host for WebHost {
    fn confirm(&mut self, _message: &str) -> bool {
        self.confirmed
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    // `record_score` answers with a fresh `RoundManager::render`, which puts the
    // stored value back in the cell.
    fn revert_cell(&mut self, _player: usize, _hole: usize, _value: i32) {}
}
