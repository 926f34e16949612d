/// The presentation surface a round is shown on.
///
/// Everything that needs an answer from, or a side effect on, the person at
/// the scorecard goes through here.
pub trait Host {
    /// Blocking yes/no question. `true` means go ahead.
    fn confirm(&mut self, message: &str) -> bool;
    fn alert(&mut self, message: &str);
    /// Put a cell back to the value the round actually holds.
    fn revert_cell(&mut self, player: usize, hole: usize, value: i32);
}

/// A host with nobody in front of it: confirms nothing, shows nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl Host for Headless {
    fn confirm(&mut self, _message: &str) -> bool {
        false
    }

    fn alert(&mut self, message: &str) {
        log::warn!("alert with no host attached: {message}");
    }

    fn revert_cell(&mut self, _player: usize, _hole: usize, _value: i32) {}
}
