use std::collections::VecDeque;

use crate::error::ScorecardError;
use crate::mvu::round::{Deps, Msg, RoundModel, run_effect, update};

/// Runs the MVU loop for one incoming message, draining effects in the order
/// `update` asked for them (persist before render).
///
/// # Errors
///
/// Stops at the first effect that fails and returns its error. Anything
/// already applied to the model stays applied.
pub fn dispatch(
    model: &mut RoundModel,
    msg: Msg,
    mut deps: Deps<'_>,
) -> Result<(), ScorecardError> {
    let mut effects: VecDeque<_> = update(model, msg).into();
    while let Some(effect) = effects.pop_front() {
        if let Some(next) = run_effect(effect, model, &mut deps)? {
            effects.extend(update(model, next));
        }
    }
    Ok(())
}
