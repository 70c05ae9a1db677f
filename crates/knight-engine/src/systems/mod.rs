pub mod enemy;
pub mod pickup;
pub mod player;
pub mod step;

use crate::api::types::GameEvent;

/// Record an event for the host and trace it.
pub(crate) fn emit(events: &mut Vec<GameEvent>, event: GameEvent) {
    if event.is_transition() {
        log::info!("event: {:?}", event);
    } else {
        log::debug!("event: {:?}", event);
    }
    events.push(event);
}
