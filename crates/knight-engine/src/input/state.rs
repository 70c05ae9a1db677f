use serde::{Deserialize, Serialize};
use crate::input::queue::InputEvent;

bitflags::bitflags! {
    /// Logical buttons the simulation reads.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Buttons: u8 {
        const LEFT   = 1 << 0;
        const RIGHT  = 1 << 1;
        const JUMP   = 1 << 2;
        const ATTACK = 1 << 3;
    }
}

/// DOM key codes bound to each logical button. Several keys may share a button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: Vec<u32>,
    pub right: Vec<u32>,
    pub jump: Vec<u32>,
    pub attack: Vec<u32>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            // ArrowLeft, A
            left: vec![37, 65],
            // ArrowRight, D
            right: vec![39, 68],
            // ArrowUp, W, Space
            jump: vec![38, 87, 32],
            // X, J
            attack: vec![88, 74],
        }
    }
}

impl KeyBindings {
    /// The buttons a key code drives (empty if unbound).
    pub fn buttons_for(&self, key_code: u32) -> Buttons {
        let mut buttons = Buttons::empty();
        if self.left.contains(&key_code) {
            buttons |= Buttons::LEFT;
        }
        if self.right.contains(&key_code) {
            buttons |= Buttons::RIGHT;
        }
        if self.jump.contains(&key_code) {
            buttons |= Buttons::JUMP;
        }
        if self.attack.contains(&key_code) {
            buttons |= Buttons::ATTACK;
        }
        buttons
    }
}

/// What one tick sees: buttons currently held, and buttons that went down
/// since the previous tick's snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub held: Buttons,
    pub pressed: Buttons,
}

impl InputSnapshot {
    pub fn held(held: Buttons) -> Self {
        Self { held, pressed: Buttons::empty() }
    }

    /// Held and freshly pressed in the same tick.
    pub fn pressed(buttons: Buttons) -> Self {
        Self { held: buttons, pressed: buttons }
    }

    pub fn is_held(&self, b: Buttons) -> bool {
        self.held.contains(b)
    }

    pub fn just_pressed(&self, b: Buttons) -> bool {
        self.pressed.contains(b)
    }
}

/// Folds key events into held/pressed state between ticks.
///
/// Held state is tracked per key so that releasing one of two keys bound to the
/// same button keeps the button held.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held_keys: Vec<u32>,
    held: Buttons,
    pressed: Buttons,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one key event. Custom events are ignored here.
    pub fn apply(&mut self, event: &InputEvent, bindings: &KeyBindings) {
        match *event {
            InputEvent::KeyDown { key_code } => {
                if self.held_keys.contains(&key_code) {
                    // Auto-repeat.
                    return;
                }
                self.held_keys.push(key_code);
                let buttons = bindings.buttons_for(key_code);
                self.pressed |= buttons & !self.held;
                self.held |= buttons;
            }
            InputEvent::KeyUp { key_code } => {
                self.held_keys.retain(|k| *k != key_code);
                self.held = self
                    .held_keys
                    .iter()
                    .fold(Buttons::empty(), |acc, k| acc | bindings.buttons_for(*k));
            }
            InputEvent::Custom { .. } => {}
        }
    }

    /// Take the snapshot for the next tick. Clears the pressed edges so each
    /// press fires on exactly one tick.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snap = InputSnapshot {
            held: self.held,
            pressed: self.pressed,
        };
        self.pressed = Buttons::empty();
        snap
    }

    /// Forget everything (focus loss, restart).
    pub fn clear(&mut self) {
        self.held_keys.clear();
        self.held = Buttons::empty();
        self.pressed = Buttons::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPACE: u32 = 32;
    const UP: u32 = 38;
    const LEFT: u32 = 37;
    const A: u32 = 65;

    fn down(state: &mut InputState, key_code: u32) {
        state.apply(&InputEvent::KeyDown { key_code }, &KeyBindings::default());
    }

    fn up(state: &mut InputState, key_code: u32) {
        state.apply(&InputEvent::KeyUp { key_code }, &KeyBindings::default());
    }

    #[test]
    fn default_bindings_map_arrows_and_letters() {
        let keys = KeyBindings::default();
        assert_eq!(keys.buttons_for(LEFT), Buttons::LEFT);
        assert_eq!(keys.buttons_for(A), Buttons::LEFT);
        assert_eq!(keys.buttons_for(SPACE), Buttons::JUMP);
        assert_eq!(keys.buttons_for(88), Buttons::ATTACK);
        assert!(keys.buttons_for(13).is_empty());
    }

    #[test]
    fn press_fires_once_then_only_held() {
        let mut state = InputState::new();
        down(&mut state, SPACE);
        let first = state.snapshot();
        assert!(first.just_pressed(Buttons::JUMP));
        assert!(first.is_held(Buttons::JUMP));

        let second = state.snapshot();
        assert!(!second.just_pressed(Buttons::JUMP));
        assert!(second.is_held(Buttons::JUMP));
    }

    #[test]
    fn auto_repeat_does_not_refire() {
        let mut state = InputState::new();
        down(&mut state, SPACE);
        state.snapshot();
        down(&mut state, SPACE);
        assert!(!state.snapshot().just_pressed(Buttons::JUMP));
    }

    #[test]
    fn tap_between_ticks_still_registers() {
        let mut state = InputState::new();
        down(&mut state, SPACE);
        up(&mut state, SPACE);
        let snap = state.snapshot();
        assert!(snap.just_pressed(Buttons::JUMP));
        assert!(!snap.is_held(Buttons::JUMP));
    }

    #[test]
    fn second_key_on_held_button_is_not_a_new_press() {
        let mut state = InputState::new();
        down(&mut state, SPACE);
        state.snapshot();
        down(&mut state, UP);
        assert!(!state.snapshot().just_pressed(Buttons::JUMP));
    }

    #[test]
    fn releasing_one_of_two_keys_keeps_button_held() {
        let mut state = InputState::new();
        down(&mut state, LEFT);
        down(&mut state, A);
        up(&mut state, LEFT);
        assert!(state.snapshot().is_held(Buttons::LEFT));
        up(&mut state, A);
        assert!(!state.snapshot().is_held(Buttons::LEFT));
    }

    #[test]
    fn clear_releases_everything() {
        let mut state = InputState::new();
        down(&mut state, LEFT);
        state.clear();
        assert_eq!(state.snapshot(), InputSnapshot::default());
    }
}
