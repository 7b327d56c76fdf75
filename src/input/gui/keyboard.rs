use winit::event::{ElementState, MouseScrollDelta};
use winit::keyboard::KeyCode;

use crate::controllers::frame_loop::ports::input_source::InputSource;
use crate::core::navigation::controls::ControlsSnapshot;

/// Touchpad pixels that count as one wheel notch.
const PIXELS_PER_WHEEL_NOTCH: f64 = 40.0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct EdgeKey {
    held: bool,
    pending: bool,
}

impl EdgeKey {
    // Key repeat delivers more presses while held; only the first one counts.
    fn handle(&mut self, pressed: bool) {
        if pressed && !self.held {
            self.pending = true;
        }
        self.held = pressed;
    }

    fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

/// Accumulates window input between ticks and hands it out as one snapshot.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct KeyboardState {
    w_held: bool,
    a_held: bool,
    s_held: bool,
    d_held: bool,
    wheel: f32,
    reset: EdgeKey,
    toggle_hud: EdgeKey,
    iterations_up: EdgeKey,
    iterations_down: EdgeKey,
    cycle_colour: EdgeKey,
    close_requested: bool,
}

impl KeyboardState {
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match key_code {
            KeyCode::KeyW => self.w_held = pressed,
            KeyCode::KeyA => self.a_held = pressed,
            KeyCode::KeyS => self.s_held = pressed,
            KeyCode::KeyD => self.d_held = pressed,
            KeyCode::KeyR => self.reset.handle(pressed),
            KeyCode::KeyH => self.toggle_hud.handle(pressed),
            KeyCode::KeyI => self.iterations_up.handle(pressed),
            KeyCode::KeyU => self.iterations_down.handle(pressed),
            KeyCode::KeyC => self.cycle_colour.handle(pressed),
            _ => {}
        }
    }

    pub fn handle_wheel(&mut self, delta: MouseScrollDelta) {
        let notches = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => (position.y / PIXELS_PER_WHEEL_NOTCH) as f32,
        };

        if notches.is_finite() {
            self.wheel += notches;
        }
    }

    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    /// Releases every held key, e.g. when the window loses focus and the
    /// matching key-up events will never arrive. A pending close survives.
    pub fn release_all(&mut self) {
        *self = Self {
            close_requested: self.close_requested,
            ..Self::default()
        };
    }

    /// Returns everything since the last snapshot and clears the edges and
    /// the accumulated wheel.
    pub fn snapshot(&mut self) -> ControlsSnapshot {
        ControlsSnapshot {
            up: self.w_held,
            down: self.s_held,
            left: self.a_held,
            right: self.d_held,
            wheel: std::mem::take(&mut self.wheel),
            reset: self.reset.take(),
            toggle_hud: self.toggle_hud.take(),
            iterations_up: self.iterations_up.take(),
            iterations_down: self.iterations_down.take(),
            cycle_colour: self.cycle_colour.take(),
            close_requested: self.close_requested,
        }
    }
}

impl InputSource for KeyboardState {
    fn poll(&mut self) -> ControlsSnapshot {
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::KeyboardState;
    use crate::core::navigation::controls::ControlsSnapshot;
    use winit::dpi::PhysicalPosition;
    use winit::event::{ElementState, MouseScrollDelta};
    use winit::keyboard::KeyCode;

    #[test]
    fn press_and_release_updates_held_directions() {
        let mut input = KeyboardState::default();

        input.handle_key_event(KeyCode::KeyW, ElementState::Pressed);
        input.handle_key_event(KeyCode::KeyA, ElementState::Pressed);
        input.handle_key_event(KeyCode::KeyS, ElementState::Pressed);
        input.handle_key_event(KeyCode::KeyD, ElementState::Pressed);

        let pressed = input.snapshot();
        assert!(pressed.up);
        assert!(pressed.left);
        assert!(pressed.down);
        assert!(pressed.right);

        // Held keys stay active across snapshots.
        assert!(input.snapshot().up);

        input.handle_key_event(KeyCode::KeyW, ElementState::Released);
        input.handle_key_event(KeyCode::KeyA, ElementState::Released);
        input.handle_key_event(KeyCode::KeyS, ElementState::Released);
        input.handle_key_event(KeyCode::KeyD, ElementState::Released);

        assert!(!input.snapshot().is_panning());
    }

    #[test]
    fn edges_are_consumed_once() {
        let mut input = KeyboardState::default();

        input.handle_key_event(KeyCode::KeyR, ElementState::Pressed);
        input.handle_key_event(KeyCode::KeyH, ElementState::Pressed);
        input.handle_key_event(KeyCode::KeyI, ElementState::Pressed);
        input.handle_key_event(KeyCode::KeyU, ElementState::Pressed);
        input.handle_key_event(KeyCode::KeyC, ElementState::Pressed);

        let first = input.snapshot();
        assert!(first.reset);
        assert!(first.toggle_hud);
        assert!(first.iterations_up);
        assert!(first.iterations_down);
        assert!(first.cycle_colour);

        assert_eq!(input.snapshot(), ControlsSnapshot::default());
    }

    #[test]
    fn key_repeat_does_not_retrigger_edge() {
        let mut input = KeyboardState::default();

        input.handle_key_event(KeyCode::KeyI, ElementState::Pressed);
        assert!(input.snapshot().iterations_up);

        input.handle_key_event(KeyCode::KeyI, ElementState::Pressed);
        input.handle_key_event(KeyCode::KeyI, ElementState::Pressed);
        assert!(!input.snapshot().iterations_up);

        input.handle_key_event(KeyCode::KeyI, ElementState::Released);
        input.handle_key_event(KeyCode::KeyI, ElementState::Pressed);
        assert!(input.snapshot().iterations_up);
    }

    #[test]
    fn press_and_release_between_snapshots_still_counts() {
        let mut input = KeyboardState::default();

        input.handle_key_event(KeyCode::KeyC, ElementState::Pressed);
        input.handle_key_event(KeyCode::KeyC, ElementState::Released);

        assert!(input.snapshot().cycle_colour);
    }

    #[test]
    fn wheel_accumulates_until_snapshot() {
        let mut input = KeyboardState::default();

        input.handle_wheel(MouseScrollDelta::LineDelta(0.0, 1.0));
        input.handle_wheel(MouseScrollDelta::LineDelta(0.0, 2.0));
        input.handle_wheel(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -40.0)));

        assert_eq!(input.snapshot().wheel, 2.0);
        assert_eq!(input.snapshot().wheel, 0.0);
    }

    #[test]
    fn close_request_persists() {
        let mut input = KeyboardState::default();

        input.request_close();

        assert!(input.snapshot().close_requested);
        assert!(input.snapshot().close_requested);
    }

    #[test]
    fn release_all_clears_keys_but_keeps_close() {
        let mut input = KeyboardState::default();
        input.handle_key_event(KeyCode::KeyW, ElementState::Pressed);
        input.handle_key_event(KeyCode::KeyR, ElementState::Pressed);
        input.handle_wheel(MouseScrollDelta::LineDelta(0.0, 1.0));
        input.request_close();

        input.release_all();

        assert_eq!(
            input.snapshot(),
            ControlsSnapshot {
                close_requested: true,
                ..Default::default()
            }
        );
    }
}
