/// One tick's worth of user intent.
///
/// Direction fields are level-triggered (held keys). `reset`, `toggle_hud`,
/// `iterations_up`, `iterations_down` and `cycle_colour` are edges: true for
/// exactly one snapshot per key press.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlsSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub wheel: f32,
    pub reset: bool,
    pub toggle_hud: bool,
    pub iterations_up: bool,
    pub iterations_down: bool,
    pub cycle_colour: bool,
    pub close_requested: bool,
}

impl ControlsSnapshot {
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}
