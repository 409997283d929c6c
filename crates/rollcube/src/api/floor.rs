/// The ground the cube rolls on.
///
/// Queried by grid cell, never mutated by the actor apart from the one-shot
/// completion notice. Cells the floor knows nothing about must answer `false`.
pub trait Floor {
    /// Is there a supporting block at `(x, z)`?
    fn has_block(&self, x: i32, z: i32) -> bool;

    /// Is there a goal at `(x, z)`?
    fn has_goal(&self, x: i32, z: i32) -> bool;

    /// The actor dropped into the goal. Fire-and-forget.
    fn complete_level(&mut self);

    /// The level is being played again; forget any completion.
    fn reset(&mut self) {}
}
