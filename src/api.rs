use glam::Vec2;

use crate::types::*;

/// Input collaborator: held-key queries, sampled once per tick.
pub trait InputSource {
    fn left_held(&self) -> bool;
    fn right_held(&self) -> bool;
    fn up_held(&self) -> bool;
    fn down_held(&self) -> bool;
    fn jump_held(&self) -> bool;

    /// Snapshot the current key state.
    fn snapshot(&self) -> InputState {
        InputState {
            left: self.left_held(),
            right: self.right_held(),
            up: self.up_held(),
            down: self.down_held(),
            jump: self.jump_held(),
        }
    }
}

impl InputSource for InputState {
    fn left_held(&self) -> bool {
        self.left
    }
    fn right_held(&self) -> bool {
        self.right
    }
    fn up_held(&self) -> bool {
        self.up
    }
    fn down_held(&self) -> bool {
        self.down
    }
    fn jump_held(&self) -> bool {
        self.jump
    }
}

/// Primitive intersection tests used by the probe and the pickup check.
pub trait NarrowphaseApi {
    /// Point strictly inside the centered box `(c, h)`; edges do not count.
    fn point_in_aabb_strict(p: Vec2, c: Vec2, h: Vec2) -> bool;

    /// Boxes overlap with positive area. Touching edges do not count.
    fn overlap_aabb_aabb(c0: Vec2, h0: Vec2, c1: Vec2, h1: Vec2) -> bool;
}
