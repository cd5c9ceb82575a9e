use glam::Vec2;

/// Camera center in world pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec2,
    pub viewport: Vec2,
}

impl Camera {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            position: viewport * 0.5,
            viewport,
        }
    }

    /// Follow `target` without showing anything outside `map_extent`.
    pub fn focus(&mut self, target: Vec2, map_extent: Vec2) -> Vec2 {
        self.position = Vec2::new(
            focus_axis(target.x, self.viewport.x, map_extent.x),
            focus_axis(target.y, self.viewport.y, map_extent.y),
        );
        self.position
    }

    pub fn screen_left(&self) -> f32 {
        self.position.x - self.viewport.x * 0.5
    }

    pub fn screen_right(&self) -> f32 {
        self.position.x + self.viewport.x * 0.5
    }

    pub fn screen_top(&self) -> f32 {
        self.position.y - self.viewport.y * 0.5
    }

    pub fn screen_bottom(&self) -> f32 {
        self.position.y + self.viewport.y * 0.5
    }
}

// A map narrower than the viewport collapses the range to its center.
fn focus_axis(target: f32, view: f32, map: f32) -> f32 {
    if map <= view {
        return map * 0.5;
    }
    target.clamp(view * 0.5, map - view * 0.5)
}
