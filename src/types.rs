use glam::Vec2;

/// Axis-aligned collision rectangle (center + full size). Screen space, y down.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionRect {
    pub center: Vec2,
    pub size: Vec2,
}

impl CollisionRect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Build from the top-left corner.
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            center: min + size * 0.5,
            size,
        }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.size.x * 0.5
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.size.x * 0.5
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.size.y * 0.5
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y * 0.5
    }

    /// Strict containment: points on an edge are outside.
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.left() < p.x && p.x < self.right() && self.top() < p.y && p.y < self.bottom()
    }
}

/// Semantic map layers, in the order the level stores them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayerKind {
    Background,
    Ground,
    Ladders,
    Death,
    Foreground,
}

impl LayerKind {
    pub const COUNT: usize = 5;

    pub const ALL: [LayerKind; Self::COUNT] = [
        LayerKind::Background,
        LayerKind::Ground,
        LayerKind::Ladders,
        LayerKind::Death,
        LayerKind::Foreground,
    ];

    /// Position of this layer inside a `TileGrid`.
    pub fn index(self) -> usize {
        match self {
            LayerKind::Background => 0,
            LayerKind::Ground => 1,
            LayerKind::Ladders => 2,
            LayerKind::Death => 3,
            LayerKind::Foreground => 4,
        }
    }

    /// Decorative layers are drawn but never produce geometry.
    pub fn collides(self) -> bool {
        matches!(self, LayerKind::Ground | LayerKind::Ladders | LayerKind::Death)
    }

    pub fn name(self) -> &'static str {
        match self {
            LayerKind::Background => "background",
            LayerKind::Ground => "ground",
            LayerKind::Ladders => "ladders",
            LayerKind::Death => "death",
            LayerKind::Foreground => "foreground",
        }
    }

    /// Case-insensitive lookup by level layer name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Compiled rectangles for one semantic layer.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerGeometry {
    pub kind: LayerKind,
    pub rects: Vec<CollisionRect>,
}

impl LayerGeometry {
    pub fn empty(kind: LayerKind) -> Self {
        Self {
            kind,
            rects: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Enum-indexed geometry for every layer of a level.
#[derive(Clone, Debug)]
pub struct LayerSet {
    layers: Vec<LayerGeometry>,
}

impl LayerSet {
    /// All layers empty.
    pub fn new() -> Self {
        Self {
            layers: LayerKind::ALL.into_iter().map(LayerGeometry::empty).collect(),
        }
    }

    pub fn get(&self, kind: LayerKind) -> &LayerGeometry {
        &self.layers[kind.index()]
    }

    /// Replace the geometry stored for `geometry.kind`.
    pub fn insert(&mut self, geometry: LayerGeometry) {
        let idx = geometry.kind.index();
        self.layers[idx] = geometry;
    }
}

impl Default for LayerSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Directional contact flags and penetration distances from one probe.
///
/// A distance is 0 whenever its flag is false. Distances hold the maximum
/// penetration seen across all samples and rectangles.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ContactResult {
    pub left: bool,
    pub right: bool,
    pub above: bool,
    pub below: bool,
    pub left_distance: f32,
    pub right_distance: f32,
    pub above_distance: f32,
    pub below_distance: f32,
}

impl ContactResult {
    /// True when any direction is in contact.
    pub fn any(&self) -> bool {
        self.left || self.right || self.above || self.below
    }

    /// Fold another result in: flags OR, distances max.
    pub fn merge(&mut self, other: &ContactResult) {
        self.left |= other.left;
        self.right |= other.right;
        self.above |= other.above;
        self.below |= other.below;
        self.left_distance = self.left_distance.max(other.left_distance);
        self.right_distance = self.right_distance.max(other.right_distance);
        self.above_distance = self.above_distance.max(other.above_distance);
        self.below_distance = self.below_distance.max(other.below_distance);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActorState {
    Alive,
    /// Terminal.
    Dead,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Animation {
    Stand,
    Walk,
}

/// The single dynamic body. `position` is the box center.
#[derive(Clone, Debug)]
pub struct Actor {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
    pub state: ActorState,
    pub facing: Facing,
    pub animation: Animation,
    /// Degrees; only changes after death.
    pub rotation: f32,
    /// Degrees per tick.
    pub spin: f32,
}

impl Actor {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
            state: ActorState::Alive,
            facing: Facing::Right,
            animation: Animation::Stand,
            rotation: 0.0,
            spin: 0.0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.state == ActorState::Alive
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.position.x - self.size.x * 0.5
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.position.x + self.size.x * 0.5
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.position.y - self.size.y * 0.5
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y * 0.5
    }
}

/// Snapshot of the held controls for one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
}

/// Collectible with a fixed-size box centered on `position`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pickup {
    pub position: Vec2,
    pub size: Vec2,
    pub collected: bool,
}

impl Pickup {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            collected: false,
        }
    }
}

/// Events produced during a tick for the audio / HUD collaborators.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GameEvent {
    PickupCollected { position: Vec2, score: u32 },
    Died { position: Vec2 },
}

/// Timing breakdown for the last completed `step`.
#[derive(Copy, Clone, Debug, Default)]
pub struct TickTiming {
    pub step_ms: f64,
    pub motion_ms: f64,
    pub pickups_ms: f64,
    pub camera_ms: f64,
    pub events_emitted: usize,
}

/// Rectangle counts per compiled layer.
#[derive(Copy, Clone, Debug, Default)]
pub struct GeometryStats {
    pub ground_rects: usize,
    pub ladder_rects: usize,
    pub death_rects: usize,
}
