//! Per-tick actor update: death check, gravity, running, braking against the
//! ground, jumping, ladders and the hard map-edge clamp.

use glam::Vec2;

use crate::config::PhysicsConfig;
use crate::probe::ContactProbe;
use crate::types::*;

/// What the resolver saw during one tick. Useful for debug overlays.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub ground: ContactResult,
    pub ladder: ContactResult,
    /// The actor transitioned to `Dead` this tick.
    pub died: bool,
}

pub struct MotionResolver {
    pub cfg: PhysicsConfig,
    pub probe: ContactProbe,
}

impl MotionResolver {
    pub fn new(cfg: PhysicsConfig) -> Self {
        let probe = ContactProbe::from_config(&cfg);
        Self { cfg, probe }
    }

    /// Advance `actor` by one tick. `map_extent` is the map size in pixels.
    pub fn tick(
        &self,
        actor: &mut Actor,
        layers: &LayerSet,
        input: &InputState,
        map_extent: Vec2,
    ) -> TickReport {
        let mut report = TickReport::default();

        if !actor.is_alive() {
            integrate(actor);
            return report;
        }

        let death = self.probe.probe(actor, &[layers.get(LayerKind::Death)]);
        if death.any() {
            self.kill(actor);
            report.died = true;
            return report;
        }

        let touching_ground = self.probe.probe(actor, &[layers.get(LayerKind::Ground)]);
        report.ground = touching_ground;

        actor.velocity.y += self.cfg.gravity;
        self.apply_run_input(actor, input);
        brake(actor, &touching_ground, self.cfg.ceiling_release);

        if input.jump && touching_ground.below {
            actor.velocity.y = self.cfg.jump_impulse;
        }

        let on_ladder = self.probe.probe(actor, &[layers.get(LayerKind::Ladders)]);
        report.ladder = on_ladder;
        if on_ladder.any() {
            self.climb(actor, input, &touching_ground);
        }

        integrate(actor);
        clamp_to_world(actor, map_extent);
        report
    }

    /// One-way transition into the terminal state with the death impulse.
    fn kill(&self, actor: &mut Actor) {
        actor.state = ActorState::Dead;
        actor.velocity = Vec2::new(0.0, self.cfg.death_impulse);
        actor.spin = self.cfg.death_spin;
        log::info!(
            "actor died at ({:.1}, {:.1})",
            actor.position.x,
            actor.position.y
        );
    }

    fn apply_run_input(&self, actor: &mut Actor, input: &InputState) {
        let cfg = &self.cfg;
        if input.left {
            actor.animation = Animation::Walk;
            actor.facing = Facing::Left;
            actor.velocity.x -= cfg.run_accel;
        } else if input.right {
            actor.animation = Animation::Walk;
            actor.facing = Facing::Right;
            actor.velocity.x += cfg.run_accel;
        }

        actor.velocity.x = actor.velocity.x.clamp(-cfg.max_run_speed, cfg.max_run_speed);
        if actor.velocity.x.abs() < cfg.stop_threshold {
            actor.animation = Animation::Stand;
            actor.velocity.x = 0.0;
        } else {
            actor.velocity.x *= cfg.damping;
        }
    }

    // TODO: cap the down step by the remaining ladder extent; a fixed step can
    // carry the actor past the ladder bottom when it is not grounded.
    fn climb(&self, actor: &mut Actor, input: &InputState, ground: &ContactResult) {
        actor.velocity.y = 0.0;
        if input.up {
            actor.position.y -= self.cfg.ladder_step;
        } else if input.down {
            actor.position.y += if ground.below {
                ground.below_distance
            } else {
                self.cfg.ladder_step
            };
        }

        if input.jump {
            actor.velocity.y = self.cfg.jump_impulse;
        }
    }
}

/// Stop motion into contacted geometry and lift the actor out of the floor.
pub fn brake(actor: &mut Actor, contact: &ContactResult, ceiling_release: f32) {
    if contact.below {
        actor.velocity.y = 0.0;
        actor.position.y -= contact.below_distance;
    }
    if contact.left && actor.velocity.x < 0.0 {
        actor.velocity.x = 0.0;
    }
    if contact.right && actor.velocity.x > 0.0 {
        actor.velocity.x = 0.0;
    }
    if contact.above && actor.velocity.y < 0.0 {
        actor.velocity.y = ceiling_release;
    }
}

fn integrate(actor: &mut Actor) {
    actor.position += actor.velocity;
    actor.rotation += actor.spin;
}

/// Keep the actor's box inside `[0, extent]`; velocity pointing out is zeroed.
pub fn clamp_to_world(actor: &mut Actor, extent: Vec2) {
    let half = actor.half_extents();

    if actor.position.x < half.x {
        actor.position.x = half.x;
        actor.velocity.x = actor.velocity.x.max(0.0);
    }
    if actor.position.x > extent.x - half.x {
        actor.position.x = extent.x - half.x;
        actor.velocity.x = actor.velocity.x.min(0.0);
    }
    if actor.position.y < half.y {
        actor.position.y = half.y;
        actor.velocity.y = actor.velocity.y.max(0.0);
    }
    if actor.position.y > extent.y - half.y {
        actor.position.y = extent.y - half.y;
        actor.velocity.y = actor.velocity.y.min(0.0);
    }
}
