use glam::Vec2;

use std::time::Instant;

use crate::api::InputSource;
use crate::camera::Camera;
use crate::compiler::compile_layers;
use crate::config::PhysicsConfig;
use crate::error::GridError;
use crate::level::Level;
use crate::motion::{MotionResolver, TickReport};
use crate::pickup::collect_pickups;
use crate::types::*;

/// Everything one running level owns. The host calls [`GameState::step`] once
/// per frame and reads the actor, camera and events back out.
pub struct GameState {
    pub cfg: PhysicsConfig,
    pub frame_counter: u32,

    // Compiled once at construction
    layers: LayerSet,
    map_extent: Vec2,

    resolver: MotionResolver,
    actor: Actor,
    pickups: Vec<Pickup>,
    score: u32,
    camera: Camera,

    // Event buffer, drained by the host
    events: Vec<GameEvent>,

    last_report: TickReport,
    last_timing: Option<TickTiming>,
}

impl GameState {
    pub fn new(level: &Level, viewport: Vec2, cfg: PhysicsConfig) -> Result<Self, GridError> {
        let layers = compile_layers(&level.grid)?;
        let map_extent = level.grid.pixel_extent();
        let actor = Actor::new(level.spawn, cfg.actor_size());
        let pickups = level
            .pickups
            .iter()
            .map(|&p| Pickup::new(p, cfg.pickup_extent()))
            .collect();
        let mut camera = Camera::new(viewport);
        camera.focus(actor.position, map_extent);

        Ok(Self {
            resolver: MotionResolver::new(cfg.clone()),
            cfg,
            frame_counter: 0,
            layers,
            map_extent,
            actor,
            pickups,
            score: 0,
            camera,
            events: Vec::new(),
            last_report: TickReport::default(),
            last_timing: None,
        })
    }

    /// Run one tick: motion, then pickups, then camera.
    pub fn step(&mut self, input: &InputState) {
        let timed = self.cfg.enable_timing;
        let t_all = if timed { Some(Instant::now()) } else { None };
        let mut timing = TickTiming::default();
        self.frame_counter = self.frame_counter.wrapping_add(1);
        let events_before = self.events.len();

        let t0 = if timed { Some(Instant::now()) } else { None };
        let report = self
            .resolver
            .tick(&mut self.actor, &self.layers, input, self.map_extent);
        if report.died {
            self.push_event(GameEvent::Died {
                position: self.actor.position,
            });
        }
        self.last_report = report;
        timing.motion_ms = t0.map(|t| t.elapsed().as_secs_f64() * 1000.0).unwrap_or(0.0);

        let t1 = if timed { Some(Instant::now()) } else { None };
        for position in collect_pickups(&mut self.pickups, &self.actor) {
            self.score += 1;
            log::debug!(
                "pickup at ({:.0}, {:.0}) collected, score {}",
                position.x,
                position.y,
                self.score
            );
            self.push_event(GameEvent::PickupCollected {
                position,
                score: self.score,
            });
        }
        timing.pickups_ms = t1.map(|t| t.elapsed().as_secs_f64() * 1000.0).unwrap_or(0.0);

        let t2 = if timed { Some(Instant::now()) } else { None };
        self.camera.focus(self.actor.position, self.map_extent);
        timing.camera_ms = t2.map(|t| t.elapsed().as_secs_f64() * 1000.0).unwrap_or(0.0);

        if let Some(t_all) = t_all {
            timing.step_ms = t_all.elapsed().as_secs_f64() * 1000.0;
            timing.events_emitted = self.events.len() - events_before;
            self.last_timing = Some(timing);
        }
    }

    /// Sample `source` and run one tick.
    pub fn step_with(&mut self, source: &dyn InputSource) {
        let input = source.snapshot();
        self.step(&input);
    }

    fn push_event(&mut self, ev: GameEvent) {
        if self.events.len() < self.cfg.max_events {
            self.events.push(ev);
        } else {
            log::warn!("event buffer full, dropping {ev:?}");
        }
    }

    /// Drain and return the events accumulated since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Pickups not yet collected.
    pub fn pickups(&self) -> &[Pickup] {
        &self.pickups
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn layers(&self) -> &LayerSet {
        &self.layers
    }

    pub fn map_extent(&self) -> Vec2 {
        self.map_extent
    }

    /// Contacts seen by the last tick, for debug drawing.
    pub fn last_report(&self) -> &TickReport {
        &self.last_report
    }

    /// Return timing breakdown for the last `step` (when enabled).
    pub fn timing(&self) -> Option<TickTiming> {
        self.last_timing
    }

    /// Return rectangle counts for the compiled collision layers.
    pub fn debug_stats(&self) -> GeometryStats {
        GeometryStats {
            ground_rects: self.layers.get(LayerKind::Ground).len(),
            ladder_rects: self.layers.get(LayerKind::Ladders).len(),
            death_rects: self.layers.get(LayerKind::Death).len(),
        }
    }
}
