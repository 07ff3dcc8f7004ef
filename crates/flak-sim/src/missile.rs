//! Missile: a projectile with a target, a trail and an explosion.
//!
//! Lifecycle is `Flying -> Exploding -> Spent`. A flying missile
//! integrates its motion and asks the collision system whether it hit
//! something; an exploding one grows its fireball and erodes the terrain
//! underneath every tick until the blast budget runs out.

use std::collections::VecDeque;

use flak_core::config::{CullMargins, MissileProfile};
use flak_core::enums::{MissileKind, MissilePhase};
use flak_core::state::ProjectileView;
use flak_core::types::{normalize_or_zero, ProjectileId, Resolution, Rgb, Vector2};
use flak_terrain::Terrain;

use crate::collision::CollisionSystem;
use crate::projectile::Projectile;

/// Velocity from `origin` straight toward `target` at `speed`.
/// Zero when the two points coincide.
pub fn seek_velocity(origin: Vector2, target: Vector2, speed: f64) -> Vector2 {
    normalize_or_zero(target - origin) * speed
}

#[derive(Debug, Clone)]
pub struct Missile {
    body: Projectile,
    start: Vector2,
    target: Vector2,
    /// Recent positions, oldest first. Never longer than `profile.trail_length`.
    trail: VecDeque<Vector2>,
    profile: MissileProfile,
    exploding: bool,
    blast_ticks_done: u32,
    invulnerable_ticks: u32,
}

impl Missile {
    /// Launch from `origin` toward `target` at `speed`.
    pub fn launch(origin: Vector2, target: Vector2, speed: f64, profile: &MissileProfile) -> Self {
        Self::launch_with_velocity(origin, target, seek_velocity(origin, target, speed), profile)
    }

    /// Launch with an explicit velocity (e.g. along a cannon barrel).
    /// `target` is still recorded for the marker and the arrival fuse.
    pub fn launch_with_velocity(
        origin: Vector2,
        target: Vector2,
        velocity: Vector2,
        profile: &MissileProfile,
    ) -> Self {
        Self {
            body: Projectile::new(origin, velocity, profile.draw_radius),
            start: origin,
            target,
            trail: VecDeque::with_capacity(profile.trail_length + 1),
            profile: profile.clone(),
            exploding: false,
            blast_ticks_done: 0,
            invulnerable_ticks: profile.invulnerable_ticks,
        }
    }

    /// Stationary explosion already in progress at `position`.
    pub fn detonation_at(position: Vector2, profile: &MissileProfile) -> Self {
        let mut missile = Self::launch_with_velocity(position, position, Vector2::ZERO, profile);
        missile.detonate();
        missile
    }

    /// Advance one tick.
    pub fn advance(&mut self, terrain: &mut dyn Terrain, collisions: &dyn CollisionSystem) {
        if self.exploding {
            self.blast_ticks_done = self.blast_ticks_done.saturating_add(1);
            self.body.radius = self.explosion_radius();
            terrain.destroy_circle(self.body.position, self.erosion_radius());
            return;
        }

        self.body.advance();
        self.trail.push_back(self.body.position);
        while self.trail.len() > self.profile.trail_length {
            self.trail.pop_front();
        }

        if self.invulnerable_ticks > 0 {
            self.invulnerable_ticks -= 1;
            return;
        }

        if collisions.hits(self, &*terrain) {
            self.detonate();
        }
    }

    /// Start exploding where the missile is. Has no effect once exploding.
    pub fn detonate(&mut self) {
        if !self.exploding {
            self.exploding = true;
            self.blast_ticks_done = 0;
        }
    }

    /// Flying: culled off-screen. Exploding: culled once the blast budget is spent.
    pub fn is_garbage(&self, resolution: Resolution, margins: &CullMargins) -> bool {
        if self.exploding {
            self.blast_ticks_done > self.profile.blast_ticks
        } else {
            let bottom_margin = self.profile.blast_radius + self.profile.draw_radius;
            self.body.is_off_screen(resolution, margins, bottom_margin)
        }
    }

    pub fn phase(&self) -> MissilePhase {
        if !self.exploding {
            MissilePhase::Flying
        } else if self.blast_ticks_done > self.profile.blast_ticks {
            MissilePhase::Spent
        } else {
            MissilePhase::Exploding
        }
    }

    /// Explosion progress in [0, 1].
    pub fn explosion_proportion(&self) -> f64 {
        if self.profile.blast_ticks == 0 {
            return 1.0;
        }
        (self.blast_ticks_done as f64 / self.profile.blast_ticks as f64).min(1.0)
    }

    /// Fireball radius, growing linearly from `draw_radius` to `blast_radius`.
    pub fn explosion_radius(&self) -> f64 {
        let draw = self.profile.draw_radius;
        draw + (self.profile.blast_radius - draw) * self.explosion_proportion()
    }

    /// Radius of terrain cleared this tick: the fireball truncated to whole
    /// units, pulled in by the profile's inset.
    fn erosion_radius(&self) -> f64 {
        (self.explosion_radius().trunc() - self.profile.erosion_inset).max(0.0)
    }

    pub fn blast_colour(&self) -> Rgb {
        self.profile
            .blast_colour_a
            .lerp(self.profile.blast_colour_b, self.explosion_proportion())
    }

    pub fn view(&self, id: ProjectileId) -> ProjectileView {
        let (explosion_proportion, explosion_radius) = if self.exploding {
            (self.explosion_proportion(), self.explosion_radius())
        } else {
            (0.0, 0.0)
        };
        ProjectileView {
            id,
            kind: self.profile.kind,
            phase: self.phase(),
            position: self.body.position,
            start: self.start,
            target: self.target,
            trail: self.trail.iter().copied().collect(),
            draw_radius: self.profile.draw_radius,
            trail_radius: self.profile.trail_radius,
            colour_front: self.profile.colour_front,
            colour_tail: self.profile.colour_tail,
            explosion_proportion,
            explosion_radius,
            blast_colour: self.blast_colour(),
        }
    }

    // --- Accessors ---

    pub fn body(&self) -> &Projectile {
        &self.body
    }

    pub fn position(&self) -> Vector2 {
        self.body.position
    }

    pub fn velocity(&self) -> Vector2 {
        self.body.velocity
    }

    pub fn target(&self) -> Vector2 {
        self.target
    }

    pub fn start(&self) -> Vector2 {
        self.start
    }

    pub fn trail(&self) -> &VecDeque<Vector2> {
        &self.trail
    }

    pub fn profile(&self) -> &MissileProfile {
        &self.profile
    }

    pub fn kind(&self) -> MissileKind {
        self.profile.kind
    }

    pub fn is_cannon_fire(&self) -> bool {
        self.profile.is_cannon_fire()
    }

    pub fn is_exploding(&self) -> bool {
        self.exploding
    }

    pub fn blast_ticks_done(&self) -> u32 {
        self.blast_ticks_done
    }

    pub fn blast_ticks(&self) -> u32 {
        self.profile.blast_ticks
    }

    pub fn blast_radius(&self) -> f64 {
        self.profile.blast_radius
    }

    pub fn draw_radius(&self) -> f64 {
        self.profile.draw_radius
    }

    pub fn invulnerable_ticks(&self) -> u32 {
        self.invulnerable_ticks
    }
}
