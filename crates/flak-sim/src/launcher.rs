//! Launchers: the player's ground defences.
//!
//! Both variants share [`LauncherCore`] (position, cooldown, destruction)
//! and differ only in how a counter-missile's velocity is chosen:
//! [`MissileLauncher`] fires straight at the clicked point, while
//! [`DefenceCannon`] fires along its barrel, which can never point below
//! the horizon.

use flak_core::config::{LauncherProfile, MissileProfile, SimConfig};
use flak_core::enums::LauncherKind;
use flak_core::state::LauncherView;
use flak_core::types::{normalize_or_zero, Vector2};
use flak_terrain::Terrain;

use crate::missile::{seek_velocity, Missile};
use crate::store::SpawnQueue;

/// State and behaviour common to every launcher.
#[derive(Debug, Clone)]
pub struct LauncherCore {
    pub centre: Vector2,
    /// Last aimed or fired-at point.
    pub target: Vector2,
    pub ticks_since_firing: u32,
    /// Terminal: a destroyed launcher never fires or rechecks support.
    pub destroyed: bool,
    profile: LauncherProfile,
    ammo: MissileProfile,
    rubble: MissileProfile,
}

impl LauncherCore {
    pub fn new(centre: Vector2, profile: LauncherProfile, config: &SimConfig) -> Self {
        Self {
            centre,
            target: centre - Vector2::new(0.0, 100.0),
            ticks_since_firing: 0,
            destroyed: false,
            profile,
            ammo: config.counter.clone(),
            rubble: config.rubble.clone(),
        }
    }

    pub fn profile(&self) -> &LauncherProfile {
        &self.profile
    }

    pub fn can_fire(&self) -> bool {
        self.ticks_since_firing > self.profile.cooldown_ticks && !self.destroyed
    }

    /// Self-destruct if the ground under the centre is gone. Returns true
    /// only on the tick the launcher is destroyed.
    pub fn check_support(&mut self, terrain: &dyn Terrain, spawns: &mut SpawnQueue) -> bool {
        if self.destroyed || terrain.is_supported(self.centre) {
            return false;
        }

        self.destroyed = true;
        let mut rubble = self.rubble.clone();
        rubble.blast_radius = self.profile.length.max(rubble.draw_radius);
        spawns.push(Missile::detonation_at(self.centre, &rubble));
        true
    }

    /// Reset the cooldown and queue a counter-missile.
    fn launch(&mut self, target: Vector2, velocity: Vector2, spawns: &mut SpawnQueue) {
        self.target = target;
        self.ticks_since_firing = 0;
        spawns.push(Missile::launch_with_velocity(
            self.centre,
            target,
            velocity,
            &self.ammo,
        ));
    }
}

/// Common launcher contract. Implementors supply the core and the
/// variant-specific launch velocity; everything else is shared.
pub trait Launcher {
    fn kind(&self) -> LauncherKind;

    fn core(&self) -> &LauncherCore;

    fn core_mut(&mut self) -> &mut LauncherCore;

    /// Velocity of a counter-missile fired at `target`.
    fn launch_velocity(&mut self, target: Vector2) -> Vector2;

    /// Where fired missiles visually leave the launcher.
    fn muzzle(&self) -> Vector2 {
        self.core().centre
    }

    /// Track a cursor position without firing.
    fn aim(&mut self, target: Vector2) {
        self.core_mut().target = target;
    }

    fn centre(&self) -> Vector2 {
        self.core().centre
    }

    fn is_destroyed(&self) -> bool {
        self.core().destroyed
    }

    fn can_fire(&self) -> bool {
        self.core().can_fire()
    }

    /// Fire at `target` if the cooldown allows. Returns whether a missile was queued.
    fn fire(&mut self, target: Vector2, spawns: &mut SpawnQueue) -> bool {
        if !self.can_fire() {
            return false;
        }
        let velocity = self.launch_velocity(target);
        self.core_mut().launch(target, velocity, spawns);
        true
    }

    fn check_support(&mut self, terrain: &dyn Terrain, spawns: &mut SpawnQueue) -> bool {
        self.core_mut().check_support(terrain, spawns)
    }

    /// Per-tick update: advance the cooldown, then check support.
    /// Returns true on the tick the launcher is destroyed.
    fn tick(&mut self, terrain: &dyn Terrain, spawns: &mut SpawnQueue) -> bool {
        let core = self.core_mut();
        core.ticks_since_firing = core.ticks_since_firing.saturating_add(1);
        self.check_support(terrain, spawns)
    }

    fn view(&self) -> LauncherView {
        let core = self.core();
        LauncherView {
            kind: self.kind(),
            centre: core.centre,
            destroyed: core.destroyed,
            can_fire: core.can_fire(),
            target: core.target,
            muzzle: self.muzzle(),
        }
    }
}

/// Fixed launcher: counter-missiles seek the clicked point directly.
#[derive(Debug, Clone)]
pub struct MissileLauncher {
    core: LauncherCore,
}

impl MissileLauncher {
    pub fn new(centre: Vector2, config: &SimConfig) -> Self {
        Self {
            core: LauncherCore::new(centre, config.missile_launcher, config),
        }
    }
}

impl Launcher for MissileLauncher {
    fn kind(&self) -> LauncherKind {
        LauncherKind::MissileLauncher
    }

    fn core(&self) -> &LauncherCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut LauncherCore {
        &mut self.core
    }

    fn launch_velocity(&mut self, target: Vector2) -> Vector2 {
        seek_velocity(self.core.centre, target, self.core.profile.speed)
    }
}

/// Barrel direction toward `target`, never below the horizon.
///
/// Screen y grows downward, so "below" means positive y. A target under the
/// centre clamps the barrel flat. A barrel with no horizontal component is
/// tipped left, so a straight-up aim leans up-left and a target straight
/// below or on the centre points flat left.
pub fn barrel_direction(centre: Vector2, target: Vector2) -> Vector2 {
    let mut direction = normalize_or_zero(target - centre);
    if direction.y > 0.0 {
        direction.y = 0.0;
    }
    if direction.x == 0.0 {
        direction.x = -1.0;
    }
    normalize_or_zero(direction)
}

/// Aimable cannon: counter-missiles leave along the barrel.
#[derive(Debug, Clone)]
pub struct DefenceCannon {
    core: LauncherCore,
    direction: Vector2,
}

impl DefenceCannon {
    pub fn new(centre: Vector2, config: &SimConfig) -> Self {
        let core = LauncherCore::new(centre, config.defence_cannon, config);
        let direction = barrel_direction(centre, core.target);
        Self { core, direction }
    }

    /// Current unit barrel direction.
    pub fn direction(&self) -> Vector2 {
        self.direction
    }
}

impl Launcher for DefenceCannon {
    fn kind(&self) -> LauncherKind {
        LauncherKind::DefenceCannon
    }

    fn core(&self) -> &LauncherCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut LauncherCore {
        &mut self.core
    }

    fn launch_velocity(&mut self, target: Vector2) -> Vector2 {
        self.direction = barrel_direction(self.core.centre, target);
        self.direction * self.core.profile.speed
    }

    fn muzzle(&self) -> Vector2 {
        self.core.centre + self.direction * self.core.profile.length
    }

    fn aim(&mut self, target: Vector2) {
        self.core.target = target;
        if !self.core.destroyed {
            self.direction = barrel_direction(self.core.centre, target);
        }
    }
}
