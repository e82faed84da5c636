use std::collections::{HashMap, HashSet};

use crate::collision::find_collision;
use crate::forces::ForceCreator;
use crate::integration::integrator;
use crate::objects::body::Body;
use crate::responses::CollisionHandler;
use crate::world::bindings::{gather_bodies, get_mutable_body_pair, CollisionBinding, ForceBinding};
use crate::world::config::SceneConfig;

/// Stable reference to a body in a `Scene`.
///
/// Unlike an index it survives the compaction that follows a purge. Handles are
/// never reused, so a handle to an erased body resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(u64);

/// What happened during one `Scene::tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Collision handlers invoked.
    pub collisions: usize,
    /// Bodies erased at the end of the tick.
    pub purged: usize,
}

/// Owns every body plus the force and collision bindings between them.
///
/// Bodies live in a dense vector in insertion order; index 0 is conventionally
/// the player. Removal is deferred: a body marked for removal stays in place
/// until the end of the tick, then the vector is compacted and every binding
/// that referenced it is dropped.
pub struct Scene {
    bodies: Vec<Body>,
    handles: Vec<BodyHandle>,
    index: HashMap<BodyHandle, usize>,
    next_handle: u64,
    collision_bindings: Vec<CollisionBinding>,
    force_bindings: Vec<ForceBinding>,
    config: SceneConfig,
}

impl Scene {
    /// Creates an empty scene with default settings.
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    pub fn with_config(config: SceneConfig) -> Self {
        Self {
            bodies: Vec::with_capacity(config.initial_capacity),
            handles: Vec::with_capacity(config.initial_capacity),
            index: HashMap::with_capacity(config.initial_capacity),
            next_handle: 0,
            collision_bindings: Vec::new(),
            force_bindings: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Appends a body and returns its handle.
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        let handle = BodyHandle(self.next_handle);
        self.next_handle += 1;

        log::debug!("Adding {} body as {:?} at index {}", body.tag(), handle, self.bodies.len());
        self.index.insert(handle, self.bodies.len());
        self.handles.push(handle);
        self.bodies.push(body);
        handle
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Body at `index`. Panics if the index is out of bounds.
    pub fn get_body(&self, index: usize) -> &Body {
        assert!(
            index < self.bodies.len(),
            "Body index {} out of bounds (scene has {} bodies)",
            index,
            self.bodies.len()
        );
        &self.bodies[index]
    }

    /// Mutable body at `index`. Panics if the index is out of bounds.
    pub fn get_body_mut(&mut self, index: usize) -> &mut Body {
        assert!(
            index < self.bodies.len(),
            "Body index {} out of bounds (scene has {} bodies)",
            index,
            self.bodies.len()
        );
        &mut self.bodies[index]
    }

    /// All bodies in insertion order, e.g. for drawing.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.index.get(&handle).map(|&i| &self.bodies[i])
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        let i = *self.index.get(&handle)?;
        Some(&mut self.bodies[i])
    }

    /// Current index of the body behind `handle`, if it has not been erased.
    pub fn index_of(&self, handle: BodyHandle) -> Option<usize> {
        self.index.get(&handle).copied()
    }

    /// Handle of the body at `index`. Panics if the index is out of bounds.
    pub fn handle_at(&self, index: usize) -> BodyHandle {
        assert!(
            index < self.handles.len(),
            "Body index {} out of bounds (scene has {} bodies)",
            index,
            self.handles.len()
        );
        self.handles[index]
    }

    /// Marks the body for removal at the end of the next tick.
    /// Returns false if the handle no longer resolves.
    pub fn mark_for_removal(&mut self, handle: BodyHandle) -> bool {
        match self.body_mut(handle) {
            Some(body) => {
                body.mark_for_removal();
                true
            }
            None => false,
        }
    }

    /// Calls `handler` on every tick where `a` and `b` overlap.
    ///
    /// Handlers run in registration order. Panics if either handle is unknown or
    /// both are the same body.
    pub fn register_collision<H>(&mut self, a: BodyHandle, b: BodyHandle, handler: H)
    where
        H: CollisionHandler + 'static,
    {
        self.expect_known(a);
        self.expect_known(b);
        if a == b {
            panic!("Cannot register a collision between {:?} and itself.", a);
        }

        log::debug!("Registering collision binding {:?} <-> {:?}", a, b);
        self.collision_bindings.push(CollisionBinding {
            a,
            b,
            handler: Box::new(handler),
        });
    }

    /// Applies `creator` to `targets` at the start of every tick.
    ///
    /// Once any target is erased the whole binding is dropped, including for the
    /// targets that survive. Register a shared force over bodies that may be
    /// removed (gems, enemies) as one binding per body.
    ///
    /// Panics if a handle is unknown or listed twice.
    pub fn register_force<F>(&mut self, targets: &[BodyHandle], creator: F)
    where
        F: ForceCreator + 'static,
    {
        let mut seen = HashSet::with_capacity(targets.len());
        for &handle in targets {
            self.expect_known(handle);
            if !seen.insert(handle) {
                panic!("Body {:?} listed twice in one force binding.", handle);
            }
        }

        log::debug!("Registering force binding over {} bodies", targets.len());
        self.force_bindings.push(ForceBinding {
            targets: targets.to_vec(),
            creator: Box::new(creator),
        });
    }

    pub fn collision_binding_count(&self) -> usize {
        self.collision_bindings.len()
    }

    pub fn force_binding_count(&self) -> usize {
        self.force_bindings.len()
    }

    /// Advances the scene by `dt`.
    ///
    /// In order: force bindings, integration of every live body, collision
    /// bindings (handlers see post-integration positions), then the purge of
    /// bodies marked for removal. `dt` is used as given; large steps can tunnel
    /// through thin bodies.
    pub fn tick(&mut self, dt: f64) -> TickReport {
        self.apply_forces();

        for body in self.bodies.iter_mut().filter(|b| b.is_alive()) {
            integrator::integrate(body, dt);
        }

        let collisions = self.resolve_collisions();
        let purged = self.purge();

        TickReport { collisions, purged }
    }

    fn apply_forces(&mut self) {
        for binding in self.force_bindings.iter_mut() {
            let Some(indices) = resolve_handles(&self.index, &binding.targets) else {
                continue;
            };
            if indices.iter().any(|&i| !self.bodies[i].is_alive()) {
                continue;
            }
            let mut targets = gather_bodies(&mut self.bodies, &indices);
            binding.creator.apply(&mut targets);
        }
    }

    fn resolve_collisions(&mut self) -> usize {
        let mut dispatched = 0;

        for binding in self.collision_bindings.iter_mut() {
            let (Some(&idx_a), Some(&idx_b)) = (self.index.get(&binding.a), self.index.get(&binding.b)) else {
                continue;
            };
            let (body_a, body_b) = get_mutable_body_pair(&mut self.bodies, idx_a, idx_b);

            // An earlier handler this tick may have removed one of them
            if !body_a.is_alive() || !body_b.is_alive() {
                continue;
            }
            if self.config.broad_phase && !body_a.aabb().overlaps(&body_b.aabb()) {
                continue;
            }

            let info = find_collision(body_a, body_b);
            if !info.collided {
                continue;
            }

            if self.config.log_collisions {
                log::trace!(
                    "Collision {:?} ({}) <-> {:?} ({}) along {:?}",
                    binding.a,
                    body_a.tag(),
                    binding.b,
                    body_b.tag(),
                    info.axis
                );
            }
            binding.handler.on_collision(body_a, body_b, info.axis);
            dispatched += 1;
        }

        dispatched
    }

    /// Erases dead bodies and every binding that mentions them.
    fn purge(&mut self) -> usize {
        if self.bodies.iter().all(Body::is_alive) {
            return 0;
        }

        let bodies = std::mem::take(&mut self.bodies);
        let handles = std::mem::take(&mut self.handles);
        let mut erased = HashSet::new();

        for (body, handle) in bodies.into_iter().zip(handles) {
            if body.is_alive() {
                self.bodies.push(body);
                self.handles.push(handle);
            } else {
                erased.insert(handle);
            }
        }

        self.index = self
            .handles
            .iter()
            .enumerate()
            .map(|(i, &handle)| (handle, i))
            .collect();

        let bindings_before = self.collision_bindings.len() + self.force_bindings.len();
        self.collision_bindings
            .retain(|binding| !erased.iter().any(|&h| binding.references(h)));
        self.force_bindings
            .retain(|binding| !erased.iter().any(|&h| binding.references(h)));
        let bindings_dropped = bindings_before - self.collision_bindings.len() - self.force_bindings.len();

        log::debug!(
            "Purged {} bodies and {} bindings, {} bodies remain",
            erased.len(),
            bindings_dropped,
            self.bodies.len()
        );
        erased.len()
    }

    fn expect_known(&self, handle: BodyHandle) {
        if !self.index.contains_key(&handle) {
            panic!("Unknown body handle {:?}.", handle);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Current indices for `handles`, or `None` if any of them was erased.
fn resolve_handles(index: &HashMap<BodyHandle, usize>, handles: &[BodyHandle]) -> Option<Vec<usize>> {
    handles.iter().map(|h| index.get(h).copied()).collect()
}
