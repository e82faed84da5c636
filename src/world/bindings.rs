//! Registered force and collision bindings, stored apart from the bodies so one
//! body can take part in any number of them.

use crate::forces::ForceCreator;
use crate::objects::body::Body;
use crate::responses::CollisionHandler;
use crate::world::scene::BodyHandle;

pub(crate) struct CollisionBinding {
    pub a: BodyHandle,
    pub b: BodyHandle,
    pub handler: Box<dyn CollisionHandler>,
}

impl CollisionBinding {
    pub fn references(&self, handle: BodyHandle) -> bool {
        self.a == handle || self.b == handle
    }
}

pub(crate) struct ForceBinding {
    pub targets: Vec<BodyHandle>,
    pub creator: Box<dyn ForceCreator>,
}

impl ForceBinding {
    pub fn references(&self, handle: BodyHandle) -> bool {
        self.targets.contains(&handle)
    }
}

/// Mutable references to two different bodies of the same slice.
///
/// Panics if the indices are equal or out of bounds.
pub(crate) fn get_mutable_body_pair(bodies: &mut [Body], idx_a: usize, idx_b: usize) -> (&mut Body, &mut Body) {
    if idx_a == idx_b {
        panic!("A binding cannot pair body {} with itself.", idx_a);
    }
    if idx_a >= bodies.len() || idx_b >= bodies.len() {
        panic!("Body index out of bounds: {} / {} with {} bodies", idx_a, idx_b, bodies.len());
    }

    if idx_a < idx_b {
        let (head, tail) = bodies.split_at_mut(idx_b);
        (&mut head[idx_a], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(idx_a);
        (&mut tail[0], &mut head[idx_b])
    }
}

/// Mutable references to the bodies at `indices`, in that order.
/// Indices must be distinct; a repeated index is only yielded once.
pub(crate) fn gather_bodies<'a>(bodies: &'a mut [Body], indices: &[usize]) -> Vec<&'a mut Body> {
    let mut slots: Vec<Option<&'a mut Body>> = bodies.iter_mut().map(Some).collect();
    indices
        .iter()
        .filter_map(|&i| slots.get_mut(i).and_then(Option::take))
        .collect()
}
