use crate::forces::ForceCreator;
use crate::objects::body::Body;

/// Zero-rest-length Hooke spring between the centroids of exactly two bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub k: f64,
}

impl Spring {
    pub fn new(k: f64) -> Self {
        Self { k }
    }
}

impl ForceCreator for Spring {
    fn apply(&mut self, bodies: &mut [&mut Body]) {
        let count = bodies.len();
        let [a, b] = bodies else {
            log::warn!("Spring needs exactly 2 bodies, got {}", count);
            return;
        };
        let stretch = b.centroid() - a.centroid();
        a.add_force(stretch * self.k);
        b.add_force(stretch * -self.k);
    }
}
