use glam::Vec3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub position: Vec3,
    pub radius: f32,
}

#[derive(Clone, Debug, Default)]
pub struct Course {
    pub obstacles: Vec<Obstacle>,
    pub boundary: f32,
    pub spawn_point: Vec3,
}

impl Obstacle {
    pub fn new(position: Vec3, radius: f32) -> Self {
        Self { position, radius }
    }

    // Collisions live on the ground plane, height is ignored
    pub fn overlaps(&self, position: Vec3, radius: f32) -> bool {
        let dx = position.x - self.position.x;
        let dz = position.z - self.position.z;

        (dx * dx + dz * dz).sqrt() < self.radius + radius
    }
}

impl Course {
    pub fn new(boundary: f32, spawn_point: Vec3) -> Self {
        Self { obstacles: Vec::new(), boundary, spawn_point }
    }

    pub fn in_bounds(&self, position: Vec3) -> bool {
        position.x.abs() <= self.boundary && position.z.abs() <= self.boundary
    }
}
