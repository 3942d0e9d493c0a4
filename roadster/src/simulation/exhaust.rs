use super::vehicle::Pose;
use crate::utils::rand::NewRand;
use arrayvec::ArrayVec;
use glam::Vec3;

pub const EXHAUST_CAPACITY: usize = 12;

const OPACITY_DECAY: f32 = 0.06;
const SCALE_SHRINK: f32 = 0.92;
const BACK_OFFSET: f32 = 1.4;
const SIDE_OFFSET: f32 = 0.45;
const HEIGHT_OFFSET: f32 = 0.3;
const FLICKER_MIN: f32 = 0.8;
const FLICKER_MAX: f32 = 1.2;

#[derive(Clone, Debug, PartialEq)]
pub struct BoostParticle {
    pub position: Vec3,
    pub heading: f32,
    pub opacity: f32,
    pub scale: f32,
    pub age: u32,
    pub scene_id: Option<usize>,
}

#[derive(Default)]
pub struct ExhaustQueue {
    particles: ArrayVec<BoostParticle, EXHAUST_CAPACITY>,
}

impl ExhaustQueue {
    pub fn new() -> Self {
        Default::default()
    }

    // Oldest entries make room before the push, the queue never exceeds its capacity
    pub fn spawn_pair(&mut self, pose: &Pose) -> Vec<BoostParticle> {
        let evicted = self.evict_overflow(EXHAUST_CAPACITY - 2);

        let forward = pose.forward();
        let right = Vec3::new(forward.z, 0.0, -forward.x);
        let base = pose.position - forward * BACK_OFFSET + Vec3::Y * HEIGHT_OFFSET;

        for side in [-1.0, 1.0] {
            self.particles.push(BoostParticle {
                position: base + right * SIDE_OFFSET * side,
                heading: pose.heading,
                opacity: 1.0,
                scale: f32::new_rand(FLICKER_MIN..FLICKER_MAX),
                age: 0,
                scene_id: None,
            });
        }

        evicted
    }

    pub fn tick(&mut self) -> Vec<BoostParticle> {
        for particle in &mut self.particles {
            particle.opacity -= OPACITY_DECAY;
            particle.scale *= SCALE_SHRINK;
            particle.age += 1;
        }

        let mut removed = Vec::new();
        while let Some(index) = self.particles.iter().position(|p| p.opacity <= 0.0) {
            removed.push(self.particles.remove(index));
        }

        removed
    }

    pub fn evict_overflow(&mut self, max: usize) -> Vec<BoostParticle> {
        let mut evicted = Vec::new();
        while self.particles.len() > max {
            evicted.push(self.particles.remove(0));
        }

        evicted
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoostParticle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut BoostParticle> {
        self.particles.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
