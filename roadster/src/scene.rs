use crate::simulation::camera::CameraController;
use crate::simulation::exhaust::BoostParticle;
use crate::simulation::vehicle::Pose;
use crate::world::Course;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ModelStatus {
    Loading,
    Ready,
    Failed,
}

pub trait SceneGraph {
    fn vehicle_model(&self) -> ModelStatus;
    fn course(&self) -> &Course;

    fn set_vehicle_pose(&mut self, pose: &Pose);
    fn add_particle(&mut self, particle: &BoostParticle) -> usize;
    fn update_particle(&mut self, id: usize, particle: &BoostParticle);
    fn remove_particle(&mut self, id: usize);
}

pub trait Renderer {
    fn render(&mut self, scene: &dyn SceneGraph, camera: &CameraController);
}
