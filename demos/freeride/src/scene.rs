use roadster::log::debug;
use roadster::log::info;
use roadster::rustc_hash::FxHashMap;
use roadster::scene::ModelStatus;
use roadster::scene::Renderer;
use roadster::scene::SceneGraph;
use roadster::simulation::camera::CameraController;
use roadster::simulation::exhaust::BoostParticle;
use roadster::simulation::vehicle::Pose;
use roadster::world::Course;

pub struct HeadlessScene {
    pub course: Course,
    pub vehicle_pose: Option<Pose>,
    pub particles: FxHashMap<usize, BoostParticle>,

    ready_countdown: u32,
    next_particle_id: usize,
}

#[derive(Default)]
pub struct ConsoleRenderer {
    pub frames: u32,
}

impl HeadlessScene {
    pub fn new(course: Course, load_frames: u32) -> Self {
        Self { course, vehicle_pose: None, particles: FxHashMap::default(), ready_countdown: load_frames, next_particle_id: 0 }
    }

    pub fn poll_model(&mut self) {
        if self.ready_countdown > 0 {
            self.ready_countdown -= 1;

            if self.ready_countdown == 0 {
                info!("Vehicle model loaded");
            }
        }
    }
}

impl SceneGraph for HeadlessScene {
    fn vehicle_model(&self) -> ModelStatus {
        if self.ready_countdown > 0 {
            ModelStatus::Loading
        } else {
            ModelStatus::Ready
        }
    }

    fn course(&self) -> &Course {
        &self.course
    }

    fn set_vehicle_pose(&mut self, pose: &Pose) {
        self.vehicle_pose = Some(*pose);
    }

    fn add_particle(&mut self, particle: &BoostParticle) -> usize {
        let id = self.next_particle_id;
        self.next_particle_id += 1;
        self.particles.insert(id, particle.clone());

        id
    }

    fn update_particle(&mut self, id: usize, particle: &BoostParticle) {
        self.particles.insert(id, particle.clone());
    }

    fn remove_particle(&mut self, id: usize) {
        self.particles.remove(&id);
    }
}

impl Renderer for ConsoleRenderer {
    fn render(&mut self, _: &dyn SceneGraph, camera: &CameraController) {
        self.frames += 1;

        if self.frames % 120 == 0 {
            debug!("Frame {}, camera at {} looking at {}", self.frames, camera.position, camera.look_at);
        }
    }
}
