use crate::input::InputCollector;
use crate::input::InputEvent;
use crate::input::InputSnapshot;
use crate::scene::ModelStatus;
use crate::scene::Renderer;
use crate::scene::SceneGraph;
use crate::simulation::camera::CameraController;
use crate::simulation::exhaust::ExhaustQueue;
use crate::simulation::vehicle;
use crate::simulation::vehicle::Pose;
use crate::simulation::vehicle::StepOutcome;
use crate::simulation::vehicle::VehicleState;
use crate::simulation::VehicleConfig;
use glam::Vec3;
use instant::Instant;
use log::debug;
use log::error;
use log::info;

pub struct DriveApp {
    pub config: VehicleConfig,
    pub collector: InputCollector,
    pub camera: CameraController,

    vehicle: Option<VehicleState>,
    exhaust: ExhaustQueue,
    model_failure_logged: bool,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameReport {
    pub outcome: Option<StepOutcome>,
    pub menu_toggles: u32,
}

impl DriveApp {
    pub fn new(config: VehicleConfig) -> Self {
        Self {
            config,
            collector: InputCollector::new(),
            camera: CameraController::new(&Pose::new(Vec3::ZERO, 0.0)),
            vehicle: None,
            exhaust: ExhaustQueue::new(),
            model_failure_logged: false,
        }
    }

    pub fn input(&mut self, event: InputEvent) {
        self.collector.collect(event);
    }

    pub fn vehicle(&self) -> Option<VehicleState> {
        self.vehicle
    }

    pub fn frame(&mut self, scene: &mut dyn SceneGraph, renderer: &mut dyn Renderer, now: Instant) -> FrameReport {
        let input = self.collector.snapshot();

        let report = match scene.vehicle_model() {
            ModelStatus::Ready => self.step(scene, &input, now),
            ModelStatus::Loading => FrameReport { outcome: None, menu_toggles: input.toggle_menu },
            ModelStatus::Failed => {
                if !self.model_failure_logged {
                    error!("Vehicle model failed to load, simulation suspended");
                    self.model_failure_logged = true;
                }

                FrameReport { outcome: None, menu_toggles: input.toggle_menu }
            }
        };

        // The world keeps rendering while the vehicle is missing
        renderer.render(scene, &self.camera);

        report
    }

    fn step(&mut self, scene: &mut dyn SceneGraph, input: &InputSnapshot, now: Instant) -> FrameReport {
        let state = match self.vehicle {
            Some(state) => state,
            None => {
                let state = VehicleState::new(scene.course().spawn_point);
                self.camera = CameraController::new(&state.pose());
                info!("Vehicle ready at {}", state.position);

                state
            }
        };

        // Toggle edges act on the pose the player saw when pressing the key
        for _ in 0..input.toggle_camera {
            self.camera.toggle(&state.pose());
        }

        let (state, outcome) = vehicle::advance(state, input, scene.course(), &self.config, now);

        match outcome {
            StepOutcome::Collided { obstacle } => debug!("Vehicle collided with obstacle {}", obstacle),
            StepOutcome::Respawned => info!("Vehicle left the course, respawned at {}", state.position),
            StepOutcome::Drove => {}
        }

        if outcome != StepOutcome::Respawned {
            if state.is_boosting && state.speed > self.config.max_speed {
                for particle in self.exhaust.spawn_pair(&state.pose()) {
                    if let Some(id) = particle.scene_id {
                        scene.remove_particle(id);
                    }
                }
            }

            for particle in self.exhaust.tick() {
                if let Some(id) = particle.scene_id {
                    scene.remove_particle(id);
                }
            }

            for particle in self.exhaust.iter_mut() {
                match particle.scene_id {
                    Some(id) => scene.update_particle(id, particle),
                    None => particle.scene_id = Some(scene.add_particle(particle)),
                }
            }

            self.camera.update(&state.pose());
        }

        scene.set_vehicle_pose(&state.pose());
        self.vehicle = Some(state);

        FrameReport { outcome: Some(outcome), menu_toggles: input.toggle_menu }
    }
}

impl Default for DriveApp {
    fn default() -> Self {
        Self::new(VehicleConfig::new())
    }
}
