use super::vehicle::Pose;
use glam::Vec3;

const CHASE_DISTANCE: f32 = 15.0;
const CHASE_HEIGHT: f32 = 7.0;
const LOOK_AHEAD: f32 = 10.0;
const SMOOTHING: f32 = 0.1;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum CameraMode {
    #[default]
    Chase,
    Orbit,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraController {
    pub mode: CameraMode,
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraController {
    pub fn new(pose: &Pose) -> Self {
        Self { mode: CameraMode::Chase, position: chase_target(pose), look_at: look_target(pose) }
    }

    pub fn update(&mut self, pose: &Pose) {
        match self.mode {
            CameraMode::Chase => {
                self.position = self.position.lerp(chase_target(pose), SMOOTHING);
                self.look_at = look_target(pose);
            }
            // The orbit rig owns the position, only the anchor follows the vehicle
            CameraMode::Orbit => self.look_at = pose.position,
        }
    }

    pub fn toggle(&mut self, pose: &Pose) {
        match self.mode {
            CameraMode::Chase => {
                self.mode = CameraMode::Orbit;
                self.look_at = pose.position;
            }
            CameraMode::Orbit => {
                // Snap instead of lerp, switching back must not show a swoop
                self.mode = CameraMode::Chase;
                self.position = chase_target(pose);
                self.look_at = look_target(pose);
            }
        }
    }
}

fn chase_target(pose: &Pose) -> Vec3 {
    pose.position - pose.forward() * CHASE_DISTANCE + Vec3::Y * CHASE_HEIGHT
}

fn look_target(pose: &Pose) -> Vec3 {
    pose.position + pose.forward() * LOOK_AHEAD
}
