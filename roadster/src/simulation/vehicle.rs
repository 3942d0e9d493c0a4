use super::VehicleConfig;
use crate::input::InputSnapshot;
use crate::utils::rand::NewRand;
use crate::world::Course;
use glam::Vec3;
use instant::Instant;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub heading: f32,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VehicleState {
    pub position: Vec3,
    pub heading: f32,
    pub speed: f32,
    pub is_boosting: bool,
    pub vibration: Option<Instant>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StepOutcome {
    Drove,
    Collided { obstacle: usize },
    Respawned,
}

impl Pose {
    pub fn new(position: Vec3, heading: f32) -> Self {
        Self { position, heading }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.heading.sin(), 0.0, self.heading.cos())
    }
}

impl VehicleState {
    pub fn new(spawn_point: Vec3) -> Self {
        Self { position: spawn_point, heading: 0.0, speed: 0.0, is_boosting: false, vibration: None }
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.heading)
    }
}

pub fn advance(mut state: VehicleState, input: &InputSnapshot, course: &Course, config: &VehicleConfig, now: Instant) -> (VehicleState, StepOutcome) {
    let entry_position = state.position;
    let mut outcome = StepOutcome::Drove;

    state.is_boosting = input.boost;
    let ceiling = if state.is_boosting && input.accelerate { config.boost_max_speed } else { config.max_speed };

    if input.accelerate {
        state.speed = (state.speed + config.acceleration).min(ceiling);
    } else if input.brake {
        state.speed = (state.speed - config.acceleration * 2.0).max(-ceiling / 2.0);
    } else if state.speed.abs() > config.stop_threshold {
        state.speed *= config.friction;
    } else {
        state.speed = 0.0;
    }

    // Turn authority scales with speed, so a parked car cannot spin in place
    let turn = config.turn_rate * state.speed.abs() / config.speed_normalizer;
    if input.turn_left {
        state.heading += turn;
    }
    if input.turn_right {
        state.heading -= turn;
    }

    state.position += state.pose().forward() * state.speed * config.time_scale;

    // First hit in catalogue order wins
    for (index, obstacle) in course.obstacles.iter().enumerate() {
        if obstacle.overlaps(state.position, config.vehicle_radius) {
            state.position = entry_position;
            state.speed = -state.speed * 0.5;
            state.vibration = Some(now);
            outcome = StepOutcome::Collided { obstacle: index };
            break;
        }
    }

    // Leaving the course ends the step early, the rest of the frame works on the respawned state
    if !course.in_bounds(state.position) {
        state.position = course.spawn_point;
        state.heading = 0.0;
        state.speed = 0.0;
        state.vibration = None;

        return (state, StepOutcome::Respawned);
    }

    if let Some(start) = state.vibration {
        if (now - start).as_secs_f32() < config.vibration_duration {
            state.position.x += f32::new_rand(-config.vibration_amplitude..config.vibration_amplitude);
            state.position.y = f32::new_rand(0.0..config.vibration_amplitude);
        } else {
            state.position.y = 0.0;
            state.vibration = None;
        }
    }

    (state, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Obstacle;
    use std::time::Duration;

    fn accelerate() -> InputSnapshot {
        InputSnapshot { accelerate: true, ..Default::default() }
    }

    fn open_course() -> Course {
        Course::new(10000.0, Vec3::ZERO)
    }

    #[test]
    fn accelerating_clamps_to_ceiling() {
        let config = VehicleConfig::new();
        let course = open_course();
        let mut state = VehicleState::new(Vec3::ZERO);
        state.speed = 1.95;

        let (state, _) = advance(state, &accelerate(), &course, &config, Instant::now());
        assert_eq!(state.speed, 2.0);

        let (state, _) = advance(state, &accelerate(), &course, &config, Instant::now());
        assert_eq!(state.speed, 2.0);
    }

    #[test]
    fn boost_raises_ceiling_while_accelerating() {
        let config = VehicleConfig::new();
        let course = open_course();
        let input = InputSnapshot { accelerate: true, boost: true, ..Default::default() };
        let mut state = VehicleState::new(Vec3::ZERO);
        state.speed = 3.95;

        let (state, _) = advance(state, &input, &course, &config, Instant::now());
        assert_eq!(state.speed, 4.0);
        assert!(state.is_boosting);
    }

    #[test]
    fn boost_without_throttle_coasts() {
        let config = VehicleConfig::new();
        let course = open_course();
        let input = InputSnapshot { boost: true, ..Default::default() };
        let mut state = VehicleState::new(Vec3::ZERO);
        state.speed = 2.0;

        let (state, _) = advance(state, &input, &course, &config, Instant::now());
        assert_eq!(state.speed, 2.0 * config.friction);
    }

    #[test]
    fn braking_floors_at_half_reverse_ceiling() {
        let config = VehicleConfig::new();
        let course = open_course();
        let input = InputSnapshot { brake: true, ..Default::default() };
        let mut state = VehicleState::new(Vec3::ZERO);

        for _ in 0..20 {
            state = advance(state, &input, &course, &config, Instant::now()).0;
        }

        assert_eq!(state.speed, -1.0);
    }

    #[test]
    fn coasting_decays_and_snaps_to_zero() {
        let config = VehicleConfig::new();
        let course = open_course();
        let input = InputSnapshot::default();
        let mut state = VehicleState::new(Vec3::ZERO);
        state.speed = 0.02;

        let (state, _) = advance(state, &input, &course, &config, Instant::now());
        assert_eq!(state.speed, 0.02 * config.friction);

        let mut state = state;
        state.speed = 0.01;
        let (state, _) = advance(state, &input, &course, &config, Instant::now());
        assert_eq!(state.speed, 0.0);
    }

    #[test]
    fn turn_authority_scales_with_speed() {
        let config = VehicleConfig::new();
        let course = open_course();
        let input = InputSnapshot { turn_left: true, ..Default::default() };

        let mut parked = VehicleState::new(Vec3::ZERO);
        parked.speed = 0.0;
        let (parked, _) = advance(parked, &input, &course, &config, Instant::now());
        assert_eq!(parked.heading, 0.0);

        let mut rolling = VehicleState::new(Vec3::ZERO);
        rolling.speed = 1.0 / config.friction;
        let (rolling, _) = advance(rolling, &input, &course, &config, Instant::now());
        assert!((rolling.heading - config.turn_rate * 1.0 / config.speed_normalizer).abs() < 1e-6);
    }

    #[test]
    fn reverse_turns_use_speed_magnitude() {
        let config = VehicleConfig::new();
        let course = open_course();
        let input = InputSnapshot { brake: true, turn_right: true, ..Default::default() };
        let mut state = VehicleState::new(Vec3::ZERO);
        state.speed = -0.8;

        let (state, _) = advance(state, &input, &course, &config, Instant::now());
        assert!(state.heading < 0.0);
    }

    #[test]
    fn translation_follows_heading() {
        let config = VehicleConfig::new();
        let course = open_course();
        let input = InputSnapshot::default();
        let mut state = VehicleState::new(Vec3::ZERO);
        state.speed = 1.0;

        let (state, _) = advance(state, &input, &course, &config, Instant::now());
        assert_eq!(state.position.x, 0.0);
        assert_eq!(state.position.y, 0.0);
        assert_eq!(state.position.z, 1.0 * config.friction);
    }

    #[test]
    fn collision_reverts_position_and_bounces() {
        let mut config = VehicleConfig::new();
        config.vibration_amplitude = 0.0;

        let mut course = open_course();
        course.obstacles.push(Obstacle::new(Vec3::new(0.0, 0.0, 4.0), 1.0));

        let mut state = VehicleState::new(Vec3::ZERO);
        state.speed = 2.0 - config.acceleration;

        let (state, outcome) = advance(state, &accelerate(), &course, &config, Instant::now());

        assert_eq!(outcome, StepOutcome::Collided { obstacle: 0 });
        assert_eq!(state.position, Vec3::ZERO);
        assert_eq!(state.speed, -1.0);
        assert!(state.vibration.is_some());
    }

    #[test]
    fn first_obstacle_in_catalogue_wins() {
        let mut config = VehicleConfig::new();
        config.vibration_amplitude = 0.0;

        let mut course = open_course();
        course.obstacles.push(Obstacle::new(Vec3::new(0.0, 0.0, 2.0), 1.0));
        course.obstacles.push(Obstacle::new(Vec3::new(0.0, 0.0, 2.5), 1.0));

        let mut state = VehicleState::new(Vec3::ZERO);
        state.speed = 1.0 / config.friction;

        let (_, outcome) = advance(state, &InputSnapshot::default(), &course, &config, Instant::now());
        assert_eq!(outcome, StepOutcome::Collided { obstacle: 0 });
    }

    #[test]
    fn leaving_the_course_respawns() {
        let config = VehicleConfig::new();
        let mut course = Course::new(100.0, Vec3::new(5.0, 0.0, 5.0));
        course.obstacles.push(Obstacle::new(Vec3::new(50.0, 0.0, 50.0), 1.0));

        let mut state = VehicleState::new(Vec3::new(0.0, 0.0, 99.5));
        state.speed = 1.0;
        state.heading = 0.3;
        state.vibration = Some(Instant::now());

        let (state, outcome) = advance(state, &accelerate(), &course, &config, Instant::now());

        assert_eq!(outcome, StepOutcome::Respawned);
        assert_eq!(state.position, course.spawn_point);
        assert_eq!(state.heading, 0.0);
        assert_eq!(state.speed, 0.0);
        assert!(state.vibration.is_none());
    }

    #[test]
    fn respawn_triggers_even_when_parked_outside() {
        let config = VehicleConfig::new();
        let course = Course::new(100.0, Vec3::ZERO);
        let state = VehicleState::new(Vec3::new(101.0, 0.0, 0.0));

        let (state, outcome) = advance(state, &InputSnapshot::default(), &course, &config, Instant::now());

        assert_eq!(outcome, StepOutcome::Respawned);
        assert_eq!(state.position, Vec3::ZERO);
    }

    #[test]
    fn vibration_shakes_within_amplitude() {
        fastrand::seed(4);

        let config = VehicleConfig::new();
        let course = open_course();
        let now = Instant::now();

        let mut state = VehicleState::new(Vec3::new(1.0, 0.0, 1.0));
        state.vibration = Some(now);

        let (state, _) = advance(state, &InputSnapshot::default(), &course, &config, now);

        assert!((state.position.x - 1.0).abs() <= config.vibration_amplitude);
        assert!(state.position.y >= 0.0 && state.position.y <= config.vibration_amplitude);
        assert_eq!(state.position.z, 1.0);
        assert!(state.vibration.is_some());
    }

    #[test]
    fn vibration_expires_back_to_ground() {
        let config = VehicleConfig::new();
        let course = open_course();
        let start = Instant::now();
        let later = start + Duration::from_millis(600);

        let mut state = VehicleState::new(Vec3::new(1.0, 0.05, 1.0));
        state.vibration = Some(start);

        let (state, _) = advance(state, &InputSnapshot::default(), &course, &config, later);

        assert!(state.vibration.is_none());
        assert_eq!(state.position.y, 0.0);
    }

    #[test]
    fn forward_vector_is_unit_on_the_ground_plane() {
        for heading in [0.0, 0.5, 1.0, 2.0, -1.5] {
            let forward = Pose::new(Vec3::ZERO, heading).forward();
            assert!((forward.length() - 1.0).abs() < 1e-6);
            assert_eq!(forward.y, 0.0);
        }
    }
}
