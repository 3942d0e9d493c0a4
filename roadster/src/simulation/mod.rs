use crate::utils::settings::SettingsStorage;
use anyhow::Result;

pub mod camera;
pub mod exhaust;
pub mod vehicle;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VehicleConfig {
    pub acceleration: f32,
    pub max_speed: f32,
    pub boost_max_speed: f32,
    pub friction: f32,
    pub stop_threshold: f32,
    pub turn_rate: f32,
    pub speed_normalizer: f32,
    pub time_scale: f32,
    pub vehicle_radius: f32,
    pub vibration_duration: f32,
    pub vibration_amplitude: f32,
}

impl VehicleConfig {
    pub fn new() -> Self {
        Self {
            acceleration: 0.1,
            max_speed: 2.0,
            boost_max_speed: 4.0,
            friction: 0.95,
            stop_threshold: 0.01,
            turn_rate: 0.05,
            speed_normalizer: 2.0,
            time_scale: 1.0,
            vehicle_radius: 1.2,
            vibration_duration: 0.5,
            vibration_amplitude: 0.08,
        }
    }

    pub fn from_settings(settings: &mut SettingsStorage) -> Result<Self> {
        let mut config = Self::new();

        if let Some(value) = settings.get("vehicle.acceleration")? {
            config.acceleration = value;
        }
        if let Some(value) = settings.get("vehicle.max_speed")? {
            config.max_speed = value;
        }
        if let Some(value) = settings.get("vehicle.boost_max_speed")? {
            config.boost_max_speed = value;
        }
        if let Some(value) = settings.get("vehicle.friction")? {
            config.friction = value;
        }
        if let Some(value) = settings.get("vehicle.stop_threshold")? {
            config.stop_threshold = value;
        }
        if let Some(value) = settings.get("vehicle.turn_rate")? {
            config.turn_rate = value;
        }
        if let Some(value) = settings.get("vehicle.speed_normalizer")? {
            config.speed_normalizer = value;
        }
        if let Some(value) = settings.get("vehicle.time_scale")? {
            config.time_scale = value;
        }
        if let Some(value) = settings.get("vehicle.radius")? {
            config.vehicle_radius = value;
        }
        if let Some(value) = settings.get("vehicle.vibration_duration")? {
            config.vibration_duration = value;
        }
        if let Some(value) = settings.get("vehicle.vibration_amplitude")? {
            config.vibration_amplitude = value;
        }

        Ok(config)
    }
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self::new()
    }
}
