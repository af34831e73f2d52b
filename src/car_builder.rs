//! Builder for [`Car`]s. Resets itself whenever a finished car is handed out.

use std::mem;

use tracing::{debug, info};

use crate::builder::Builder;
use crate::product::Car;

/// CarBuilder: installs hardware into the one car it owns.
#[derive(Debug)]
pub struct CarBuilder {
    car: Car,
}

impl CarBuilder {
    pub fn new() -> Self {
        let mut builder = CarBuilder { car: Car::new() };
        builder.reset();
        builder
    }

    /// Hands the finished car to the caller and starts a fresh one, so the
    /// builder is ready for the next car without an explicit `reset`.
    pub fn get_product(&mut self) -> Car {
        let car = mem::take(&mut self.car);
        info!(%car, "car builder handed out product");
        self.reset();
        car
    }

    /// The car in progress.
    pub fn product(&self) -> &Car {
        &self.car
    }
}

impl Default for CarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for CarBuilder {
    fn reset(&mut self) {
        debug!("car builder: reset");
        self.car = Car::new();
    }

    fn set_seats(&mut self, seats: u8) {
        debug!(seats, "car builder: setting seats");
        self.car.seats = Some(seats);
    }

    fn set_engine(&mut self, engine: &str) {
        debug!(engine, "car builder: installing engine");
        self.car.engine = Some(engine.to_string());
    }

    fn set_trip_computer(&mut self, enabled: bool) {
        debug!(enabled, "car builder: trip computer");
        self.car.trip_computer = enabled;
    }

    fn set_gps(&mut self, enabled: bool) {
        debug!(enabled, "car builder: gps");
        self.car.gps = enabled;
    }
}
