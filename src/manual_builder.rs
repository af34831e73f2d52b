//! Builder for [`Manual`]s.
//!
//! Unlike [`CarBuilder`](crate::car_builder::CarBuilder), handing out the
//! manual does not reset the builder. The same manual stays in place until
//! the client calls `reset` itself.

use tracing::debug;

use crate::builder::Builder;
use crate::product::Manual;

/// CarManualBuilder: writes the manual section for each building step.
#[derive(Debug)]
pub struct CarManualBuilder {
    manual: Manual,
}

impl CarManualBuilder {
    pub fn new() -> Self {
        let mut builder = CarManualBuilder {
            manual: Manual::new(),
        };
        builder.reset();
        builder
    }

    /// The current manual. Calling this again without a `reset` in between
    /// returns the very same manual.
    pub fn get_product(&self) -> &Manual {
        debug!(
            sections = self.manual.sections().len(),
            "manual builder handed out product"
        );
        &self.manual
    }
}

impl Default for CarManualBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for CarManualBuilder {
    fn reset(&mut self) {
        debug!("manual builder: reset");
        self.manual = Manual::new();
    }

    fn set_seats(&mut self, seats: u8) {
        debug!(seats, "manual builder: documenting seats");
        self.manual.add_section(format!(
            "Seats: this car seats {}. Adjust each seat with the lever under its front edge.",
            seats
        ));
    }

    fn set_engine(&mut self, engine: &str) {
        debug!(engine, "manual builder: documenting engine");
        self.manual.add_section(format!(
            "Engine: {}. Follow the break-in schedule for the first 1000 km.",
            engine
        ));
    }

    fn set_trip_computer(&mut self, enabled: bool) {
        debug!(enabled, "manual builder: documenting trip computer");
        if enabled {
            self.manual.add_section(
                "Trip computer: press the TRIP button to cycle distance, fuel use and average speed.",
            );
        } else {
            self.manual
                .add_section("Trip computer: not fitted on this configuration.");
        }
    }

    fn set_gps(&mut self, enabled: bool) {
        debug!(enabled, "manual builder: documenting gps");
        if enabled {
            self.manual.add_section(
                "GPS: enter a destination from the NAV menu; maps update over the air.",
            );
        } else {
            self.manual
                .add_section("GPS: not fitted on this configuration.");
        }
    }
}
