//! Runs builders through named configuration profiles.

use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::builder::Builder;
use crate::error::Error;

/// Profile: a named build sequence the director knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    SportsCar,
    Suv,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::SportsCar => "sports-car",
            Profile::Suv => "suv",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sports-car" | "sports_car" | "sportscar" => Ok(Profile::SportsCar),
            "suv" => Ok(Profile::Suv),
            _ => Err(Error::UnknownProfile(s.to_string())),
        }
    }
}

/// Director: knows the order of building steps, not what they produce.
///
/// It keeps no state and never sees a product. The caller picks the
/// builder, and with it the kind of product that comes out.
#[derive(Debug, Default, Clone, Copy)]
pub struct Director;

impl Director {
    pub fn new() -> Self {
        Director
    }

    pub fn construct(&self, profile: Profile, builder: &mut dyn Builder) {
        match profile {
            Profile::SportsCar => self.construct_sports_car(builder),
            Profile::Suv => self.construct_suv(builder),
        }
    }

    /// Two seats, sport engine, trip computer and GPS, in that order.
    pub fn construct_sports_car(&self, builder: &mut dyn Builder) {
        info!(profile = %Profile::SportsCar, "director: constructing");
        builder.reset();
        builder.set_seats(2);
        builder.set_engine("SportEngine");
        builder.set_trip_computer(true);
        builder.set_gps(true);
    }

    /// Extension point. No SUV sequence has been defined yet, so the
    /// builder is left untouched.
    pub fn construct_suv(&self, _builder: &mut dyn Builder) {
        info!(profile = %Profile::Suv, "director: no steps defined for profile");
    }
}
