//! The client side: choose a builder, let the director drive it, then pull
//! the product out of the concrete builder.
//!
//! The director only ever sees `&mut dyn Builder`. Getting a `Car` or a
//! `Manual` back requires matching on [`AnyBuilder`], which is the only
//! place that knows which concrete builder was picked.

use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::builder::Builder;
use crate::car_builder::CarBuilder;
use crate::config::DemoConfig;
use crate::director::{Director, Profile};
use crate::error::{Error, Result};
use crate::manual_builder::CarManualBuilder;
use crate::product::{Car, Manual};

//==============================================================================
// Builder selection
//==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderKind {
    Car,
    Manual,
}

impl fmt::Display for BuilderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuilderKind::Car => f.write_str("car"),
            BuilderKind::Manual => f.write_str("manual"),
        }
    }
}

impl FromStr for BuilderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(BuilderKind::Car),
            "manual" => Ok(BuilderKind::Manual),
            _ => Err(Error::UnknownBuilder(s.to_string())),
        }
    }
}

/// AnyBuilder: one concrete builder, tagged with its kind.
#[derive(Debug)]
pub enum AnyBuilder {
    Car(CarBuilder),
    Manual(CarManualBuilder),
}

impl AnyBuilder {
    pub fn new(kind: BuilderKind) -> Self {
        match kind {
            BuilderKind::Car => AnyBuilder::Car(CarBuilder::new()),
            BuilderKind::Manual => AnyBuilder::Manual(CarManualBuilder::new()),
        }
    }

    pub fn kind(&self) -> BuilderKind {
        match self {
            AnyBuilder::Car(_) => BuilderKind::Car,
            AnyBuilder::Manual(_) => BuilderKind::Manual,
        }
    }

    /// The builder as the director sees it.
    pub fn as_builder_mut(&mut self) -> &mut dyn Builder {
        match self {
            AnyBuilder::Car(builder) => builder,
            AnyBuilder::Manual(builder) => builder,
        }
    }

    /// Retrieves the product through the concrete builder's own accessor.
    /// The manual builder keeps its manual, so the caller gets a copy.
    pub fn finish(&mut self) -> Product {
        match self {
            AnyBuilder::Car(builder) => Product::Car(builder.get_product()),
            AnyBuilder::Manual(builder) => Product::Manual(builder.get_product().clone()),
        }
    }
}

/// Product: whatever came out of an [`AnyBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Product {
    Car(Car),
    Manual(Manual),
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Product::Car(car) => fmt::Display::fmt(car, f),
            Product::Manual(manual) => fmt::Display::fmt(manual, f),
        }
    }
}

//==============================================================================
// Application
//==============================================================================

#[derive(Debug, Default)]
pub struct Application {
    director: Director,
}

impl Application {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sports car and its manual, built by the same director sequence.
    pub fn make_car(&self) -> (Car, Manual) {
        let mut car_builder = CarBuilder::new();
        self.director.construct_sports_car(&mut car_builder);
        let car = car_builder.get_product();

        let mut manual_builder = CarManualBuilder::new();
        self.director.construct_sports_car(&mut manual_builder);
        let manual = manual_builder.get_product().clone();

        (car, manual)
    }

    pub fn build(&self, profile: Profile, kind: BuilderKind) -> Product {
        let mut builder = AnyBuilder::new(kind);
        self.director.construct(profile, builder.as_builder_mut());
        let product = builder.finish();
        info!(%profile, builder = %kind, "application: product ready");
        product
    }

    /// Builds one product per configured builder, in config order.
    pub fn run(&self, config: &DemoConfig) -> Result<Vec<Product>> {
        let profile = config.profile()?;
        let kinds = config.builder_kinds()?;
        info!(%profile, builders = kinds.len(), "application: starting");

        Ok(kinds
            .into_iter()
            .map(|kind| self.build(profile, kind))
            .collect())
    }
}
