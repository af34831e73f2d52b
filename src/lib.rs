//! Builder pattern: one director, two builders, two unrelated products.
//!
//! [`Director`] drives anything that implements [`Builder`] through a fixed
//! sequence of steps. [`CarBuilder`] turns that sequence into a [`Car`],
//! [`CarManualBuilder`] turns the same sequence into a [`Manual`]. Since the
//! products share no type, each builder has its own `get_product`, and only
//! code holding the concrete builder can call it.
//!
//! ```
//! use car_builder::{CarBuilder, Director};
//!
//! let mut builder = CarBuilder::new();
//! Director::new().construct_sports_car(&mut builder);
//! let car = builder.get_product();
//! assert_eq!(car.seats, Some(2));
//! ```

pub mod application;
pub mod builder;
pub mod car_builder;
pub mod config;
pub mod director;
pub mod error;
pub mod logging;
pub mod manual_builder;
pub mod product;

pub use application::{AnyBuilder, Application, BuilderKind, Product};
pub use builder::Builder;
pub use car_builder::CarBuilder;
pub use config::DemoConfig;
pub use director::{Director, Profile};
pub use error::{Error, Result};
pub use manual_builder::CarManualBuilder;
pub use product::{Car, Manual};
