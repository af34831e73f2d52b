//! The two things the builders assemble.
//!
//! `Car` and `Manual` are deliberately unrelated types: they share a build
//! sequence, not an interface.

use std::fmt;

//==============================================================================
// Car
//==============================================================================

/// Car: a vehicle with whatever hardware the builder installed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Car {
    pub seats: Option<u8>,
    pub engine: Option<String>,
    pub trip_computer: bool,
    pub gps: bool,
}

impl Car {
    pub fn new() -> Self {
        Self::default()
    }

    /// True until the first building step touches the car.
    pub fn is_empty(&self) -> bool {
        self.seats.is_none() && self.engine.is_none() && !self.trip_computer && !self.gps
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Car (nothing installed)");
        }

        let seats = self
            .seats
            .map_or_else(|| "-".to_string(), |seats| seats.to_string());
        let engine = self.engine.as_deref().unwrap_or("-");
        write!(
            f,
            "Car {{ seats: {}, engine: {}, trip computer: {}, gps: {} }}",
            seats,
            engine,
            yes_no(self.trip_computer),
            yes_no(self.gps)
        )
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

//==============================================================================
// Manual
//==============================================================================

/// Manual: the user manual matching one car configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manual {
    sections: Vec<String>,
}

impl Manual {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub(crate) fn add_section(&mut self, section: impl Into<String>) {
        self.sections.push(section.into());
    }
}

impl fmt::Display for Manual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Manual (no sections)");
        }

        writeln!(f, "Manual ({} sections)", self.sections.len())?;
        for (i, section) in self.sections.iter().enumerate() {
            write!(f, "  {}. {}", i + 1, section)?;
            if i + 1 < self.sections.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
