//! The building steps every concrete builder supports.

/// Builder: the steps a [`Director`](crate::director::Director) can drive.
///
/// There is no product accessor here on purpose. `CarBuilder` and
/// `CarManualBuilder` produce unrelated types, so each exposes its own
/// `get_product` and the caller needs the concrete builder to reach it.
///
/// Steps never fail. Each builder decides what a value means for its product.
pub trait Builder {
    /// Drops the product in progress and starts an empty one.
    fn reset(&mut self);

    fn set_seats(&mut self, seats: u8);

    fn set_engine(&mut self, engine: &str);

    fn set_trip_computer(&mut self, enabled: bool);

    fn set_gps(&mut self, enabled: bool);
}
