//! Sensor and data-provider ports
//!
//! `SensorListener` is what bay sensors and the temperature sensor talk to;
//! `CarparkDataProvider` is what displays read from.

/// Receives raw sensor input. Every method returns immediately and never
/// fails: bad input is refused and logged by the implementation.
pub trait SensorListener: Send + Sync {
    /// A car has pulled into a bay. Returns the free spaces afterwards.
    fn incoming_car(&self, license_plate: Option<&str>) -> usize;

    /// A car has left a bay. Returns the free spaces afterwards.
    fn outgoing_car(&self, license_plate: Option<&str>) -> usize;

    /// A new temperature sample in degrees Celsius.
    fn temperature_reading(&self, reading: f64);
}

/// Read-only view used by displays.
pub trait CarparkDataProvider: Send + Sync {
    fn available_spaces(&self) -> usize;

    fn temperature(&self) -> f64;

    /// Local time of day as `HH:MM:SS`.
    fn current_time(&self) -> String;
}
