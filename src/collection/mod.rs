//! The car collection the add-car form submits to.
//!
//! [`CarSystem`] is the seam the form talks through; [`CarsCollection`] is the
//! in-memory implementation that groups cars by manufacturer and enforces the
//! manufacturer limit and cap.

mod cars;
mod error;

pub use cars::CarsCollection;
pub use error::CapacityError;

use crate::model::Car;

/// Operations the add-car form needs from the host system.
pub trait CarSystem {
    /// Stores `car`, or reports why the collection refused it.
    ///
    /// A refused car is dropped; nothing is buffered for retry.
    fn add_new_car(&mut self, car: Car) -> Result<(), CapacityError>;

    /// Records that the collection changed so other views can refresh.
    fn set_cars_updated(&mut self);

    /// Returns whether the collection changed since the last call, clearing the flag.
    fn take_cars_updated(&mut self) -> bool;

    /// Total number of stored cars.
    fn car_count(&self) -> usize;

    /// Number of distinct manufacturers holding at least one car.
    fn manufacturer_count(&self) -> usize;
}
