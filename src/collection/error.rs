/// Reasons the collection refuses a new car.
///
/// The `Display` text is the warning shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CapacityError {
    /// The car's manufacturer already holds the maximum number of cars.
    #[error(
        "The maximum amount of cars for that manufacturer ({limit}) has been reached.\nUnfortunately you cannot add any further cars to this manufacturer"
    )]
    CarsMaximumReached {
        /// Cars allowed per manufacturer.
        limit: usize,
    },

    /// The car's manufacturer is new and no more manufacturers fit.
    #[error(
        "The maximum amount of manufacturers in the car system ({limit}) has been reached.\nUnfortunately you cannot add any further manufacturers to this system"
    )]
    ManufacturersMaximumReached {
        /// Distinct manufacturers allowed.
        limit: usize,
    },
}
