use super::CarSystem;
use super::error::CapacityError;
use crate::config::Config;
use crate::model::Car;

/// All cars of one manufacturer, in insertion order.
#[derive(Debug, Clone, PartialEq)]
struct Manufacturer {
    name: String,
    cars: Vec<Car>,
}

/// In-memory car collection keyed by manufacturer name.
///
/// Manufacturer names are matched exactly (case-sensitive). Manufacturers keep
/// the order in which their first car was added.
#[derive(Debug, Clone, PartialEq)]
pub struct CarsCollection {
    manufacturers: Vec<Manufacturer>,
    max_cars_per_manufacturer: usize,
    max_manufacturers: usize,
    updated: bool,
}

impl CarsCollection {
    /// Creates an empty collection with the given manufacturer limit and cap.
    pub fn new(max_cars_per_manufacturer: usize, max_manufacturers: usize) -> Self {
        Self {
            manufacturers: Vec::new(),
            max_cars_per_manufacturer,
            max_manufacturers,
            updated: false,
        }
    }

    /// Creates an empty collection using the limits from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_cars_per_manufacturer, config.max_manufacturers)
    }

    /// Returns the cars stored for `manufacturer`, or an empty slice.
    pub fn cars(&self, manufacturer: &str) -> &[Car] {
        self.manufacturers
            .iter()
            .find(|m| m.name == manufacturer)
            .map(|m| m.cars.as_slice())
            .unwrap_or(&[])
    }

    /// Returns manufacturer names in the order they were first added.
    pub fn manufacturers(&self) -> impl Iterator<Item = &str> {
        self.manufacturers.iter().map(|m| m.name.as_str())
    }
}

impl CarSystem for CarsCollection {
    fn add_new_car(&mut self, car: Car) -> Result<(), CapacityError> {
        if let Some(existing) = self
            .manufacturers
            .iter_mut()
            .find(|m| m.name == car.manufacturer)
        {
            if existing.cars.len() >= self.max_cars_per_manufacturer {
                return Err(CapacityError::CarsMaximumReached {
                    limit: self.max_cars_per_manufacturer,
                });
            }
            existing.cars.push(car);
            return Ok(());
        }

        if self.manufacturers.len() >= self.max_manufacturers {
            return Err(CapacityError::ManufacturersMaximumReached {
                limit: self.max_manufacturers,
            });
        }
        self.manufacturers.push(Manufacturer {
            name: car.manufacturer.clone(),
            cars: vec![car],
        });
        Ok(())
    }

    fn set_cars_updated(&mut self) {
        self.updated = true;
    }

    fn take_cars_updated(&mut self) -> bool {
        std::mem::take(&mut self.updated)
    }

    fn car_count(&self) -> usize {
        self.manufacturers.iter().map(|m| m.cars.len()).sum()
    }

    fn manufacturer_count(&self) -> usize {
        self.manufacturers.len()
    }
}
