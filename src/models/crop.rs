use super::plant::Plant;
use serde::{Deserialize, Serialize};

/// A planted quantity of a specific plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub plant: Plant,
    pub num_crops: f64,
}

impl Crop {
    pub fn new(plant: Plant, num_crops: f64) -> Self {
        Self { plant, num_crops }
    }
}

/// An ordered collection of crops whose aggregate metrics are computed
/// together. Order does not affect totals but iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub crops: Vec<Crop>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_crop(mut self, plant: Plant, num_crops: f64) -> Self {
        self.crops.push(Crop::new(plant, num_crops));
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Crop> {
        self.crops.iter()
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

impl FromIterator<Crop> for Portfolio {
    fn from_iter<T: IntoIterator<Item = Crop>>(iter: T) -> Self {
        Self {
            crops: iter.into_iter().collect(),
        }
    }
}
