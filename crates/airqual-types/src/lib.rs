mod date;
mod error;
mod feature;

pub use date::DateValue;
pub use error::{Error, Result};
pub use feature::{Attributes, Feature, FeatureCollection, StationId, required};
