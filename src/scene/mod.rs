pub mod catalog;
pub mod env;
pub mod selector;
pub mod weights;

pub use catalog::{Catalog, SceneRecord};
pub use env::{EnvironmentalParams, HistoricalPeriod};
pub use selector::{Adaptation, RenderedScene, SceneSelector};
pub use weights::{WeightVector, SCENE_COUNT};
