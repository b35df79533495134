//! Soldier animation selection driven by equipment

pub mod lookup;
pub mod region;
pub mod resolver;

pub use lookup::{AnimationLookup, AtlasTable};
pub use region::AnimationRegion;
pub use resolver::{EquipmentKey, EquipmentResolver};
