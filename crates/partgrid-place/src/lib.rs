pub mod error;
pub mod footprint;
pub mod part;
pub mod placer;
pub mod rebuild;
pub mod registry;
pub mod spacing;
pub mod validator;

mod sampler;

pub use error::{PlacementError, Rejection};
pub use footprint::{compute_footprint, Candidate};
pub use part::ConfigurablePart;
pub use placer::PartPlacer;
pub use rebuild::{rebuild_from_strings, rebuild_part};
pub use registry::PartRegistry;
