pub mod error;
pub mod format;
pub mod load;
pub mod save;

pub use error::PersistError;
pub use format::{Layout, PartRecord};
pub use load::{load_layout, restore};
pub use save::{save_layout, snapshot};
