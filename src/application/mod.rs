pub mod dispatch;
pub mod errors;
pub mod library;
pub mod registry;
pub mod session;

pub use errors::{CatalogError, RegistryError, Result, SetupError};
pub use library::{Library, load_library, standard_commands, standard_dispatcher};
pub use registry::{ItemRef, ItemRegistry, RegistryId};
pub use session::{AuthSession, SecurityStatus};
