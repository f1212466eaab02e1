//! External collaborators (spec.md §6): file loading with `#include`
//! resolution, the `$XENVIRONMENT`/`.Xresources` default chain, and a
//! thin seam for an X11 resource-manager property a caller may supply.

mod default;
mod file;
mod property;

pub use default::database_from_default;
pub use file::database_from_file;
pub use property::{database_from_resource_property, ResourceConnection};
