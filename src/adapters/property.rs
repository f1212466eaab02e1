//! Seam for a caller-supplied X11 resource-manager property (spec.md
//! §6): this crate takes no dependency on an X11 client library, so
//! the property fetch itself is a trait a caller with an actual
//! display connection can implement.

use crate::model::Database;

/// Supplies the raw `RESOURCE_MANAGER` property bytes for a screen, if
/// one is set. Implemented outside this crate by whatever X11 client
/// library the caller already depends on.
pub trait ResourceConnection {
    fn get_property(&self, screen: usize) -> Option<Vec<u8>>;
}

/// Parse `screen`'s resource-manager property through `conn`, or
/// `None` if the property was not set (spec.md §6: `database |
/// absent`). This mirrors the original's `xcb_xrm_database_from_string`
/// returning `NULL` when `xcb_util_get_property` found nothing to
/// parse, rather than collapsing "absent" into an empty database.
pub fn database_from_resource_property<C: ResourceConnection>(conn: &C, screen: usize) -> Option<Database> {
    conn.get_property(screen).map(|bytes| Database::from_bytes(&bytes))
}
