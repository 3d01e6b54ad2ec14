//! Case status values that cleaning acts on.

/// Rows with this status are removed.
pub const WITHDRAWN: &str = "Withdrawn";

/// Merged into [`CERTIFIED`].
pub const CERTIFIED_EXPIRED: &str = "Certified-Expired";

pub const CERTIFIED: &str = "Certified";

pub const DENIED: &str = "Denied";
