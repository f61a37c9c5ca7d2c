//! Events the hub can emit. Only the name is retained.

use serde::{Deserialize, Serialize};

/// A named event type exposed by the hub's event list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub event: String,
}
