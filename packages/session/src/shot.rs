//! Shot definitions.

use serde::{Deserialize, Serialize};

use shotrecall_algo::Side;

/// One shot on the playfield with its user-entered anchor percentage per
/// flipper side. An anchor of 0 marks the shot as not reachable from that
/// side; the label is opaque to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shot {
    pub id: String,
    pub label: String,
    pub left_anchor: i32,
    pub right_anchor: i32,
}

impl Shot {
    pub fn anchor(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.left_anchor,
            Side::Right => self.right_anchor,
        }
    }
}
