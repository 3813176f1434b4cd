//! Element identifiers.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::SwarmGateError;

static ELEMENT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)/(\d+)$").expect("valid element id regex"));

/// A managed element, addressed as `"<dataMinerId>/<elementId>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId {
    pub data_miner_id: i32,
    pub element_id: i32,
}

impl ElementId {
    pub fn new(data_miner_id: i32, element_id: i32) -> Self {
        Self {
            data_miner_id,
            element_id,
        }
    }
}

impl FromStr for ElementId {
    type Err = SwarmGateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SwarmGateError::InvalidInput {
            message: format!("No valid input ElementID: '{}'", s),
        };

        let caps = ELEMENT_ID.captures(s.trim()).ok_or_else(invalid)?;
        let data_miner_id = caps[1].parse().map_err(|_| invalid())?;
        let element_id = caps[2].parse().map_err(|_| invalid())?;

        Ok(Self::new(data_miner_id, element_id))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.data_miner_id, self.element_id)
    }
}
