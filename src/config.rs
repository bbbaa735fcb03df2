//! Hierarchical configuration input.
//!
//! The host describes the board as a tree of named nodes. The device node holds
//! a `regulators` container whose children are named after the outputs
//! (`DCDC_REG1`, ..., `USB_CHARGER`) and may carry [`Constraints`].

use heapless::Vec;

use crate::data_types::{Constraints, RegulatorId};
use crate::driver::RegulatorRequest;
use crate::error::ConfigError;
use crate::registers::REGULATOR_COUNT;

/// Name of the container node holding one child per output.
pub const REGULATORS_NODE: &str = "regulators";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConfigNode<'a> {
    pub name: &'a str,
    pub constraints: Option<Constraints>,
    pub children: &'a [ConfigNode<'a>],
}

impl<'a> ConfigNode<'a> {
    pub const fn new(name: &'a str) -> Self {
        Self {
            name,
            constraints: None,
            children: &[],
        }
    }

    pub const fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    pub const fn with_children(mut self, children: &'a [ConfigNode<'a>]) -> Self {
        self.children = children;
        self
    }

    /// First direct child called `name`.
    pub fn child(&self, name: &str) -> Option<&ConfigNode<'a>> {
        self.children.iter().find(|node| node.name == name)
    }
}

/// Build one request per recognised child of the device's `regulators` node.
///
/// Unknown or unnamed children are skipped. When a name repeats, the first
/// node wins.
pub fn match_regulators(device: &ConfigNode<'_>) -> Result<Vec<RegulatorRequest, REGULATOR_COUNT>, ConfigError> {
    let Some(regulators) = device.child(REGULATORS_NODE) else {
        error!("missing '{}' node", REGULATORS_NODE);
        return Err(ConfigError::NotFound);
    };

    let mut requests = Vec::new();
    for node in regulators.children {
        let Some(id) = RegulatorId::from_name(node.name) else {
            warn!("ignoring unknown regulator node '{}'", node.name);
            continue;
        };
        if requests.iter().any(|req: &RegulatorRequest| req.id == id as u8) {
            warn!("duplicate regulator node '{}'", node.name);
            continue;
        }
        let request = RegulatorRequest {
            id: id as u8,
            constraints: node.constraints.unwrap_or_default(),
        };
        requests.push(request).map_err(|_| ConfigError::OutOfMemory)?;
        trace!("matched regulator node '{}'", node.name);
    }
    Ok(requests)
}
