//! Vertex model for the SAS topology digraph.
//!
//! A vertex arrives from the document-loading layer as a type tag plus a flat
//! string attribute map (array-valued properties are comma-joined upstream).
//! Vertices are constructed once and read-only thereafter.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::PanelError;

// Topo node names in the SAS scheme.
pub const INITIATOR: &str = "initiator";
pub const PORT: &str = "port";
pub const EXPANDER: &str = "expander";
pub const TARGET: &str = "target";

// Attribute names produced by the topology-to-document generator.
pub const ATTR_FMRI: &str = "fmri";
pub const ATTR_HC_FMRI: &str = "hc-fmri";
pub const ATTR_NAME: &str = "name";
pub const ATTR_MANUFACTURER: &str = "manufacturer";
pub const ATTR_MODEL: &str = "model";
pub const ATTR_SERIAL: &str = "serial";
pub const ATTR_SERIAL_NUMBER: &str = "serial-number";
pub const ATTR_LABEL: &str = "label";
pub const ATTR_LOCATION: &str = "location";
pub const ATTR_DEVFS_NAME: &str = "devfs-name";
pub const ATTR_LOGICAL_DISK: &str = "logical-disk";
pub const ATTR_LOCAL_SAS_ADDRESS: &str = "local-sas-address";
pub const ATTR_ATTACHED_SAS_ADDRESS: &str = "attached-sas-address";
pub const ATTR_SAS_PORT_TYPE: &str = "sas-port-type";
pub const ATTR_MAX_LINK_RATE: &str = "max-link-rate";
pub const ATTR_NEGOTIATED_LINK_RATE: &str = "negotiated-link-rate";
pub const ATTR_INVALID_DWORD: &str = "invalid-dword";
pub const ATTR_RUNNING_DISPARITY_ERROR: &str = "running-disparity-error";
pub const ATTR_LOSS_DWORD_SYNC: &str = "loss-dword-sync";
pub const ATTR_RESET_PROBLEM_COUNT: &str = "reset-problem-count";

/// Flat attribute map; an absent key means the property was absent or null in
/// the source document.
pub type AttrMap = BTreeMap<String, String>;

/// The four recognized vertex kinds of a SAS fabric digraph.
///
/// Untyped strings enter through [`VertexType::parse`] (or serde), which is
/// where [`PanelError::UnknownVertexType`] surfaces; once a vertex is typed,
/// schema lookups are total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexType {
    Initiator,
    Port,
    Expander,
    Target,
}

impl VertexType {
    pub fn parse(s: &str) -> Result<Self, PanelError> {
        match s {
            INITIATOR => Ok(Self::Initiator),
            PORT => Ok(Self::Port),
            EXPANDER => Ok(Self::Expander),
            TARGET => Ok(Self::Target),
            other => Err(PanelError::UnknownVertexType {
                kind: other.to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Initiator => INITIATOR,
            Self::Port => PORT,
            Self::Expander => EXPANDER,
            Self::Target => TARGET,
        }
    }
}

impl FromStr for VertexType {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VertexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of the topology digraph, as handed over by the presentation /
/// document-loading layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    /// Full FMRI naming this vertex; for ports it embeds the phy range.
    pub fmri: String,
    #[serde(rename = "type")]
    pub kind: VertexType,
    /// Instance number within the enclosing element (hex in the source XML).
    #[serde(default)]
    pub instance: u64,
    #[serde(default)]
    pub attributes: AttrMap,
}

impl Vertex {
    pub fn new(fmri: impl Into<String>, kind: VertexType, instance: u64) -> Self {
        Vertex {
            fmri: fmri.into(),
            kind,
            instance,
            attributes: AttrMap::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Short diagram label, `<type>=<hex instance>` (e.g. `port=a`).
    pub fn display_label(&self) -> String {
        format!("{}={:x}", self.kind, self.instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_four_kinds() {
        for (s, kind) in [
            (INITIATOR, VertexType::Initiator),
            (PORT, VertexType::Port),
            (EXPANDER, VertexType::Expander),
            (TARGET, VertexType::Target),
        ] {
            assert_eq!(VertexType::parse(s).unwrap(), kind);
            assert_eq!(kind.as_str(), s);
        }
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = VertexType::parse("enclosure").unwrap_err();
        assert_eq!(
            err,
            PanelError::UnknownVertexType {
                kind: "enclosure".to_string()
            }
        );
    }

    #[test]
    fn display_label_uses_hex_instance() {
        let vtx = Vertex::new("sas://x/port=10", VertexType::Port, 16);
        assert_eq!(vtx.display_label(), "port=10");
    }

    #[test]
    fn vertex_roundtrips_through_json() {
        let mut vtx = Vertex::new("sas://x/target=0", VertexType::Target, 0);
        vtx.attributes
            .insert(ATTR_NAME.to_string(), "target".to_string());
        let json = serde_json::to_string(&vtx).unwrap();
        let back: Vertex = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vtx);
    }
}
