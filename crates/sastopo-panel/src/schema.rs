//! Versioned display property schemas.
//!
//! The set of properties shown per vertex type changed across product
//! revisions (the later revision renames `serial`→`serial-number` and
//! `label`→`location`, and adds `sas-port-type` and `logical-disk`). The
//! revisions are kept as explicit, versioned variants rather than inline
//! branching so each one stays independently testable.

use serde::{Deserialize, Serialize};

use crate::vertex::*;

/// Which display-schema revision the engine is configured for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    /// Original revision.
    V1,
    /// Later revision; the default for new documents.
    #[default]
    V2,
}

const INITIATOR_V1: &[&str] = &[
    ATTR_FMRI,
    ATTR_HC_FMRI,
    ATTR_DEVFS_NAME,
    ATTR_NAME,
    ATTR_MANUFACTURER,
    ATTR_MODEL,
    ATTR_SERIAL,
    ATTR_LABEL,
];
const PORT_V1: &[&str] = &[
    ATTR_FMRI,
    ATTR_NAME,
    ATTR_LOCAL_SAS_ADDRESS,
    ATTR_ATTACHED_SAS_ADDRESS,
];
const EXPANDER_V1: &[&str] = &[ATTR_FMRI, ATTR_NAME, ATTR_DEVFS_NAME];
const TARGET_V1: &[&str] = &[
    ATTR_FMRI,
    ATTR_HC_FMRI,
    ATTR_NAME,
    ATTR_MANUFACTURER,
    ATTR_MODEL,
    ATTR_SERIAL,
    ATTR_LABEL,
];

const INITIATOR_V2: &[&str] = &[
    ATTR_FMRI,
    ATTR_HC_FMRI,
    ATTR_DEVFS_NAME,
    ATTR_NAME,
    ATTR_MANUFACTURER,
    ATTR_MODEL,
    ATTR_SERIAL_NUMBER,
    ATTR_LOCATION,
];
const PORT_V2: &[&str] = &[
    ATTR_FMRI,
    ATTR_NAME,
    ATTR_SAS_PORT_TYPE,
    ATTR_LOCAL_SAS_ADDRESS,
    ATTR_ATTACHED_SAS_ADDRESS,
];
const EXPANDER_V2: &[&str] = &[ATTR_FMRI, ATTR_NAME, ATTR_DEVFS_NAME, ATTR_LOCATION];
const TARGET_V2: &[&str] = &[
    ATTR_FMRI,
    ATTR_HC_FMRI,
    ATTR_NAME,
    ATTR_MANUFACTURER,
    ATTR_MODEL,
    ATTR_SERIAL_NUMBER,
    ATTR_LOCATION,
    ATTR_LOGICAL_DISK,
];

impl SchemaVersion {
    /// Ordered property list displayed for `kind`; the order is significant
    /// and is preserved verbatim in the panel.
    pub fn properties_for(self, kind: VertexType) -> &'static [&'static str] {
        match (self, kind) {
            (Self::V1, VertexType::Initiator) => INITIATOR_V1,
            (Self::V1, VertexType::Port) => PORT_V1,
            (Self::V1, VertexType::Expander) => EXPANDER_V1,
            (Self::V1, VertexType::Target) => TARGET_V1,
            (Self::V2, VertexType::Initiator) => INITIATOR_V2,
            (Self::V2, VertexType::Port) => PORT_V2,
            (Self::V2, VertexType::Expander) => EXPANDER_V2,
            (Self::V2, VertexType::Target) => TARGET_V2,
        }
    }
}
