//! Error taxonomy for panel derivation.
//!
//! Two families with different propagation policies:
//! - recoverable absences ([`PanelError::MalformedIdentifier`],
//!   [`PanelError::MissingAttribute`]) degrade to a smaller panel: the
//!   affected link table is omitted and the remaining rows still render;
//! - integrity violations ([`PanelError::DataIntegrity`]) indicate a corrupt
//!   topology document and propagate to the caller rather than being guessed
//!   around.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PanelError {
    /// Vertex type string is not one of the four recognized kinds.
    #[error("unrecognized vertex type `{kind}`")]
    UnknownVertexType { kind: String },

    /// A port FMRI carries no decodable `start-phy=N:end-phy=M` range.
    #[error("no phy range in port identifier `{fmri}`")]
    MalformedIdentifier { fmri: String },

    /// A requested per-phy attribute is absent from the vertex.
    #[error("per-phy attribute `{name}` is absent")]
    MissingAttribute { name: String },

    /// Upstream document corruption: segment shortfall or a link-rate code
    /// outside the table.
    #[error("corrupt topology data: {message}")]
    DataIntegrity { message: String },
}
