//! Selection & property derivation engine for SAS-fabric topology diagrams.
//!
//! When a vertex of the fabric diagram (initiator, port, expander, target) is
//! selected, this crate turns the vertex's raw attribute set into a
//! display-ready property panel:
//! - per-type property rows in schema order ([`schema`], [`panel`]),
//! - shortened FMRIs for compact display ([`fmri`]),
//! - per-phy link-rate and link-error tables for port vertices, demultiplexed
//!   from comma-packed attribute strings ([`demux`], [`linkrate`]).
//!
//! The crate is a pure, synchronous core: it performs no I/O, holds no mutable
//! state, and never touches the rendering surface. The presentation layer
//! hands in a [`vertex::Vertex`] and receives a [`panel::VertexPanel`] back.

pub mod demux;
pub mod error;
pub mod fmri;
pub mod linkrate;
pub mod panel;
pub mod schema;
pub mod vertex;

pub use error::PanelError;
