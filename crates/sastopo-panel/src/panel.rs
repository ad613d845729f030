//! Property panel construction.
//!
//! [`PanelBuilder::build`] is the single entrypoint the presentation layer
//! calls when a vertex is selected. It is a pure function of the vertex and
//! the configured schema revision: no I/O, no shared mutable state, so
//! repeated calls on the same vertex yield structurally identical panels.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::demux::{demux, PerPhyRecord};
use crate::error::PanelError;
use crate::fmri::{decode_phy_range, shorten, PhyRange};
use crate::linkrate;
use crate::schema::SchemaVersion;
use crate::vertex::{
    Vertex, VertexType, ATTR_FMRI, ATTR_HC_FMRI, ATTR_INVALID_DWORD, ATTR_LOSS_DWORD_SYNC,
    ATTR_MAX_LINK_RATE, ATTR_NEGOTIATED_LINK_RATE, ATTR_RESET_PROBLEM_COUNT,
    ATTR_RUNNING_DISPARITY_ERROR,
};

/// Per-phy rate attributes; raw segments are link-rate codes and are
/// translated through the code table.
pub const RATE_ATTRIBUTES: [&str; 2] = [ATTR_MAX_LINK_RATE, ATTR_NEGOTIATED_LINK_RATE];

/// Per-phy error counters; raw segments are displayed as-is.
pub const ERROR_ATTRIBUTES: [&str; 4] = [
    ATTR_INVALID_DWORD,
    ATTR_RUNNING_DISPARITY_ERROR,
    ATTR_LOSS_DWORD_SYNC,
    ATTR_RESET_PROBLEM_COUNT,
];

/// One row of the main property panel. `value` is `None` when the vertex
/// does not carry the attribute; the renderer decides how absence looks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub field: String,
    pub value: Option<String>,
}

/// One row of a per-phy table, labeled with the absolute phy number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTableRow {
    pub phy: u32,
    pub values: Vec<String>,
}

/// A per-phy rate or error table: header `["PHY #", <attribute names...>]`
/// and one row per phy of the port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTable {
    pub header: Vec<String>,
    pub rows: Vec<LinkTableRow>,
}

/// Display-ready result of selecting a vertex. The tables only ever appear
/// for port vertices, and each is independently absent when its attribute
/// group is missing or the port FMRI carries no phy range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexPanel {
    pub rows: Vec<DisplayRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_table: Option<LinkTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_table: Option<LinkTable>,
}

/// Host snapshot properties attached to the topology document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostInfo {
    pub nodename: String,
    #[serde(rename = "os-version")]
    pub os_version: String,
    /// Snapshot time, ISO-8601.
    pub timestamp: String,
}

impl HostInfo {
    /// Host information rows, same shape as vertex rows.
    pub fn host_rows(&self) -> Vec<DisplayRow> {
        vec![
            DisplayRow {
                field: "nodename".to_string(),
                value: Some(self.nodename.clone()),
            },
            DisplayRow {
                field: "os-version".to_string(),
                value: Some(self.os_version.clone()),
            },
            DisplayRow {
                field: "timestamp".to_string(),
                value: Some(self.timestamp.clone()),
            },
        ]
    }
}

/// Builds display panels against one schema revision.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelBuilder {
    schema: SchemaVersion,
}

impl PanelBuilder {
    pub fn new(schema: SchemaVersion) -> Self {
        PanelBuilder { schema }
    }

    /// Derive the property panel for a selected vertex.
    ///
    /// Recoverable absences (missing per-phy attribute group, port FMRI
    /// without a phy range) degrade to a panel with fewer tables; a
    /// [`PanelError::DataIntegrity`] from corrupt per-phy data propagates.
    pub fn build(&self, vertex: &Vertex) -> Result<VertexPanel, PanelError> {
        let names = self.schema.properties_for(vertex.kind);

        let mut rows = Vec::with_capacity(names.len());
        for &name in names {
            let value = if name == ATTR_FMRI {
                Some(vertex.fmri.clone())
            } else if name == ATTR_HC_FMRI {
                vertex.attr(name).map(shorten)
            } else {
                vertex.attr(name).map(str::to_string)
            };
            rows.push(DisplayRow {
                field: name.to_string(),
                value,
            });
        }

        let (rate_table, error_table) = if vertex.kind == VertexType::Port {
            self.port_tables(vertex)?
        } else {
            (None, None)
        };

        Ok(VertexPanel {
            rows,
            rate_table,
            error_table,
        })
    }

    fn port_tables(
        &self,
        vertex: &Vertex,
    ) -> Result<(Option<LinkTable>, Option<LinkTable>), PanelError> {
        let range = match decode_phy_range(&vertex.fmri) {
            Ok(range) => range,
            Err(err) => {
                warn!(fmri = %vertex.fmri, %err, "omitting link tables");
                return Ok((None, None));
            }
        };

        let rate_table = match demux(&vertex.attributes, &RATE_ATTRIBUTES, range.count) {
            Ok(records) => Some(rate_table(&records, range)?),
            Err(PanelError::MissingAttribute { name }) => {
                debug!(attribute = %name, "omitting rate table");
                None
            }
            Err(err) => return Err(err),
        };

        let error_table = match demux(&vertex.attributes, &ERROR_ATTRIBUTES, range.count) {
            Ok(records) => Some(raw_table(&records, range, &ERROR_ATTRIBUTES)),
            Err(PanelError::MissingAttribute { name }) => {
                debug!(attribute = %name, "omitting error table");
                None
            }
            Err(err) => return Err(err),
        };

        Ok((rate_table, error_table))
    }
}

fn table_header(names: &[&str]) -> Vec<String> {
    let mut header = Vec::with_capacity(names.len() + 1);
    header.push("PHY #".to_string());
    header.extend(names.iter().map(|n| n.to_string()));
    header
}

fn slot_values<'a>(record: &'a PerPhyRecord, name: &str) -> &'a [String] {
    record.get(name).map(Vec::as_slice).unwrap_or(&[])
}

/// Rate table: every raw segment is a link-rate code and must decode; a
/// non-numeric or out-of-range code is upstream corruption.
fn rate_table(records: &[PerPhyRecord], range: PhyRange) -> Result<LinkTable, PanelError> {
    let mut rows = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let mut values = Vec::with_capacity(RATE_ATTRIBUTES.len());
        for name in RATE_ATTRIBUTES {
            let mut labels = Vec::new();
            for raw in slot_values(record, name) {
                let code: usize =
                    raw.trim()
                        .parse()
                        .map_err(|_| PanelError::DataIntegrity {
                            message: format!("link-rate code `{raw}` in `{name}` is not an integer"),
                        })?;
                let label = linkrate::decode(code).ok_or_else(|| PanelError::DataIntegrity {
                    message: format!("link-rate code {code} in `{name}` is out of range"),
                })?;
                labels.push(label.to_string());
            }
            values.push(labels.join(","));
        }
        rows.push(LinkTableRow {
            phy: range.start + index as u32,
            values,
        });
    }
    Ok(LinkTable {
        header: table_header(&RATE_ATTRIBUTES),
        rows,
    })
}

/// Error table: raw counter values, stored as-is.
fn raw_table(records: &[PerPhyRecord], range: PhyRange, names: &[&str]) -> LinkTable {
    let rows = records
        .iter()
        .enumerate()
        .map(|(index, record)| LinkTableRow {
            phy: range.start + index as u32,
            values: names
                .iter()
                .map(|&name| slot_values(record, name).join(","))
                .collect(),
        })
        .collect();
    LinkTable {
        header: table_header(names),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::{ATTR_NAME, ATTR_SAS_PORT_TYPE};

    fn port_vertex() -> Vertex {
        let mut vtx = Vertex::new(
            "sas://sn=5000c50099f2a8c1/port=0?start-phy=0:end-phy=1",
            VertexType::Port,
            0,
        );
        for (name, value) in [
            (ATTR_NAME, "port"),
            (ATTR_SAS_PORT_TYPE, "initiator-port"),
            (ATTR_MAX_LINK_RATE, "9,9"),
            (ATTR_NEGOTIATED_LINK_RATE, "9,8"),
            (ATTR_INVALID_DWORD, "0,0"),
            (ATTR_RUNNING_DISPARITY_ERROR, "0,0"),
            (ATTR_LOSS_DWORD_SYNC, "0,0"),
            (ATTR_RESET_PROBLEM_COUNT, "0,0"),
        ] {
            vtx.attributes.insert(name.to_string(), value.to_string());
        }
        vtx
    }

    #[test]
    fn port_panel_has_both_tables() {
        let panel = PanelBuilder::default().build(&port_vertex()).unwrap();

        let rate = panel.rate_table.expect("rate table");
        assert_eq!(
            rate.header,
            vec!["PHY #", ATTR_MAX_LINK_RATE, ATTR_NEGOTIATED_LINK_RATE]
        );
        assert_eq!(rate.rows.len(), 2);
        assert_eq!(rate.rows[0].phy, 0);
        assert_eq!(rate.rows[1].phy, 1);
        assert_eq!(rate.rows[0].values, vec!["3.0 Gbits/s", "3.0 Gbits/s"]);
        assert_eq!(rate.rows[1].values, vec!["3.0 Gbits/s", "1.5 Gbits/s"]);

        let errors = panel.error_table.expect("error table");
        assert_eq!(errors.rows.len(), 2);
        for row in &errors.rows {
            assert_eq!(row.values, vec!["0", "0", "0", "0"]);
        }
    }

    #[test]
    fn missing_rate_attribute_omits_only_the_rate_table() {
        let mut vtx = port_vertex();
        vtx.attributes.remove(ATTR_NEGOTIATED_LINK_RATE);

        let panel = PanelBuilder::default().build(&vtx).unwrap();
        assert!(panel.rate_table.is_none());
        assert!(panel.error_table.is_some());
        assert!(!panel.rows.is_empty());
    }

    #[test]
    fn missing_error_attribute_omits_only_the_error_table() {
        let mut vtx = port_vertex();
        vtx.attributes.remove(ATTR_LOSS_DWORD_SYNC);

        let panel = PanelBuilder::default().build(&vtx).unwrap();
        assert!(panel.rate_table.is_some());
        assert!(panel.error_table.is_none());
    }

    #[test]
    fn port_without_phy_range_keeps_rows_drops_tables() {
        let mut vtx = port_vertex();
        vtx.fmri = "sas://sn=5000c50099f2a8c1/port=0".to_string();

        let panel = PanelBuilder::default().build(&vtx).unwrap();
        assert!(panel.rate_table.is_none());
        assert!(panel.error_table.is_none());
        assert_eq!(panel.rows[0].value.as_deref(), Some(vtx.fmri.as_str()));
    }

    #[test]
    fn out_of_range_rate_code_propagates() {
        let mut vtx = port_vertex();
        vtx.attributes
            .insert(ATTR_MAX_LINK_RATE.to_string(), "9,13".to_string());

        let err = PanelBuilder::default().build(&vtx).unwrap_err();
        assert!(matches!(err, PanelError::DataIntegrity { .. }));
    }

    #[test]
    fn segment_shortfall_propagates() {
        let mut vtx = port_vertex();
        vtx.attributes
            .insert(ATTR_INVALID_DWORD.to_string(), "0".to_string());

        let err = PanelBuilder::default().build(&vtx).unwrap_err();
        assert!(matches!(err, PanelError::DataIntegrity { .. }));
    }

    #[test]
    fn hc_fmri_row_is_shortened() {
        let mut vtx = Vertex::new("sas://a/initiator=0", VertexType::Initiator, 0);
        vtx.attributes.insert(
            ATTR_HC_FMRI.to_string(),
            "hc://:product-id=x:server-id=y/motherboard=0/hba=1".to_string(),
        );

        let panel = PanelBuilder::default().build(&vtx).unwrap();
        let row = panel
            .rows
            .iter()
            .find(|r| r.field == ATTR_HC_FMRI)
            .unwrap();
        assert_eq!(row.value.as_deref(), Some("hc://motherboard=0/hba=1"));
    }

    #[test]
    fn host_rows_are_ordered() {
        let host = HostInfo {
            nodename: "storage-head-01".to_string(),
            os_version: "5.11".to_string(),
            timestamp: "2020-02-07T18:02:11Z".to_string(),
        };
        let rows = host.host_rows();
        let fields: Vec<&str> = rows.iter().map(|r| r.field.as_str()).collect();
        assert_eq!(fields, vec!["nodename", "os-version", "timestamp"]);
        assert!(rows.iter().all(|r| r.value.is_some()));
    }
}
