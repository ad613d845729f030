//! Per-phy attribute demultiplexing.
//!
//! The topology generator flattens array-valued per-phy properties into one
//! comma-packed string per attribute (`"9,9,8,9"`), one segment per phy in
//! phy order. [`demux`] is the inverse: a single column-zip over the
//! requested attribute names that yields one record per phy, used identically
//! for the rate and the error attribute groups.

use std::collections::BTreeMap;

use crate::error::PanelError;
use crate::vertex::AttrMap;

/// Per-phy values keyed by attribute name. Each slot is an append-only list;
/// current schemas capture exactly one raw value per attribute per phy, the
/// list shape just keeps the record uniform.
pub type PerPhyRecord = BTreeMap<String, Vec<String>>;

/// Demultiplex `names` out of `attributes` into `phy_count` aligned records.
///
/// All-or-nothing: if any requested attribute is absent the whole operation
/// fails with [`PanelError::MissingAttribute`] (the caller omits the table; a
/// partially filled table would be more misleading than none). An attribute
/// with fewer comma segments than `phy_count` is upstream corruption and
/// fails with [`PanelError::DataIntegrity`] rather than being padded.
pub fn demux(
    attributes: &AttrMap,
    names: &[&str],
    phy_count: u32,
) -> Result<Vec<PerPhyRecord>, PanelError> {
    let phy_count = phy_count as usize;
    let mut records = vec![PerPhyRecord::new(); phy_count];

    for &name in names {
        let raw = attributes
            .get(name)
            .ok_or_else(|| PanelError::MissingAttribute {
                name: name.to_string(),
            })?;
        let segments: Vec<&str> = raw.split(',').collect();
        if segments.len() < phy_count {
            return Err(PanelError::DataIntegrity {
                message: format!(
                    "attribute `{name}` has {} comma segments for {phy_count} phys",
                    segments.len()
                ),
            });
        }
        for (record, segment) in records.iter_mut().zip(&segments) {
            record
                .entry(name.to_string())
                .or_default()
                .push(segment.to_string());
        }
    }

    Ok(records)
}
