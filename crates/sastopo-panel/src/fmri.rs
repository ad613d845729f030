//! FMRI helpers: display shortening and phy-range decoding.
//!
//! An FMRI is a hierarchical `scheme://authority/path` identifier. The
//! authority can be arbitrarily long (product/chassis/server ids) and carries
//! no information a human reader wants in the info panel, so [`shorten`]
//! keeps only the path. Port FMRIs additionally embed the inclusive phy range
//! of the port (`...:start-phy=0:end-phy=3...`), which [`decode_phy_range`]
//! extracts to size the per-phy tables.

use nom::{
    bytes::complete::tag,
    character::complete::u32 as dec_u32,
    sequence::{preceded, separated_pair},
    IResult,
};
use serde::{Deserialize, Serialize};

use crate::error::PanelError;

/// Inclusive phy range of a port, derived from its FMRI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhyRange {
    /// First phy number of the port.
    pub start: u32,
    /// Number of phys; always >= 1.
    pub count: u32,
}

/// Strip the authority from a hierarchical FMRI for compact display,
/// yielding `hc://<path>`. Identifiers without an authority-terminating `/`
/// are returned unchanged.
pub fn shorten(fmri: &str) -> String {
    let Some(scheme_end) = fmri.find("://") else {
        return fmri.to_string();
    };
    let authority = &fmri[scheme_end + 3..];
    match authority.find('/') {
        Some(sep) => format!("hc://{}", &authority[sep + 1..]),
        None => fmri.to_string(),
    }
}

fn phy_range_pair(input: &str) -> IResult<&str, (u32, u32)> {
    separated_pair(
        preceded(tag("start-phy="), dec_u32),
        tag(":"),
        preceded(tag("end-phy="), dec_u32),
    )(input)
}

// A stray `start-phy=` without the matching suffix must not mask a complete
// pattern later in the string, so every occurrence is tried in turn.
fn phy_range_pattern(input: &str) -> Option<(u32, u32)> {
    input
        .match_indices("start-phy=")
        .find_map(|(at, _)| phy_range_pair(&input[at..]).ok().map(|(_, pair)| pair))
}

/// Decode the `start-phy=<N>:end-phy=<M>` pattern embedded anywhere in a port
/// FMRI. A port without the pattern (or with an inverted range) violates the
/// upstream contract and fails with [`PanelError::MalformedIdentifier`].
pub fn decode_phy_range(fmri: &str) -> Result<PhyRange, PanelError> {
    let malformed = || PanelError::MalformedIdentifier {
        fmri: fmri.to_string(),
    };
    let (start, end) = phy_range_pattern(fmri).ok_or_else(malformed)?;
    if end < start {
        return Err(malformed());
    }
    // `0..=u32::MAX` would overflow the count; no real port has 2^32 phys.
    let count = (end - start).checked_add(1).ok_or_else(malformed)?;
    Ok(PhyRange { start, count })
}
