//! Link-rate code table.
//!
//! Per-phy rate attributes carry small integer codes; codes 0-7 are link
//! states, 8-12 are negotiated/maximum speeds. The labels (including the
//! `GBits` capitalization on code 12) match the generator's encoding verbatim.

/// Labels indexed directly by link-rate code.
pub const LINK_RATE_LABELS: [&str; 13] = [
    "Unknown",
    "Disabled",
    "Reset problem",
    "Spinup hold",
    "Port selector",
    "Reset in progress",
    "Unsupported phy attached",
    "Reserved",
    "1.5 Gbits/s",
    "3.0 Gbits/s",
    "6.0 Gbits/s",
    "12.0 Gbits/s",
    "22.5 GBits/s",
];

/// Decode a link-rate code. `None` for codes outside `0..=12`; well-formed
/// documents never produce one, so callers escalate `None` to a
/// data-integrity error instead of clamping.
pub fn decode(code: usize) -> Option<&'static str> {
    LINK_RATE_LABELS.get(code).copied()
}
