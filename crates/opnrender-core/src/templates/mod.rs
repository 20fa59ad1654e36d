//! Template lookup and rendering for OPNsense configuration fragments.
//!
//! Templates are Handlebars sources in a search directory, one file per
//! configuration fragment. Files carry an `.hbs` suffix that is stripped at
//! registration, so `templates/dhcp.xml.hbs` is addressed as `dhcp.xml`.
//!
//! [`engine::TemplateEngine`] wraps the registry with **strict mode** enabled:
//! a `{{variable}}` missing from the context fails that render instead of
//! substituting an empty string. Surfacing exactly those mistakes is the
//! purpose of this tool.

pub mod engine;

/// The fixed set of fragment templates checked in one run, in report order.
pub const DEFAULT_SET: [&str; 6] = [
    "dhcp.xml",
    "dnsbl.xml",
    "nat.xml",
    "ntp.xml",
    "suricata.xml",
    "vlans.xml",
];
