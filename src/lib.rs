//! # DevSnips
//!
//! Tiny text tools for everyday dev work, as a library and the `snips` CLI:
//!
//! - Format JSON with stable 2-space indentation and source key order
//! - Generate a flat TypeScript interface from a JSON object
//! - Test a regular expression against text, line by line
//! - Decode JWT-style compact tokens (without verifying signatures)
//!
//! Every tool is a pure function over a string: no I/O, no shared state, no
//! network. Feed it text, get text (or an error) back.
//!
//! ## Command-Line Tool
//!
//! This crate includes the `snips` CLI:
//!
//! ```sh
//! # Install
//! cargo install devsnips
//!
//! # Format JSON from stdin
//! echo '{"a":1,"b":2}' | snips json
//!
//! # Generate a TypeScript interface instead
//! echo '{"id":1,"name":"x"}' | snips json --types
//!
//! # Keep the lines of a file that match a pattern
//! snips regex '^dev(snips)?$' -f i names.txt
//!
//! # Decode a JWT (header/payload only; the signature is never checked)
//! snips jwt eyJhbGciOi...
//! ```
//!
//! Run `snips --help` for all options.
//!
//! ## Quick Start
//!
//! ```rust
//! let pretty = devsnips::normalize(r#"{"name":"Alice","active":true}"#);
//! assert_eq!(pretty, "{\n  \"name\": \"Alice\",\n  \"active\": true\n}");
//!
//! let iface = devsnips::synthesize_interface(&pretty);
//! assert_eq!(iface, "interface Data {\n  name: string;\n  active: boolean;\n}");
//! ```
//!
//! ## Error Signaling
//!
//! [`normalize`] and [`synthesize_interface`] keep the original tools'
//! contract of returning an empty string on failure, which callers cannot
//! distinguish from formatting a trivially small document. When the
//! distinction matters, use [`try_normalize`], or the `Result`-returning
//! [`match_lines`] and [`decode_token`], which report
//! [`PatternError`] and [`TokenError`] respectively.

mod error;
mod interface;
mod matcher;
mod normalize;
mod token;
mod tools;

pub use crate::error::{PatternError, TokenError};
pub use crate::interface::{synthesize_interface, synthesize_interface_named};
pub use crate::matcher::match_lines;
pub use crate::normalize::{normalize, try_normalize};
pub use crate::token::{decode_token, DecodedToken};
pub use crate::tools::{Tool, TOOLS};
