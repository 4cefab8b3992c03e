use serde::Serialize;

/// A catalog entry for one of the bundled tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tool {
    /// Subcommand name.
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// The bundled tools, in display order.
pub const TOOLS: [Tool; 3] = [
    Tool {
        name: "json",
        title: "JSON Snip",
        description: "Format, validate & generate TypeScript types from JSON.",
    },
    Tool {
        name: "regex",
        title: "Regex Snip",
        description: "Test and debug regular expressions with live matches.",
    },
    Tool {
        name: "jwt",
        title: "JWT Snip",
        description: "Decode JWT tokens without verifying signatures.",
    },
];
