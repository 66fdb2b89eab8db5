use std::fmt::Display;

/// Represents the output formats the app can write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportType {
    /// A pretty-printed JSON array
    #[default]
    Json,
    /// A self-contained HTML report with QR codes
    Html,
}

impl ExportType {
    /// Given user's input, return a variant if the input matches one
    pub fn from_cli(export_type: &str) -> Option<Self> {
        match export_type.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "html" => Some(Self::Html),
            _ => None,
        }
    }
}

impl Display for ExportType {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportType::Json => write!(fmt, "json"),
            ExportType::Html => write!(fmt, "html"),
        }
    }
}
