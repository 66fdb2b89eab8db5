pub mod exporter;
pub mod html;
pub mod json;
