pub mod error;
pub mod export_type;
pub mod options;
pub mod qr_code;
pub mod runtime;
pub mod sanitizers;
