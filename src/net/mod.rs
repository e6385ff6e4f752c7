pub mod data_uri;
pub mod mimeparse;
