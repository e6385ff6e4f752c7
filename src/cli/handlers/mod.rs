pub mod config;
pub mod data_uri;
pub mod decode;
pub mod encode;
pub mod int;
pub mod ipv6;
pub mod list;
pub mod mime;
