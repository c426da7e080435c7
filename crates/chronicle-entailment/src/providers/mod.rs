//! Oracle providers.

mod http_nli;

pub use http_nli::HttpNliOracle;
