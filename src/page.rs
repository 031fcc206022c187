pub(crate) mod config;
pub(crate) mod document;
pub(crate) mod marker;
pub(crate) mod theme;
