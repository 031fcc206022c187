pub(crate) mod ease;
pub(crate) mod registry;
pub(crate) mod trigger;
pub(crate) mod tween;
