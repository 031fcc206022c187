pub(crate) mod reveal;
pub(crate) mod scroll_fade;
