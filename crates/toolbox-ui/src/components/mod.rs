pub(crate) mod result_panel;
pub(crate) mod tree;
