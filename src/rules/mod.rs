pub(crate) mod ru;
