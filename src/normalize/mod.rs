pub(crate) mod ir;
pub(crate) mod pass;
pub(crate) mod store;
