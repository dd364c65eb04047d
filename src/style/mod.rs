pub(crate) mod effects;
pub(crate) mod paint;
pub(crate) mod stroke;
pub(crate) mod text;
