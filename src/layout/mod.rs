pub(crate) mod translate;
