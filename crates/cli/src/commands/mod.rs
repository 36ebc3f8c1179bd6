pub(crate) mod catalog;
pub(crate) mod recognize;
