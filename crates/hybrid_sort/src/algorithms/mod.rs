pub(crate) mod common;
pub mod insertion_sort;
pub mod merge;
pub mod merge_aux;
pub mod merge_sort;
