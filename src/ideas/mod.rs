pub mod normalizer;
pub mod placeholder;
