pub mod dsl;
pub mod node;
pub mod sub;
