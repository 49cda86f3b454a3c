pub mod axis;
pub mod builder;
pub mod compound;
pub mod presets;
pub mod props;
pub mod schema;
