pub mod alerts;
pub mod indexes;
pub mod stations;
