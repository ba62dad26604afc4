// Domain layer: configuration documents and the source port they are read through.

pub mod model;
pub mod ports;
