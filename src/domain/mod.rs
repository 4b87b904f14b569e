// Domain layer: records, results and the ports the resolver talks through.

pub mod model;
pub mod ports;
