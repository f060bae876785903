// Domain layer: value types and the ports handlers talk through. No browser types here.

pub mod model;
pub mod ports;
