// Domain layer: roster and assignment models plus the ports the core talks through.

pub mod model;
pub mod ports;
