// Domain layer: identifiers, command shape and the resource port.

pub mod model;
pub mod ports;
