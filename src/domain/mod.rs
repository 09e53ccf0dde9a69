// Domain layer: capabilities (ports) and plain values. Concrete variants live in adapters and core.

pub mod model;
pub mod ports;
