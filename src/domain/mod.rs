// Domain layer: core models and ports (interfaces). No dependencies on HTTP or config code.

pub mod model;
pub mod ports;
