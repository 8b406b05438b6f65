// Domain layer: records, display derivation, form rules and ports.

pub mod display;
pub mod model;
pub mod ports;
pub mod validation;
