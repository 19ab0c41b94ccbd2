// Domain layer: the checked number, its digits and the verdict, plus the input port.

pub mod model;
pub mod ports;
