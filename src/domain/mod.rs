// Domain layer: sequence models, ports (interfaces) and the pure comparison logic.
// No I/O beyond reading a FASTA file into memory.

pub mod distance;
pub mod encoding;
pub mod fasta;
pub mod model;
pub mod ports;
