mod access_gate;

pub use access_gate::{ACCESS_HEADER, AccessGate, access_gate_middleware};
