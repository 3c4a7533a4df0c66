pub mod demo_flow;
pub mod showcase;
