pub mod launch;
pub mod simulator;
