//! Engine module - scheduling glue between real time and the core tick.

pub mod scheduler;

pub use scheduler::TickScheduler;
