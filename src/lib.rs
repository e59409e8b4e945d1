//! Host shell for the pasteboard consent dialog: configuration loading,
//! tracing setup and the wiring of headless adapters into the ability.

pub mod bootstrap;
