pub mod dns;
pub mod instrumentation;
pub mod ping;
