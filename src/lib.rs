use tokio::runtime;
use tokio::runtime::Runtime;

pub mod config;
pub mod emitter;
pub mod error;
pub mod message;
pub mod random;
pub mod service;

pub static WELCOME_INFO: &str = include_str!(concat!(env!("OUT_DIR"), "/welcome_info"));

/// One thread drives every tick.
pub fn build_runtime() -> std::io::Result<Runtime> {
    runtime::Builder::new_current_thread()
        .thread_name("Greeter")
        .enable_all()
        .build()
}
