use std::error::Error;

use tokio::io;
use tracing::info;

use random_greeter::config::GreeterConfig;
use random_greeter::emitter::Emitter;
use random_greeter::random::ThreadRandom;
use random_greeter::service::log::init_logger;
use random_greeter::{build_runtime, WELCOME_INFO};

type MainResult = Result<(), Box<dyn Error>>;

fn main() -> MainResult {
    let config = GreeterConfig::builtin()?;
    let _guard = init_logger(&config.log);

    info!("{}", WELCOME_INFO);

    let schedule = config.ticker.schedule()?;
    info!(
        "First greeting in {:?}, then every {:?}",
        schedule.initial_delay, schedule.period
    );

    let runtime = build_runtime()?;
    runtime.block_on(async move {
        let mut emitter = Emitter::new(ThreadRandom::new(), io::stdout(), schedule);

        let stopped = tokio::select! {
            result = emitter.run() => {
                result?;
                false
            }
            signal = tokio::signal::ctrl_c() => {
                signal?;
                true
            }
        };

        if stopped {
            info!("Stopping after {} greetings", emitter.ticks());
        }

        Ok::<_, Box<dyn Error>>(())
    })
}
