use std::time::Duration;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::time::{self, Instant};
use tracing::{debug, error};

use crate::error::GreeterResult;
use crate::message::create_message;
use crate::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub initial_delay: Duration,
    pub period: Duration,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(3000),
            period: Duration::from_millis(3000),
        }
    }
}

/// Writes one composed message per tick to its sink.
///
/// All ticks run on the task that drives [`Emitter::run`], so two ticks
/// can never overlap.
pub struct Emitter<R, W> {
    rng: R,
    writer: W,
    schedule: Schedule,
    ticks: u64,
}

impl<R, W> Emitter<R, W>
where
    R: RandomSource,
    W: AsyncWrite + Unpin,
{
    pub fn new(rng: R, writer: W, schedule: Schedule) -> Self {
        Self {
            rng,
            writer,
            schedule,
            ticks: 0,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub async fn tick(&mut self) -> GreeterResult<()> {
        let mut line = create_message(&mut self.rng);
        line.push('\n');

        self.writer.write_all(line.as_bytes()).await?;
        self.writer.flush().await?;

        self.ticks += 1;
        debug!(tick = self.ticks, "{}", line.trim_end());

        Ok(())
    }

    /// Ticks forever, first after `initial_delay`, then every `period`.
    ///
    /// Only returns when a write fails.
    pub async fn run(&mut self) -> GreeterResult<()> {
        let start = Instant::now() + self.schedule.initial_delay;
        let mut interval = time::interval_at(start, self.schedule.period);

        loop {
            interval.tick().await;
            if let Err(e) = self.tick().await {
                error!("tick {} failed: {}", self.ticks + 1, e);
                return Err(e);
            }
        }
    }
}
