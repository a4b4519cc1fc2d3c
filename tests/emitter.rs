use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use regex::Regex;
use tokio::io::AsyncWrite;
use tokio::time::timeout;

use random_greeter::emitter::{Emitter, Schedule};
use random_greeter::error::GreeterError;
use random_greeter::message::create_message;
use random_greeter::random::{SeededRandom, SequenceRandom, ThreadRandom};

fn message_pattern() -> Regex {
    Regex::new(r"^(Hello|Hi|Hey|Howdy|Hola|Bonjour), your random number is (\d{1,3})!$")
        .expect("valid regex")
}

fn assert_message(line: &str, pattern: &Regex) {
    let cap = pattern
        .captures(line)
        .unwrap_or_else(|| panic!("malformed line: {line:?}"));
    let n: u8 = cap[2].parse().unwrap();
    assert!((1..=100).contains(&n), "number {n} out of range in {line:?}");
}

#[test]
fn composed_messages_match_pattern() {
    let pattern = message_pattern();
    let mut rng = ThreadRandom::new();
    for _ in 0..10_000 {
        assert_message(&create_message(&mut rng), &pattern);
    }
}

#[test]
fn seeded_messages_repeat() {
    let mut a = SeededRandom::new(2024);
    let mut b = SeededRandom::new(2024);
    for _ in 0..50 {
        assert_eq!(create_message(&mut a), create_message(&mut b));
    }
}

#[tokio::test(start_paused = true)]
async fn three_lines_in_ten_seconds() {
    let mut emitter = Emitter::new(ThreadRandom::new(), Vec::new(), Schedule::default());

    let res = timeout(Duration::from_secs(10), emitter.run()).await;
    assert!(res.is_err(), "run should still be going");

    let out = String::from_utf8(emitter.into_writer()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);

    let pattern = message_pattern();
    for line in lines {
        assert_message(line, &pattern);
    }
}

#[tokio::test(start_paused = true)]
async fn nothing_before_initial_delay() {
    let mut emitter = Emitter::new(ThreadRandom::new(), Vec::new(), Schedule::default());

    let res = timeout(Duration::from_millis(2999), emitter.run()).await;
    assert!(res.is_err());
    assert_eq!(emitter.ticks(), 0);
    assert!(emitter.writer().is_empty());
}

#[tokio::test(start_paused = true)]
async fn pinned_sources_reach_output() {
    let rng = SequenceRandom::new(vec![0.7, 0.415, 0.9, 0.0]);
    let mut emitter = Emitter::new(rng, Vec::new(), Schedule::default());

    let _ = timeout(Duration::from_millis(6500), emitter.run()).await;

    assert_eq!(
        String::from_utf8(emitter.into_writer()).unwrap(),
        "Hola, your random number is 42!\nBonjour, your random number is 1!\n"
    );
}

struct BrokenPipe;

impl AsyncWrite for BrokenPipe {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        _buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Poll::Ready(Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed")))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

#[tokio::test(start_paused = true)]
async fn write_failure_stops_run() {
    let mut emitter = Emitter::new(ThreadRandom::new(), BrokenPipe, Schedule::default());

    let res = timeout(Duration::from_secs(10), emitter.run())
        .await
        .expect("run should return on the first failed tick");

    match res {
        Err(GreeterError::IO(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(emitter.ticks(), 0);
}
