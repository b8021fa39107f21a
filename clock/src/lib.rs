//! Clock endpoint: reports the current UTC time, one reading per tick.
//!
//! Registered under `/clock`, this is the reference implementation of the
//! `endpoint::Endpoint` contract: it paces itself with a ticker, honors the
//! event limit, and exits within one tick of cancellation or a closed sink.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use endpoint::sink::EventSink;
use endpoint::{Endpoint, RequestContext};
use log::*;
use serde::Serialize;
use std::time::Duration;
use tokio::time::interval;

/// One clock reading, as written to the sink.
#[derive(Debug, Serialize)]
pub struct ClockReading {
    #[serde(rename = "UTC")]
    pub utc: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Interval between readings on the streaming path.
    pub tick: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
        }
    }
}

pub struct ClockEndpoint {
    config: Config,
}

impl ClockEndpoint {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Endpoint for ClockEndpoint {
    async fn handle(&self, ctx: RequestContext, sink: &dyn EventSink) {
        // The first tick completes immediately, so the single-shot path
        // answers without waiting out a full interval.
        let mut ticker = interval(self.config.tick);

        let mut produced = 0;
        while produced < ctx.max_count() {
            tokio::select! {
                _ = ctx.cancelled() => {
                    debug!("Clock endpoint canceled after {produced} readings");
                    return;
                }
                _ = ticker.tick() => {
                    let reading = ClockReading {
                        utc: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                    };
                    let chunk = match serde_json::to_vec(&reading) {
                        Ok(chunk) => chunk,
                        Err(e) => {
                            error!("Error encoding clock reading: {e}");
                            return;
                        }
                    };
                    if sink.write(&chunk).await.is_err() {
                        debug!("Clock endpoint sink closed after {produced} readings");
                        return;
                    }
                    produced += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use endpoint::sink::RecordingSink;
    use serde_json::Value;
    use std::collections::HashMap;
    use tokio_util::sync::CancellationToken;

    fn context(max_count: usize, cancellation: CancellationToken) -> RequestContext {
        RequestContext::new("clock", HashMap::new(), max_count, cancellation)
    }

    fn fast_clock() -> ClockEndpoint {
        ClockEndpoint::new(Config {
            tick: Duration::from_millis(5),
        })
    }

    #[tokio::test]
    async fn test_single_reading_is_rfc3339_utc() {
        let sink = RecordingSink::new();
        fast_clock()
            .handle(context(1, CancellationToken::new()), &sink)
            .await;

        let body: Value = serde_json::from_slice(&sink.body()).unwrap();
        let utc = body["UTC"].as_str().unwrap();

        assert!(utc.ends_with('Z'));
        DateTime::parse_from_rfc3339(utc).unwrap();
    }

    #[tokio::test]
    async fn test_stops_at_event_limit() {
        let sink = RecordingSink::new();
        fast_clock()
            .handle(context(3, CancellationToken::new()), &sink)
            .await;

        let readings = serde_json::Deserializer::from_slice(&sink.body())
            .into_iter::<Value>()
            .count();
        assert_eq!(readings, 3);
    }

    #[tokio::test]
    async fn test_stops_promptly_on_cancellation() {
        let cancellation = CancellationToken::new();
        let canceler = cancellation.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceler.cancel();
        });

        let sink = RecordingSink::new();
        let clock = fast_clock();
        let run = clock.handle(context(1_000_000, cancellation), &sink);

        // Must return within one tick of the cancellation, not run out the
        // event limit.
        tokio::time::timeout(Duration::from_millis(500), run)
            .await
            .expect("clock endpoint did not stop after cancellation");
    }
}
