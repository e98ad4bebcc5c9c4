//! Headless event loop.
//!
//! Reads one JSON [`UiEvent`] per line, hands it to the [`Page`] and writes
//! one JSON snapshot per handled event. Carousel ticks, counter frames and
//! deferred reveals are fed back into the same loop so every event runs to
//! completion before the next one starts.

use std::time::Duration;


use serde::Serialize;
use thiserror::Error;
use tokio::io::{
    AsyncBufReadExt,
    AsyncRead,
    AsyncWrite,
    AsyncWriteExt,
    BufReader,
};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::page::{
    Page,
    PageEffect,
    PageSnapshot,
    UiEvent,
};
use crate::surface::Document;
use crate::types::ElementId;
use crate::widgets::{
    AutoAdvance,
    ScheduledReveal,
};

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Failed to read or write events: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Output line written after each handled event.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotLine<'a, D> {
    /// The event that produced this state.
    event: &'a UiEvent,
    /// Controller state.
    #[serde(flatten)]
    state: PageSnapshot,
    /// Full document after the event.
    document: &'a D,
}

/// Events produced inside the loop.
#[derive(Debug, Clone)]
enum Wakeup {
    Event(UiEvent),
    /// A reveal scheduled by the filter generation it belongs to.
    Reveal { generation: u64, element: ElementId },
}

/// Counters returned when the input ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverStats {
    /// Events dispatched to the page.
    pub handled: usize,
    /// Input lines that were not valid events.
    pub skipped: usize,
}

/// Drives a started page until `input` ends.
///
/// At end of input the auto-advance task stops, reveals still pending are
/// delivered, a running stats count finishes and the function returns.
/// Malformed lines are logged and skipped.
pub async fn run<D, R, W>(
    page: &mut Page<D>,
    input: R,
    output: &mut W,
) -> Result<DriverStats, DriverError>
where
    D: Document + Serialize,
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(input).lines();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut auto_advance = page.auto_advance_interval().map(|period| {
        tracing::debug!(?period, "Starting carousel auto-advance");
        AutoAdvance::spawn(period, tx.clone(), Wakeup::Event(UiEvent::CarouselTick))
    });
    let mut counting: Option<AutoAdvance> = None;
    let mut reveals = JoinSet::new();
    let mut generation = 0_u64;
    let mut input_open = true;
    let mut stats = DriverStats::default();

    loop {
        if !input_open && reveals.is_empty() && rx.is_empty() && counting.is_none() {
            break;
        }

        let wakeup = tokio::select! {
            biased;
            Some(wakeup) = rx.recv() => wakeup,
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    tracing::debug!("Input closed");
                    input_open = false;
                    auto_advance = None;
                    continue;
                };
                match parse_line(&line) {
                    Some(event) => Wakeup::Event(event),
                    None => {
                        stats.skipped += 1;
                        continue;
                    }
                }
            }
            Some(_) = reveals.join_next(), if !reveals.is_empty() => continue,
        };

        let event = match wakeup {
            Wakeup::Event(event) => event,
            Wakeup::Reveal { generation: scheduled, element } => {
                if scheduled != generation {
                    tracing::trace!(%element, "Dropping stale reveal");
                    continue;
                }
                UiEvent::Reveal { element }
            }
        };

        for effect in page.dispatch(event.clone()) {
            match effect {
                PageEffect::ScheduleReveal(reveal) => {
                    reveals.spawn(deliver_reveal(reveal, generation, tx.clone()));
                }
                PageEffect::CancelReveals => {
                    reveals.abort_all();
                    generation += 1;
                }
                PageEffect::StopAutoAdvance => {
                    if let Some(task) = auto_advance.take() {
                        task.stop();
                        tracing::debug!("Stopped carousel auto-advance");
                    }
                }
                PageEffect::StartCounting { frame_ms } => {
                    counting = Some(AutoAdvance::spawn(
                        Duration::from_millis(frame_ms),
                        tx.clone(),
                        Wakeup::Event(UiEvent::CountFrame),
                    ));
                }
                PageEffect::StopCounting => {
                    if let Some(task) = counting.take() {
                        task.stop();
                    }
                }
            }
        }
        stats.handled += 1;

        write_snapshot(output, &event, page).await?;
    }

    tracing::debug!(handled = stats.handled, skipped = stats.skipped, "Driver finished");
    Ok(stats)
}

fn parse_line(line: &str) -> Option<UiEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match serde_json::from_str(line) {
        Ok(event) => Some(event),
        Err(e) => {
            tracing::warn!("Skipping malformed event line {:?}: {}", line, e);
            None
        }
    }
}

async fn deliver_reveal(
    reveal: ScheduledReveal,
    generation: u64,
    sender: mpsc::UnboundedSender<Wakeup>,
) {
    tokio::time::sleep(reveal.delay()).await;
    // receiver gone means the driver already returned
    let _ = sender.send(Wakeup::Reveal { generation, element: reveal.element });
}

async fn write_snapshot<D, W>(
    output: &mut W,
    event: &UiEvent,
    page: &Page<D>,
) -> Result<(), DriverError>
where
    D: Document + Serialize,
    W: AsyncWrite + Unpin,
{
    let line = SnapshotLine { event, state: page.snapshot(), document: page.document() };
    let mut payload = serde_json::to_vec(&line)?;
    payload.push(b'\n');
    output.write_all(&payload).await?;
    output.flush().await?;
    Ok(())
}
