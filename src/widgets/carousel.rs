use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{
    Instant,
    MissedTickBehavior,
};

use crate::config::CarouselConfig;
use crate::surface::Document;
use crate::types::ElementId;

/// Testimonial slider. The index wraps in both directions.
#[derive(Debug, Clone)]
pub struct Carousel {
    config: CarouselConfig,
    cards: Vec<ElementId>,
    index: usize,
}

impl Carousel {
    /// Collects the cards present in `document`.
    #[must_use]
    pub fn new(document: &dyn Document, config: CarouselConfig) -> Self {
        let cards = document.elements_with_class(&config.card_class);
        tracing::debug!(cards = cards.len(), "Carousel ready");
        Self { config, cards, index: 0 }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Auto-advance period, `None` when disabled.
    #[must_use]
    pub const fn interval(&self) -> Option<Duration> {
        if self.config.interval_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.config.interval_ms))
        }
    }

    #[must_use]
    pub fn is_prev_control(&self, id: &ElementId) -> bool {
        id.as_str() == self.config.prev
    }

    #[must_use]
    pub fn is_next_control(&self, id: &ElementId) -> bool {
        id.as_str() == self.config.next
    }

    pub fn next(&mut self, document: &mut dyn Document) {
        if self.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.len();
        self.render(document);
    }

    pub fn prev(&mut self, document: &mut dyn Document) {
        if self.is_empty() {
            return;
        }
        self.index = (self.index + self.len() - 1) % self.len();
        self.render(document);
    }

    /// Auto-advance step.
    pub fn tick(&mut self, document: &mut dyn Document) {
        tracing::trace!(index = self.index, "Carousel tick");
        self.next(document);
    }

    /// Shifts the track so the current card is in view.
    pub fn render(&self, document: &mut dyn Document) {
        let Some(first) = self.cards.first() else {
            return;
        };
        let card_width = document.width(first).unwrap_or(0);
        let step = u64::from(card_width) + u64::from(self.config.gap_px);
        let offset = u64::try_from(self.index).unwrap_or(u64::MAX).saturating_mul(step);
        document.set_style(
            &ElementId::from(self.config.track.as_str()),
            "transform",
            Some(&format!("translateX(-{offset}px)")),
        );
    }
}

/// Background task sending a message every period until stopped.
///
/// The task is aborted when the handle is dropped.
#[derive(Debug)]
pub struct AutoAdvance {
    handle: JoinHandle<()>,
}

impl AutoAdvance {
    /// Starts sending `message` on `sender` every `period`, first after one period.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<T>(period: Duration, sender: mpsc::UnboundedSender<T>, message: T) -> Self
    where
        T: Clone + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if sender.send(message.clone()).is_err() {
                    tracing::debug!("Auto-advance receiver dropped, stopping");
                    break;
                }
            }
        });
        Self { handle }
    }

    /// Stops the task. No message is sent after this returns.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
