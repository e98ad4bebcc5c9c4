//! UI events fed to a page, and the effects a page asks its event loop to schedule.

use serde::{
    Deserialize,
    Serialize,
};

use crate::types::ElementId;
use crate::widgets::ScheduledReveal;

/// An input to [`super::Page::dispatch`].
///
/// Serialized as one JSON object per line, e.g.
/// `{"type": "click", "element": "project3View"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum UiEvent {
    SelectLocale { locale: String },
    Click { element: ElementId },
    Key { key: String },
    OpenEntry { id: u32 },
    CloseOverlay,
    Filter { filter: String },
    CarouselNext,
    CarouselPrev,
    CarouselTick,
    ToggleMenu,
    Reveal { element: ElementId },
    StopCarousel,
    /// The hero statistics came into view.
    StatsVisible,
    CountFrame,
}

/// Work the event loop must do after an event was handled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PageEffect {
    /// Dispatch [`UiEvent::Reveal`] for the element after the delay.
    ScheduleReveal(ScheduledReveal),
    /// Drop reveals still pending from an earlier filter.
    CancelReveals,
    /// Stop the carousel's auto-advance task.
    StopAutoAdvance,
    /// Dispatch [`UiEvent::CountFrame`] every `frame_ms` until stopped.
    StartCounting { frame_ms: u64 },
    StopCounting,
}
