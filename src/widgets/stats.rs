use serde::Serialize;

use crate::config::StatsConfig;
use crate::surface::Document;
use crate::types::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CounterState {
    #[default]
    Idle,
    Counting,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CountedNumber {
    element: ElementId,
    target: i64,
}

/// Hero statistics counter.
///
/// Runs once, the first time the statistics come into view: every number
/// counts up frame by frame and ends on exactly its target.
#[derive(Debug, Clone)]
pub struct StatsCounter {
    config: StatsConfig,
    numbers: Vec<CountedNumber>,
    frame: u64,
    state: CounterState,
}

impl StatsCounter {
    #[must_use]
    pub const fn new(config: StatsConfig) -> Self {
        Self { config, numbers: Vec::new(), frame: 0, state: CounterState::Idle }
    }

    #[must_use]
    pub const fn state(&self) -> CounterState {
        self.state
    }

    /// Period between two frames.
    #[must_use]
    pub const fn frame_ms(&self) -> u64 {
        self.config.frame_ms
    }

    /// Frames needed to reach the targets. At least one.
    fn frame_count(&self) -> u64 {
        if self.config.frame_ms == 0 {
            return 1;
        }
        self.config.duration_ms.div_ceil(self.config.frame_ms).max(1)
    }

    /// Starts counting.
    ///
    /// Returns `false` when the counter already ran or the document has no
    /// number to count. Numbers whose target is not an integer are left alone.
    pub fn start(&mut self, document: &dyn Document) -> bool {
        if self.state != CounterState::Idle {
            tracing::trace!(state = ?self.state, "Stats already counted");
            return false;
        }

        self.numbers = document
            .elements_with_class(&self.config.number_class)
            .into_iter()
            .filter_map(|element| {
                let raw = document.attribute(&element, &self.config.count_attribute);
                match raw.as_deref().and_then(parse_count) {
                    Some(target) => Some(CountedNumber { element, target }),
                    None => {
                        tracing::debug!(%element, ?raw, "Stat without a numeric target");
                        None
                    }
                }
            })
            .collect();

        if self.numbers.is_empty() {
            self.state = CounterState::Done;
            return false;
        }

        tracing::debug!(numbers = self.numbers.len(), frames = self.frame_count(), "Counting stats");
        self.state = CounterState::Counting;
        true
    }

    /// Shows the values of the next frame. Returns `true` once every number
    /// shows its target.
    pub fn advance(&mut self, document: &mut dyn Document) -> bool {
        if self.state != CounterState::Counting {
            return false;
        }

        self.frame += 1;
        let frames = self.frame_count();
        let mut finished = true;
        for number in &self.numbers {
            let value = value_at(number.target, self.frame, frames);
            if value >= number.target {
                document.set_text(&number.element, &number.target.to_string());
            } else {
                document.set_text(&number.element, &value.to_string());
                finished = false;
            }
        }

        if finished {
            tracing::debug!(frames = self.frame, "Stats counted");
            self.state = CounterState::Done;
        }
        finished
    }
}

/// `target * frame / frames`, rounded toward zero.
fn value_at(target: i64, frame: u64, frames: u64) -> i64 {
    let value = i128::from(target) * i128::from(frame) / i128::from(frames.max(1));
    i64::try_from(value).unwrap_or(target)
}

/// Leading integer of `raw`, like `parseInt`: `"120+"` is 120, `"abc"` is nothing.
fn parse_count(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits.get(..end)?.parse::<i64>().ok().map(|value| sign * value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::surface::{
        Element,
        MemoryDocument,
    };

    #[fixture]
    fn document() -> MemoryDocument {
        MemoryDocument::from_elements(vec![
            Element::new("heroStats").with_class("hero-stats"),
            Element::new("statProjects")
                .with_parent("heroStats")
                .with_class("stat-number")
                .with_attribute("data-count", "120")
                .with_text("0"),
            Element::new("statAwards")
                .with_parent("heroStats")
                .with_class("stat-number")
                .with_attribute("data-count", "24+")
                .with_text("0"),
            Element::new("statBroken")
                .with_parent("heroStats")
                .with_class("stat-number")
                .with_attribute("data-count", "many")
                .with_text("lots"),
        ])
        .unwrap()
    }

    fn counter() -> StatsCounter {
        StatsCounter::new(StatsConfig { duration_ms: 100, frame_ms: 10, ..StatsConfig::default() })
    }

    fn text_of(document: &MemoryDocument, id: &str) -> String {
        document.element(id).unwrap().content.text()
    }

    #[rstest]
    fn counts_up_and_ends_on_the_target(mut document: MemoryDocument) {
        let mut counter = counter();
        assert_that!(counter.start(&document), eq(true));

        assert_that!(counter.advance(&mut document), eq(false));
        assert_that!(text_of(&document, "statProjects"), eq("12"));
        assert_that!(text_of(&document, "statAwards"), eq("2"));

        let mut frames = 1;
        while !counter.advance(&mut document) {
            frames += 1;
        }

        assert_that!(frames + 1, eq(10));
        assert_that!(text_of(&document, "statProjects"), eq("120"));
        assert_that!(text_of(&document, "statAwards"), eq("24"));
        assert_that!(text_of(&document, "statBroken"), eq("lots"));
        assert_that!(counter.state(), eq(CounterState::Done));
    }

    #[rstest]
    fn runs_only_once(mut document: MemoryDocument) {
        let mut counter = counter();
        counter.start(&document);
        while !counter.advance(&mut document) {}
        document.set_text(&ElementId::from("statProjects"), "0");

        let restarted = counter.start(&document);
        let advanced = counter.advance(&mut document);

        assert_that!(restarted, eq(false));
        assert_that!(advanced, eq(false));
        assert_that!(text_of(&document, "statProjects"), eq("0"));
    }

    #[rstest]
    fn second_start_while_counting_is_ignored(document: MemoryDocument) {
        let mut counter = counter();

        assert_that!(counter.start(&document), eq(true));
        assert_that!(counter.start(&document), eq(false));
        assert_that!(counter.state(), eq(CounterState::Counting));
    }

    #[rstest]
    fn nothing_to_count() {
        let document = MemoryDocument::from_elements(vec![Element::new("heroStats")]).unwrap();
        let mut counter = counter();

        assert_that!(counter.start(&document), eq(false));
        assert_that!(counter.state(), eq(CounterState::Done));
    }

    #[rstest]
    fn advance_before_start_does_nothing(mut document: MemoryDocument) {
        let before = document.clone();

        assert_that!(counter().advance(&mut document), eq(false));
        assert_that!(document, eq(&before));
    }

    #[rstest]
    #[case::zero(0, 1, 0)]
    #[case::negative(-5, 1, -5)]
    fn non_positive_targets_finish_on_the_first_frame(
        #[case] target: i64,
        #[case] frame: u64,
        #[case] expected: i64,
    ) {
        let value = value_at(target, frame, 125);
        let shown = if value >= target { target } else { value };

        assert_that!(shown, eq(expected));
    }

    #[rstest]
    #[case::plain("120", Some(120))]
    #[case::suffix("24+", Some(24))]
    #[case::padded("  85", Some(85))]
    #[case::negative("-3", Some(-3))]
    #[case::text("many", None)]
    #[case::empty("", None)]
    fn parse_count_cases(#[case] raw: &str, #[case] expected: Option<i64>) {
        assert_that!(parse_count(raw), eq(expected));
    }
}
