use std::time::Duration;

use serde::Serialize;

use crate::config::{
    DEFAULT_ACTIVE_CLASS,
    FilterConfig,
};
use crate::surface::Document;
use crate::types::ElementId;

/// A portfolio item to mark revealed once `delay_ms` has elapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledReveal {
    pub element: ElementId,
    pub delay_ms: u64,
}

impl ScheduledReveal {
    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Category filter over the portfolio grid.
#[derive(Debug, Clone)]
pub struct PortfolioFilter {
    config: FilterConfig,
    active_class: String,
    active: String,
}

impl PortfolioFilter {
    #[must_use]
    pub fn new(config: FilterConfig) -> Self {
        let active = config.all_value.clone();
        Self { config, active_class: DEFAULT_ACTIVE_CLASS.to_string(), active }
    }

    /// Class set on the chosen filter button.
    #[must_use]
    pub fn with_active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    #[must_use]
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Filter value of a clicked filter button.
    #[must_use]
    pub fn button_value(&self, document: &dyn Document, id: &ElementId) -> Option<String> {
        if !document.has_class(id, &self.config.button_class) {
            return None;
        }
        document.attribute(id, &self.config.filter_attribute)
    }

    /// Shows the items of `filter` and hides the others.
    ///
    /// Shown items lose their revealed state; the returned reveals restore it
    /// one after another, `stagger_ms` apart by position in the grid.
    pub fn apply(&mut self, document: &mut dyn Document, filter: &str) -> Vec<ScheduledReveal> {
        for (id, value) in document.elements_with_attribute(&self.config.filter_attribute) {
            if document.has_class(&id, &self.config.button_class) {
                document.set_class(&id, &self.active_class, value == filter);
            }
        }

        let show_all = filter == self.config.all_value;
        let mut reveals = Vec::new();
        let items = document.elements_with_class(&self.config.item_class);
        for (index, item) in items.into_iter().enumerate() {
            let category = document.attribute(&item, &self.config.category_attribute);
            if show_all || category.as_deref() == Some(filter) {
                document.set_style(&item, "display", None);
                document.set_class(&item, &self.config.revealed_class, false);
                let position = u64::try_from(index).unwrap_or(u64::MAX);
                reveals.push(ScheduledReveal {
                    element: item,
                    delay_ms: position.saturating_mul(self.config.stagger_ms),
                });
            } else {
                document.set_style(&item, "display", Some("none"));
            }
        }

        tracing::debug!(filter, shown = reveals.len(), "Applied portfolio filter");
        self.active = filter.to_string();
        reveals
    }

    /// Completes a scheduled reveal.
    pub fn reveal(&self, document: &mut dyn Document, element: &ElementId) {
        document.set_class(element, &self.config.revealed_class, true);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::surface::MemoryDocument;
    use crate::test_utils::home_document;

    fn display(document: &MemoryDocument, id: &str) -> Option<String> {
        document.element(id).unwrap().style("display").map(str::to_string)
    }

    #[fixture]
    fn filter() -> PortfolioFilter {
        PortfolioFilter::new(FilterConfig::default())
    }

    #[rstest]
    fn apply_shows_only_matching_items(mut filter: PortfolioFilter) {
        let mut document = home_document();

        let reveals = filter.apply(&mut document, "branding");

        assert_that!(display(&document, "project1"), none());
        assert_that!(display(&document, "project2"), some(eq("none")));
        assert_that!(display(&document, "project3"), some(eq("none")));
        assert_that!(display(&document, "project5"), none());
        assert_that!(
            reveals,
            elements_are![
                eq(&ScheduledReveal { element: ElementId::from("project1"), delay_ms: 0 }),
                eq(&ScheduledReveal { element: ElementId::from("project5"), delay_ms: 180 })
            ]
        );
        assert_that!(filter.active(), eq("branding"));
    }

    #[rstest]
    fn apply_marks_only_the_chosen_button_active(mut filter: PortfolioFilter) {
        let mut document = home_document();

        filter.apply(&mut document, "motion");

        assert_that!(document.has_class(&ElementId::from("filterMotion"), "active"), eq(true));
        assert_that!(document.has_class(&ElementId::from("filterAll"), "active"), eq(false));
        assert_that!(document.has_class(&ElementId::from("filterBranding"), "active"), eq(false));
    }

    #[rstest]
    fn apply_uses_the_configured_active_class() {
        let mut document = home_document();
        let mut filter =
            PortfolioFilter::new(FilterConfig::default()).with_active_class("is-current");

        filter.apply(&mut document, "motion");

        assert_that!(document.has_class(&ElementId::from("filterMotion"), "is-current"), eq(true));
        assert_that!(document.has_class(&ElementId::from("filterMotion"), "active"), eq(false));
    }

    #[rstest]
    fn apply_all_shows_everything_after_narrowing(mut filter: PortfolioFilter) {
        let mut document = home_document();
        filter.apply(&mut document, "motion");

        let reveals = filter.apply(&mut document, "all");

        assert_that!(
            reveals.iter().map(|r| r.delay_ms).collect::<Vec<_>>(),
            elements_are![eq(&0), eq(&60), eq(&120), eq(&180)]
        );
        for id in ["project1", "project2", "project3", "project5"] {
            assert_that!(display(&document, id), none());
        }
    }

    #[rstest]
    fn shown_items_are_revealed_after_reveal(mut filter: PortfolioFilter) {
        let mut document = home_document();
        let item = ElementId::from("project3");

        let reveals = filter.apply(&mut document, "motion");
        assert_that!(document.has_class(&item, "revealed"), eq(false));

        for reveal in &reveals {
            filter.reveal(&mut document, &reveal.element);
        }

        assert_that!(document.has_class(&item, "revealed"), eq(true));
        assert_that!(reveals, len(eq(1)));
    }

    #[rstest]
    fn button_value_only_for_filter_buttons(filter: PortfolioFilter) {
        let document = home_document();

        assert_that!(
            filter.button_value(&document, &ElementId::from("filterMotion")),
            some(eq("motion"))
        );
        assert_that!(filter.button_value(&document, &ElementId::from("project1")), none());
    }
}
