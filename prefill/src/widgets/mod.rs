//! Widget queue for template-layer accessors.
//!
//! Widgets are snippets of markup registered for a named location within a
//! zone of the rendered site. The queue answers the accessor questions a
//! template layer asks (how many, any at all, give me the markup) without
//! depending on a templating engine.

use serde::{Deserialize, Serialize};

/// Which half of the application a widget targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetZone {
    /// Public-facing pages.
    Frontend,
    /// Administrative backend pages.
    Backend,
}

/// A registered widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    location: String,
    zone: WidgetZone,
    priority: i32,
    content: String,
}

impl Widget {
    /// Creates a widget with priority 0.
    pub fn new(location: impl Into<String>, zone: WidgetZone, content: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            zone,
            priority: 0,
            content: content.into(),
        }
    }

    /// Sets the render priority; lower values render first.
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the widget's location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the widget's zone.
    #[must_use]
    pub const fn zone(&self) -> WidgetZone {
        self.zone
    }

    /// Returns the widget's markup.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    fn matches(&self, location: &str, zone: WidgetZone) -> bool {
        self.location == location && self.zone == zone
    }
}

/// Ordered collection of registered widgets.
#[derive(Debug, Default, Clone)]
pub struct WidgetQueue {
    widgets: Vec<Widget>,
}

impl WidgetQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a widget to the queue.
    pub fn register(&mut self, widget: Widget) {
        self.widgets.push(widget);
    }

    /// Returns every registered widget in registration order.
    #[must_use]
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Returns the number of widgets queued for a location and zone.
    #[must_use]
    pub fn count(&self, location: &str, zone: WidgetZone) -> usize {
        self.widgets
            .iter()
            .filter(|widget| widget.matches(location, zone))
            .count()
    }

    /// Returns `true` when any widget is queued for the location and zone.
    #[must_use]
    pub fn has(&self, location: &str, zone: WidgetZone) -> bool {
        self.widgets
            .iter()
            .any(|widget| widget.matches(location, zone))
    }

    /// Renders the widgets queued for a location and zone.
    ///
    /// Widgets render in ascending priority order; registration order breaks
    /// ties. Each widget's markup is wrapped in a holder element, and an
    /// empty selection renders an empty string.
    #[must_use]
    pub fn render(&self, location: &str, zone: WidgetZone) -> String {
        let mut selected: Vec<&Widget> = self
            .widgets
            .iter()
            .filter(|widget| widget.matches(location, zone))
            .collect();
        selected.sort_by_key(|widget| widget.priority);

        selected
            .iter()
            .map(|widget| format!("<div class=\"widget-holder\">{}</div>", widget.content))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
