//! Page-ready dispatch: decide which features the current page has, and run their handlers.
//!
//! Adapters call [`detect_features`] once the document is ready and attach listeners for
//! each returned [`Wiring`]. Event callbacks then go through [`PageController`].

use crate::config::SiteConfig;
use crate::core::map::{init_map, MapSummary};
use crate::core::reveal::ScrollReveal;
use crate::core::{
    anchors, donation, forms, search, subscribe, Attributes, ClassToggle, Disposition, Document,
    EventKind, Feature, Feedback, MapWidget, Notice, Notifier, Resettable, ScrollTarget,
    StyleSink, TextField,
};

/// A present feature together with the elements its listeners hang on.
#[derive(Debug, Clone, PartialEq)]
pub enum Wiring<E> {
    /// Runs once during the ready step; no listener.
    Map,
    Search { button: E, input: E },
    Subscribe { button: E, input: E },
    DonationAmounts { buttons: Vec<E> },
    Forms { forms: Vec<E> },
    SmoothScroll { links: Vec<E> },
    /// Listens for the window `load` event, then observes intersections.
    ScrollReveal,
}

impl<E> Wiring<E> {
    pub fn feature(&self) -> Feature {
        match self {
            Wiring::Map => Feature::Map,
            Wiring::Search { .. } => Feature::Search,
            Wiring::Subscribe { .. } => Feature::Subscribe,
            Wiring::DonationAmounts { .. } => Feature::DonationAmounts,
            Wiring::Forms { .. } => Feature::Forms,
            Wiring::SmoothScroll { .. } => Feature::SmoothScroll,
            Wiring::ScrollReveal => Feature::ScrollReveal,
        }
    }

    pub fn events(&self) -> &'static [EventKind] {
        match self {
            Wiring::Map => &[EventKind::Ready],
            Wiring::Search { .. } => &[EventKind::Click, EventKind::KeyPress],
            Wiring::Subscribe { .. }
            | Wiring::DonationAmounts { .. }
            | Wiring::SmoothScroll { .. } => &[EventKind::Click],
            Wiring::Forms { .. } => &[EventKind::Submit],
            Wiring::ScrollReveal => &[EventKind::Load, EventKind::Intersection],
        }
    }
}

/// Features whose anchor elements are missing are left out without touching the page.
pub fn detect_features<D: Document>(page: &D, config: &SiteConfig) -> Vec<Wiring<D::Element>> {
    let mut wirings = Vec::new();

    if page.element_by_id(&config.map.container_id).is_some() {
        wirings.push(Wiring::Map);
    }

    if let (Some(button), Some(input)) = (
        page.element_by_id(&config.search.button_id),
        page.element_by_id(&config.search.input_id),
    ) {
        wirings.push(Wiring::Search { button, input });
    }

    if let (Some(button), Some(input)) = (
        page.element_by_id(&config.subscribe.button_id),
        page.element_by_id(&config.subscribe.input_id),
    ) {
        wirings.push(Wiring::Subscribe { button, input });
    }

    let buttons = page.elements_by_class(&config.donation.button_class);
    if !buttons.is_empty() {
        wirings.push(Wiring::DonationAmounts { buttons });
    }

    let forms = page.forms();
    if !forms.is_empty() {
        wirings.push(Wiring::Forms { forms });
    }

    let links = page.fragment_links();
    if !links.is_empty() {
        wirings.push(Wiring::SmoothScroll { links });
    }

    // The animated set is only known after `load`; an empty set observes nothing.
    wirings.push(Wiring::ScrollReveal);

    for wiring in &wirings {
        tracing::debug!(feature = ?wiring.feature(), events = ?wiring.events(), "feature attached");
    }
    wirings
}

/// Per-event entry points shared by every adapter.
pub struct PageController<N: Notifier> {
    config: SiteConfig,
    notifier: N,
}

impl<N: Notifier> PageController<N> {
    pub fn new(config: SiteConfig, notifier: N) -> Self {
        Self { config, notifier }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    fn feedback(&self) -> Feedback<'_, N> {
        Feedback::new(&self.notifier, &self.config.messages)
    }

    /// Map failures (library not loaded, container rejected) are logged, never surfaced.
    pub fn init_map<W: MapWidget>(&self, widget: &mut W) -> Option<MapSummary> {
        match init_map(widget, &self.config.map) {
            Ok(summary) => Some(summary),
            Err(e) => {
                tracing::warn!("map initialization failed: {}", e);
                None
            }
        }
    }

    pub fn on_search<D, F>(&self, page: &D, input: &F) -> Notice
    where
        D: Document,
        F: TextField,
    {
        search::handle_search(page, input, &self.feedback())
    }

    /// `keypress` on the search field; only the trigger key searches.
    pub fn on_search_key<D, F>(&self, page: &D, input: &F, key: &str) -> Option<Notice>
    where
        D: Document,
        F: TextField,
    {
        (key == self.config.search.trigger_key).then(|| self.on_search(page, input))
    }

    pub fn on_subscribe<F: TextField>(&self, input: &F) -> Notice {
        subscribe::handle_subscribe(input, &self.feedback())
    }

    pub fn on_amount_click<B: ClassToggle>(&self, buttons: &[B], clicked: usize) -> bool {
        donation::select_amount(buttons, clicked, &self.config.donation.selected_class)
    }

    pub fn on_submit<F: Resettable>(&self, form: &F) -> Disposition {
        forms::handle_submit(form, &self.feedback())
    }

    pub fn on_anchor_click<D, L>(&self, page: &D, link: &L) -> Disposition
    where
        D: Document,
        D::Element: ScrollTarget,
        L: Attributes,
    {
        let Some(href) = link.attribute("href") else {
            return Disposition::Default;
        };
        anchors::handle_anchor_click(page, &href, &self.config.anchors.smooth_targets)
    }

    pub fn on_load<D>(&self, page: &D) -> ScrollReveal<D::Element>
    where
        D: Document,
        D::Element: StyleSink + PartialEq,
    {
        ScrollReveal::collect(page, &self.config.reveal)
    }
}
