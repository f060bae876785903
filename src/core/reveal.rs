use crate::config::RevealConfig;
use crate::core::{Document, StyleSink};
use crate::domain::model::RevealStyle;

/// One observer callback entry for a watched element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// One-way hidden -> revealed switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns `true` only on the call that trips the latch.
    ///
    /// The observer already filters by threshold, so any intersecting entry trips it. Browsers
    /// may report a ratio slightly under the threshold for the crossing entry.
    pub fn observe(&mut self, sample: IntersectionSample) -> bool {
        if self.revealed || !sample.is_intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

pub fn apply_style<E: StyleSink>(element: &E, style: &RevealStyle) {
    element.set_style("opacity", &style.opacity);
    element.set_style("transform", &style.transform);
    if let Some(transition) = &style.transition {
        element.set_style("transition", transition);
    }
}

/// The animated element set, collected once the page has loaded.
pub struct ScrollReveal<E> {
    elements: Vec<(E, RevealLatch)>,
    config: RevealConfig,
}

impl<E: StyleSink + Clone + PartialEq> ScrollReveal<E> {
    /// Gathers every element carrying one of the configured classes, once each, and hides it.
    pub fn collect<D>(page: &D, config: &RevealConfig) -> Self
    where
        D: Document<Element = E>,
    {
        let mut elements: Vec<(E, RevealLatch)> = Vec::new();
        for class in &config.classes {
            for element in page.elements_by_class(class) {
                if !elements.iter().any(|(seen, _)| *seen == element) {
                    elements.push((element, RevealLatch::default()));
                }
            }
        }

        let hidden = config.hidden_style();
        for (element, _) in &elements {
            apply_style(element, &hidden);
        }
        tracing::debug!(count = elements.len(), "scroll reveal prepared");

        Self {
            elements,
            config: config.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> impl Iterator<Item = &E> {
        self.elements.iter().map(|(element, _)| element)
    }

    pub fn position(&self, element: &E) -> Option<usize> {
        self.elements.iter().position(|(e, _)| e == element)
    }

    /// Feeds one observer entry. Returns `true` when the element was revealed by this call.
    pub fn on_intersection(&mut self, index: usize, sample: IntersectionSample) -> bool {
        let Some((element, latch)) = self.elements.get_mut(index) else {
            return false;
        };

        if !latch.observe(sample) {
            return false;
        }
        apply_style(element, &self.config.revealed_style());
        true
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.elements
            .get(index)
            .is_some_and(|(_, latch)| latch.is_revealed())
    }
}
