//! In-memory page and map widget.
//!
//! Lets the controller run outside a browser: the preview CLI records map plans with it and
//! the integration tests drive whole pages through [`HeadlessSession`].

use crate::config::SiteConfig;
use crate::core::controller::{detect_features, PageController, Wiring};
use crate::core::map::MapSummary;
use crate::core::reveal::{IntersectionSample, ScrollReveal};
use crate::domain::model::{Disposition, LatLng, PolygonStyle, TileLayerSpec};
use crate::domain::ports::{
    Attributes, ClassToggle, Document, MapWidget, Notifier, Resettable, ScrollTarget, StyleSink,
    TextField,
};
use crate::utils::error::{PageError, Result};
use serde::Serialize;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Description of an element to insert into a [`HeadlessPage`].
#[derive(Debug, Clone, Default)]
pub struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    value: String,
    default_value: String,
    text: String,
    style: BTreeMap<String, String>,
    form: Option<usize>,
}

impl Node {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn href(self, href: &str) -> Self {
        self.attr("href", href)
    }

    /// Default value of a field; the current value starts out equal to it.
    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = value.to_string();
        self.value = value.to_string();
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Makes this node a field of `form`.
    pub fn in_form(mut self, form: &NodeRef) -> Self {
        self.form = Some(form.index);
        self
    }
}

#[derive(Debug, Default)]
struct Dom {
    nodes: Vec<Node>,
    scrolled_to: Vec<String>,
}

/// Handle to a node of a [`HeadlessPage`]. Equal handles point at the same node.
#[derive(Debug, Clone)]
pub struct NodeRef {
    dom: Rc<RefCell<Dom>>,
    index: usize,
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.dom, &other.dom) && self.index == other.index
    }
}

impl NodeRef {
    fn with<T>(&self, f: impl FnOnce(&Node) -> T) -> T {
        f(&self.dom.borrow().nodes[self.index])
    }

    fn with_mut<T>(&self, f: impl FnOnce(&mut Node) -> T) -> T {
        f(&mut self.dom.borrow_mut().nodes[self.index])
    }

    pub fn tag(&self) -> String {
        self.with(|n| n.tag.clone())
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.with(|n| n.style.get(property).cloned())
    }
}

impl TextField for NodeRef {
    fn value(&self) -> String {
        self.with(|n| n.value.clone())
    }

    fn set_value(&self, value: &str) {
        self.with_mut(|n| n.value = value.to_string());
    }
}

impl ClassToggle for NodeRef {
    fn set_class(&self, class: &str, enabled: bool) {
        self.with_mut(|n| {
            n.classes.retain(|c| c != class);
            if enabled {
                n.classes.push(class.to_string());
            }
        });
    }

    fn has_class(&self, class: &str) -> bool {
        self.with(|n| n.classes.iter().any(|c| c == class))
    }
}

impl Resettable for NodeRef {
    fn reset(&self) {
        let form = self.index;
        let mut dom = self.dom.borrow_mut();
        for node in dom.nodes.iter_mut().filter(|n| n.form == Some(form)) {
            node.value = node.default_value.clone();
        }
    }
}

impl ScrollTarget for NodeRef {
    fn scroll_into_view_smooth(&self) {
        let label = self.with(|n| n.id.clone().unwrap_or_else(|| n.tag.clone()));
        self.dom.borrow_mut().scrolled_to.push(label);
    }
}

impl StyleSink for NodeRef {
    fn set_style(&self, property: &str, value: &str) {
        self.with_mut(|n| {
            n.style.insert(property.to_string(), value.to_string());
        });
    }
}

impl Attributes for NodeRef {
    fn attribute(&self, name: &str) -> Option<String> {
        self.with(|n| match name {
            "id" => n.id.clone(),
            "class" => Some(n.classes.join(" ")),
            _ => n.attributes.get(name).cloned(),
        })
    }
}

/// A flat document: nodes in insertion order, body text is every node's text.
#[derive(Debug, Clone, Default)]
pub struct HeadlessPage {
    dom: Rc<RefCell<Dom>>,
}

impl HeadlessPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, node: Node) -> NodeRef {
        let mut dom = self.dom.borrow_mut();
        dom.nodes.push(node);
        NodeRef {
            dom: Rc::clone(&self.dom),
            index: dom.nodes.len() - 1,
        }
    }

    /// Element ids passed to smooth scrolls, oldest first.
    pub fn scrolled_to(&self) -> Vec<String> {
        self.dom.borrow().scrolled_to.clone()
    }

    fn select(&self, predicate: impl Fn(&Node) -> bool) -> Vec<NodeRef> {
        let dom = self.dom.borrow();
        dom.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| predicate(node))
            .map(|(index, _)| NodeRef {
                dom: Rc::clone(&self.dom),
                index,
            })
            .collect()
    }
}

impl Document for HeadlessPage {
    type Element = NodeRef;

    fn element_by_id(&self, id: &str) -> Option<NodeRef> {
        self.select(|n| n.id.as_deref() == Some(id)).into_iter().next()
    }

    fn elements_by_class(&self, class: &str) -> Vec<NodeRef> {
        self.select(|n| n.classes.iter().any(|c| c == class))
    }

    fn forms(&self) -> Vec<NodeRef> {
        self.select(|n| n.tag == "form")
    }

    fn fragment_links(&self) -> Vec<NodeRef> {
        self.select(|n| {
            n.tag == "a"
                && n.attributes
                    .get("href")
                    .is_some_and(|href| href.starts_with('#'))
        })
    }

    fn body_text(&self) -> String {
        let dom = self.dom.borrow();
        dom.nodes
            .iter()
            .filter(|n| !n.text.is_empty())
            .map(|n| n.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Keeps every notification instead of showing it.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    log: Rc<RefCell<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.log.borrow_mut().push(message.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum MapCall {
    View {
        container: String,
        center: LatLng,
        zoom: u8,
    },
    TileLayer {
        url_template: String,
        attribution: String,
        max_zoom: u8,
    },
    Polygon {
        layer: usize,
        points: Vec<LatLng>,
        style: PolygonStyle,
    },
    Marker {
        layer: usize,
        at: LatLng,
    },
    Popup {
        layer: usize,
        html: String,
    },
    FitBounds {
        points: Vec<LatLng>,
    },
}

/// Map widget that writes down what it was asked to draw.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordingMap {
    calls: Vec<MapCall>,
    #[serde(skip)]
    unavailable: bool,
    #[serde(skip)]
    next_layer: usize,
}

impl RecordingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A widget whose library never loaded: every call fails.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> &[MapCall] {
        &self.calls
    }

    pub fn markers(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, MapCall::Marker { .. }))
            .count()
    }

    pub fn polygons(&self) -> Vec<&[LatLng]> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                MapCall::Polygon { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }

    pub fn popup_for(&self, layer: usize) -> Option<&str> {
        self.calls.iter().find_map(|c| match c {
            MapCall::Popup { layer: l, html } if *l == layer => Some(html.as_str()),
            _ => None,
        })
    }

    fn record(&mut self, call: MapCall) -> Result<()> {
        if self.unavailable {
            return Err(PageError::widget("map library is not loaded"));
        }
        self.calls.push(call);
        Ok(())
    }

    fn new_layer(&mut self) -> usize {
        self.next_layer += 1;
        self.next_layer
    }
}

impl MapWidget for RecordingMap {
    type Layer = usize;

    fn create_view(&mut self, container_id: &str, center: LatLng, zoom: u8) -> Result<()> {
        self.record(MapCall::View {
            container: container_id.to_string(),
            center,
            zoom,
        })
    }

    fn add_tile_layer(&mut self, tiles: &TileLayerSpec) -> Result<()> {
        self.record(MapCall::TileLayer {
            url_template: tiles.url_template.clone(),
            attribution: tiles.attribution.clone(),
            max_zoom: tiles.max_zoom,
        })
    }

    fn add_polygon(&mut self, points: &[LatLng], style: &PolygonStyle) -> Result<usize> {
        let layer = self.new_layer();
        self.record(MapCall::Polygon {
            layer,
            points: points.to_vec(),
            style: style.clone(),
        })?;
        Ok(layer)
    }

    fn add_marker(&mut self, at: LatLng) -> Result<usize> {
        let layer = self.new_layer();
        self.record(MapCall::Marker { layer, at })?;
        Ok(layer)
    }

    fn bind_popup(&mut self, layer: &usize, html: &str) -> Result<()> {
        self.record(MapCall::Popup {
            layer: *layer,
            html: html.to_string(),
        })
    }

    fn fit_bounds(&mut self, points: &[LatLng]) -> Result<()> {
        self.record(MapCall::FitBounds {
            points: points.to_vec(),
        })
    }
}

/// A page after its ready step, with listeners attached the same way the browser adapter does.
pub struct HeadlessSession {
    page: HeadlessPage,
    notifier: RecordingNotifier,
    controller: PageController<RecordingNotifier>,
    wirings: Vec<Wiring<NodeRef>>,
    map: Option<RecordingMap>,
    map_summary: Option<MapSummary>,
    reveal: Option<ScrollReveal<NodeRef>>,
    /// Last threshold side reported per watched element.
    crossed: Vec<bool>,
}

impl HeadlessSession {
    pub fn ready(page: HeadlessPage, config: SiteConfig) -> Self {
        Self::ready_with_map(page, config, RecordingMap::new())
    }

    pub fn ready_with_map(page: HeadlessPage, config: SiteConfig, mut widget: RecordingMap) -> Self {
        let notifier = RecordingNotifier::default();
        let controller = PageController::new(config, notifier.clone());
        let wirings = detect_features(&page, controller.config());

        let (map, map_summary) = if wirings.iter().any(|w| matches!(w, Wiring::Map)) {
            let summary = controller.init_map(&mut widget);
            (Some(widget), summary)
        } else {
            (None, None)
        };

        Self {
            page,
            notifier,
            controller,
            wirings,
            map,
            map_summary,
            reveal: None,
            crossed: Vec::new(),
        }
    }

    pub fn page(&self) -> &HeadlessPage {
        &self.page
    }

    pub fn wirings(&self) -> &[Wiring<NodeRef>] {
        &self.wirings
    }

    pub fn notices(&self) -> Vec<String> {
        self.notifier.messages()
    }

    pub fn map(&self) -> Option<&RecordingMap> {
        self.map.as_ref()
    }

    pub fn map_summary(&self) -> Option<MapSummary> {
        self.map_summary
    }

    pub fn click(&self, target: &NodeRef) -> Disposition {
        let mut disposition = Disposition::Default;
        for wiring in &self.wirings {
            let outcome = match wiring {
                Wiring::Search { button, input } if button == target => {
                    self.controller.on_search(&self.page, input);
                    Disposition::Default
                }
                Wiring::Subscribe { button, input } if button == target => {
                    self.controller.on_subscribe(input);
                    Disposition::Default
                }
                Wiring::DonationAmounts { buttons } => {
                    if let Some(index) = buttons.iter().position(|b| b == target) {
                        self.controller.on_amount_click(buttons, index);
                    }
                    Disposition::Default
                }
                Wiring::SmoothScroll { links } if links.contains(target) => {
                    self.controller.on_anchor_click(&self.page, target)
                }
                _ => Disposition::Default,
            };
            if outcome == Disposition::PreventDefault {
                disposition = outcome;
            }
        }
        disposition
    }

    pub fn key_press(&self, target: &NodeRef, key: &str) -> Disposition {
        for wiring in &self.wirings {
            if let Wiring::Search { input, .. } = wiring {
                if input == target {
                    self.controller.on_search_key(&self.page, input, key);
                }
            }
        }
        Disposition::Default
    }

    pub fn submit(&self, form: &NodeRef) -> Disposition {
        for wiring in &self.wirings {
            if let Wiring::Forms { forms } = wiring {
                if forms.contains(form) {
                    return self.controller.on_submit(form);
                }
            }
        }
        Disposition::Default
    }

    /// Window `load`: hides the animated set and starts observing it.
    pub fn load(&mut self) {
        if self.reveal.is_none() && self.wirings.iter().any(|w| matches!(w, Wiring::ScrollReveal)) {
            let reveal = self.controller.on_load(&self.page);
            self.crossed = vec![false; reveal.len()];
            self.reveal = Some(reveal);
        }
    }

    /// Reports `ratio` of `target` as visible inside the observer's root. Like the browser
    /// observer, an entry is delivered only when the ratio crosses the threshold. Returns `true`
    /// on reveal.
    pub fn intersect(&mut self, target: &NodeRef, ratio: f64) -> bool {
        let Some(reveal) = self.reveal.as_mut() else {
            return false;
        };
        let Some(index) = reveal.position(target) else {
            return false;
        };
        let above = ratio >= self.controller.config().reveal.threshold;
        if self.crossed.get(index) == Some(&above) {
            return false;
        }
        if let Some(side) = self.crossed.get_mut(index) {
            *side = above;
        }
        let sample = IntersectionSample {
            is_intersecting: ratio > 0.0,
            ratio,
        };
        reveal.on_intersection(index, sample)
    }

    pub fn observed(&self) -> usize {
        self.reveal.as_ref().map_or(0, |r| r.len())
    }
}
