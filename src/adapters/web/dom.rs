use crate::domain::ports::{
    Attributes, ClassToggle, Document, Notifier, Resettable, ScrollTarget, StyleSink, TextField,
};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, NodeList,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

/// The live document.
#[derive(Clone)]
pub struct BrowserPage {
    document: web_sys::Document,
}

impl BrowserPage {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(e) => {
                tracing::warn!(selector, "query failed: {:?}", e);
                Vec::new()
            }
        }
    }
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl Document for BrowserPage {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn elements_by_class(&self, class: &str) -> Vec<Element> {
        self.query_all(&format!(".{}", class))
    }

    fn forms(&self) -> Vec<Element> {
        self.query_all("form")
    }

    fn fragment_links(&self) -> Vec<Element> {
        self.query_all("a[href^=\"#\"]")
    }

    fn body_text(&self) -> String {
        self.document
            .body()
            .map(|body| body.inner_text())
            .unwrap_or_default()
    }
}

impl TextField for Element {
    fn value(&self) -> String {
        if let Some(input) = self.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = self.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            self.get_attribute("value").unwrap_or_default()
        }
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = self.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else if let Err(e) = self.set_attribute("value", value) {
            tracing::warn!("value update failed: {:?}", e);
        }
    }
}

impl ClassToggle for Element {
    fn set_class(&self, class: &str, enabled: bool) {
        if let Err(e) = self.class_list().toggle_with_force(class, enabled) {
            tracing::warn!(class, "class toggle failed: {:?}", e);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}

impl Resettable for Element {
    fn reset(&self) {
        if let Some(form) = self.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }
}

impl ScrollTarget for Element {
    fn scroll_into_view_smooth(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

impl StyleSink for Element {
    fn set_style(&self, property: &str, value: &str) {
        let Some(element) = self.dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(e) = element.style().set_property(property, value) {
            tracing::warn!(property, "style update failed: {:?}", e);
        }
    }
}

impl Attributes for Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }
}

/// `window.alert`.
pub struct BrowserAlert {
    window: Window,
}

impl BrowserAlert {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Notifier for BrowserAlert {
    fn notify(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            tracing::warn!("alert failed: {:?}", e);
        }
    }
}
