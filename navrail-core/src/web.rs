//! Browser binding of the element contracts over `web-sys`.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, console};

use crate::dom::{
    ContentElement, LABEL_DATA_KEY, MAIN_CONTENT_ID, NAV_ITEM_CLASS,
    NavItemElement, SIDEBAR_ID, SidebarElement, SidebarTargets,
};
use crate::errors::ToggleError;
use crate::metrics::SidebarMetrics;
use crate::mode::SidebarMode;
use crate::toggle::toggle_by_width;

pub struct WebSidebar(HtmlElement);

impl SidebarElement for WebSidebar {
    fn width(&self) -> String {
        self.0
            .style()
            .get_property_value("width")
            .unwrap_or_default()
    }

    fn set_width(&mut self, width: &str) {
        if let Err(err) = self.0.style().set_property("width", width) {
            console::error_1(
                &format!("failed to set sidebar width: {err:?}").into(),
            );
        }
    }
}

pub struct WebContent(HtmlElement);

impl ContentElement for WebContent {
    fn margin_left(&self) -> String {
        self.0
            .style()
            .get_property_value("margin-left")
            .unwrap_or_default()
    }

    fn set_margin_left(&mut self, margin: &str) {
        if let Err(err) = self.0.style().set_property("margin-left", margin) {
            console::error_1(
                &format!("failed to set content margin: {err:?}").into(),
            );
        }
    }
}

pub struct WebNavItem(HtmlElement);

impl NavItemElement for WebNavItem {
    fn icon_class(&self) -> Option<String> {
        self.0.first_element_child().map(|icon| icon.class_name())
    }

    fn label(&self) -> Option<String> {
        self.0.dataset().get(LABEL_DATA_KEY)
    }

    fn set_inner_html(&mut self, markup: &str) {
        self.0.set_inner_html(markup);
    }
}

/// Sidebar collaborators resolved from a live document.
pub struct WebDocument {
    sidebar: WebSidebar,
    content: WebContent,
    items: Vec<WebNavItem>,
}

impl WebDocument {
    /// Look up `#sidebar`, `#main-content` and every `.sidebar-item`.
    pub fn resolve(document: &Document) -> Result<Self, ToggleError> {
        let sidebar = WebSidebar(element_by_id(document, SIDEBAR_ID)?);
        let content = WebContent(element_by_id(document, MAIN_CONTENT_ID)?);

        let nodes = document
            .query_selector_all(&format!(".{NAV_ITEM_CLASS}"))
            .map_err(|err| ToggleError::ItemQuery {
                reason: format!("{err:?}"),
            })?;

        let items = (0..nodes.length())
            .map(|index| {
                let position = index as usize;
                nodes
                    .item(index)
                    .and_then(|node| node.dyn_into::<HtmlElement>().ok())
                    .map(WebNavItem)
                    .ok_or(ToggleError::UnsupportedItem { index: position })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            sidebar,
            content,
            items,
        })
    }

    pub fn targets(
        &mut self,
    ) -> SidebarTargets<'_, WebSidebar, WebContent, WebNavItem> {
        SidebarTargets::new(
            &mut self.sidebar,
            &mut self.content,
            &mut self.items,
        )
    }
}

fn element_by_id(
    document: &Document,
    id: &str,
) -> Result<HtmlElement, ToggleError> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| ToggleError::MissingElement { id: id.to_string() })
}

/// Resolve the document and toggle by the sidebar's rendered width.
pub fn toggle_document(
    document: &Document,
    metrics: &SidebarMetrics,
) -> Result<SidebarMode, ToggleError> {
    let mut resolved = WebDocument::resolve(document)?;
    toggle_by_width(resolved.targets(), metrics)
}

/// Toggle the sidebar of the current window's document.
#[wasm_bindgen(js_name = toggleSidebar)]
pub fn toggle_sidebar() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("missing document"))?;

    toggle_document(&document, &SidebarMetrics::default())
        .map(|_| ())
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Toggle the sidebar whenever the element with `trigger_id` is clicked.
pub fn install_toggle(
    document: &Document,
    trigger_id: &str,
    metrics: SidebarMetrics,
) -> Result<(), JsValue> {
    let trigger = element_by_id(document, trigger_id)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let document = document.clone();
    let onclick = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        if let Err(err) = toggle_document(&document, &metrics) {
            console::error_1(&format!("sidebar toggle failed: {err}").into());
        }
    });
    trigger.set_onclick(Some(onclick.as_ref().unchecked_ref()));
    onclick.forget();

    Ok(())
}
