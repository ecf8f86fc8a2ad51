// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for folio.
//!
//! This is the browser-facing API. The page pushes each completed query's
//! results and renders whatever state comes back; result links forward their
//! click events to `activate`, which decides between in-app navigation and
//! the browser's default.
//!
//! # Callback API
//!
//! ```js
//! const results = new FolioResults({ priority_count: 5 });
//! results.onResultSelected((result) => router.navigate(result.path));
//!
//! worker.onmessage = ({ data }) => render(results.push(data));
//! link.onclick = (event) => results.activate(event, result);
//! ```

use crate::config::GroupingOptions;
use crate::selection::{PointerActivation, ResultLink};
use crate::types::{SearchResult, SearchResults};
use crate::view::ResultsView;
use js_sys::Function;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// WASM-accessible grouped results view with `resultSelected` callbacks.
#[wasm_bindgen]
pub struct FolioResults {
    view: ResultsView,
    link: ResultLink,
}

#[wasm_bindgen]
impl FolioResults {
    /// Create a view. `options` may set `priority_count` and `default_area`.
    #[wasm_bindgen(constructor)]
    pub fn new(options: Option<JsValue>) -> Result<FolioResults, JsValue> {
        let options: GroupingOptions = match options {
            Some(value) if !value.is_undefined() && !value.is_null() => {
                from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            _ => GroupingOptions::default(),
        };
        options
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(FolioResults {
            view: ResultsView::new(options),
            link: ResultLink::new(),
        })
    }

    /// Replace the view with a new `{ query, results }` value.
    ///
    /// Returns the new state: `{ state: "notSearched" }`,
    /// `{ state: "noResults", query }` or `{ state: "grouped", query, areas }`.
    #[wasm_bindgen]
    pub fn push(&mut self, results: JsValue) -> Result<JsValue, JsValue> {
        let results: SearchResults =
            from_value(results).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let state = self.view.push(&results);
        to_value(state).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current state without pushing anything.
    #[wasm_bindgen]
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_value(self.view.state()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Register a `resultSelected` callback. Returns nothing; callbacks live
    /// as long as this object.
    #[wasm_bindgen(js_name = "onResultSelected")]
    pub fn on_result_selected(&mut self, callback: Function) {
        self.link.on_result_selected(move |result: &SearchResult| {
            match to_value(result) {
                Ok(value) => {
                    if let Err(err) = callback.call1(&JsValue::NULL, &value) {
                        tracing::warn!(?err, "resultSelected callback threw");
                    }
                }
                Err(err) => tracing::warn!(%err, "failed to serialize selected result"),
            }
        });
    }

    /// Handle a click on a result link.
    ///
    /// `event` only needs `button`, `ctrlKey` and `metaKey`, so a DOM
    /// `MouseEvent` works as-is. Returns true when `resultSelected` fired.
    #[wasm_bindgen]
    pub fn activate(&mut self, event: JsValue, result: JsValue) -> Result<bool, JsValue> {
        let event = pointer_activation(&event)?;
        let result: SearchResult =
            from_value(result).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self.link.activate(event, &result))
    }
}

/// Read the gate's fields off a JS event object.
///
/// DOM events are not plain objects, so serde can't see their getters;
/// read the properties directly instead.
fn pointer_activation(event: &JsValue) -> Result<PointerActivation, JsValue> {
    let get = |name: &str| js_sys::Reflect::get(event, &JsValue::from_str(name));
    let button = get("button")?.as_f64().unwrap_or(0.0) as i16;
    let ctrl_key = get("ctrlKey")?.as_bool().unwrap_or(false);
    let meta_key = get("metaKey")?.as_bool().unwrap_or(false);
    Ok(PointerActivation::new(button, ctrl_key, meta_key))
}
