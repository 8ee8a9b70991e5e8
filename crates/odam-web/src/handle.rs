use crate::events::{self, SharedStats};
use crate::{modal, render};
use chrono::Utc;
use odam_core::{Vote, WidgetConfig};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Handle given to page scripts. It shares the one `StatsSystem` owned by the
/// wiring in `lib.rs`; it does not create or look up its own.
#[wasm_bindgen]
pub struct StatsWidget {
    system: SharedStats,
    document: web::Document,
    config: WidgetConfig,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}

impl StatsWidget {
    pub(crate) fn new(system: SharedStats, document: web::Document, config: WidgetConfig) -> Self {
        Self {
            system,
            document,
            config,
        }
    }
}

#[wasm_bindgen]
impl StatsWidget {
    #[wasm_bindgen(js_name = getStats)]
    pub fn get_stats(&self) -> Result<JsValue, JsValue> {
        to_js(self.system.borrow().stats())
    }

    #[wasm_bindgen(js_name = getRating)]
    pub fn get_rating(&self) -> Result<JsValue, JsValue> {
        to_js(self.system.borrow().rating())
    }

    #[wasm_bindgen(js_name = engagementScore)]
    pub fn engagement_score(&self) -> u8 {
        odam_core::engagement_score(self.system.borrow().stats())
    }

    #[wasm_bindgen(js_name = resetStats)]
    pub fn reset_stats(&self) {
        self.system.borrow_mut().reset_stats();
        let (stats, rating) = {
            let system = self.system.borrow();
            (system.stats_view(), system.rating_view())
        };
        render::render_all(&self.document, &stats, &rating);
    }

    #[wasm_bindgen(js_name = exportData)]
    pub fn export_data(&self) -> Result<JsValue, JsValue> {
        to_js(&self.system.borrow().export_data(Utc::now()))
    }

    /// `"like"` or `"dislike"`; anything else is ignored.
    pub fn rate(&self, vote: &str) {
        let vote = match vote {
            "like" => Vote::Like,
            "dislike" => Vote::Dislike,
            other => {
                log::warn!("[widget] unknown vote {:?}", other);
                return;
            }
        };
        events::cast_vote(&self.document, &self.config, &self.system, vote);
    }

    #[wasm_bindgen(js_name = openFeedbackModal)]
    pub fn open_feedback_modal(&self) {
        modal::open_feedback(&self.document);
    }

    #[wasm_bindgen(js_name = closeFeedbackModal)]
    pub fn close_feedback_modal(&self) {
        modal::close_feedback(&self.document);
    }
}
