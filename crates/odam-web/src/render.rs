//! Display renderer: copies the current views into the page. Missing elements
//! are skipped.

use crate::dom;
use odam_core::{RatingView, StatsView};
use web_sys as web;

#[inline]
fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn render_stats(document: &web::Document, view: &StatsView) {
    set_text(document, "stat-visits", &view.visits);
    set_text(document, "stat-time", &view.time);
    set_text(document, "stat-engagement", &view.engagement);
    set_text(document, "stat-projects", &view.projects);
}

pub fn render_rating(document: &web::Document, view: &RatingView) {
    for btn in dom::query_all_in_document(document, ".like-btn") {
        btn.set_class_name(&view.like_class);
    }
    for btn in dom::query_all_in_document(document, ".dislike-btn") {
        btn.set_class_name(&view.dislike_class);
    }
    for result in dom::query_all_in_document(document, ".rating-result") {
        result.set_text_content(Some(&view.summary));
    }
}

pub fn render_all(document: &web::Document, stats: &StatsView, rating: &RatingView) {
    render_stats(document, stats);
    render_rating(document, rating);
}
