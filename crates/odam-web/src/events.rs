//! Browser signals feeding the stats widget.
//!
//! Every handler gets the shared `StatsSystem` injected; the borrow is held
//! only for the state change, then released before rendering or touching
//! modals (which can dispatch further events synchronously).

use crate::constants::*;
use crate::storage::LocalStorage;
use crate::{dom, modal, observe, render};
use chrono::{Local, Utc};
use odam_core::constants::STAT_PRESS_RESET_MS;
use odam_core::{comment_length, ScrollSample, StatTile, StatsSystem, Vote, Watched, WidgetConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedStats = Rc<RefCell<StatsSystem<LocalStorage>>>;

fn render_stats_of(document: &web::Document, system: &SharedStats) {
    let view = system.borrow().stats_view();
    render::render_stats(document, &view);
}

fn render_rating_of(document: &web::Document, system: &SharedStats) {
    let view = system.borrow().rating_view();
    render::render_rating(document, &view);
}

pub fn track_visit(document: &web::Document, system: &SharedStats) {
    let changed = system
        .borrow_mut()
        .record_visit(Local::now().date_naive());
    if changed {
        render_stats_of(document, system);
    }
}

fn scroll_sample(window: &web::Window, document: &web::Document) -> ScrollSample {
    let document_height = document
        .document_element()
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0);
    ScrollSample {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        document_height,
        viewport_height: window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0),
    }
}

pub fn wire_session_tracking(
    window: &web::Window,
    document: &web::Document,
    config: &WidgetConfig,
    system: &SharedStats,
) {
    // Unload is terminal; the tracker itself ignores the second signal.
    for event in ["beforeunload", "pagehide"] {
        let system = system.clone();
        dom::listen::<web::Event>(window, event, move |_| {
            system.borrow_mut().record_exit();
        });
    }

    {
        let system = system.clone();
        let doc = document.clone();
        let win = window.clone();
        dom::listen_passive(window, "scroll", move |_| {
            let sample = scroll_sample(&win, &doc);
            if system.borrow_mut().record_scroll(sample) {
                render_stats_of(&doc, &system);
            }
        });
    }

    {
        let system = system.clone();
        let doc = document.clone();
        let container = format!(".{}", config.container_class);
        dom::listen_passive(document, "click", move |ev| {
            let inside_widget = dom::event_element(&ev)
                .and_then(|el| dom::closest(&el, &container))
                .is_some();
            if system.borrow_mut().record_click(inside_widget) {
                render_stats_of(&doc, &system);
            }
        });
    }
}

pub fn wire_view_tracking(document: &web::Document, config: &WidgetConfig, system: &SharedStats) {
    if let Some(section) = document.get_element_by_id(config.projects_section_id) {
        let system = system.clone();
        let doc = document.clone();
        observe::watch_once(vec![section], config.projects_threshold, None, move |_, _| {
            if system.borrow_mut().record_view(Watched::ProjectsSection) {
                render_stats_of(&doc, &system);
            }
        });
    }

    let items = dom::query_all_in_document(document, config.service_item_selector);
    let system = system.clone();
    let doc = document.clone();
    observe::watch_once(items, config.service_threshold, None, move |index, _| {
        if system.borrow_mut().record_view(Watched::ServiceItem(index)) {
            render_stats_of(&doc, &system);
        }
    });
}

/// Casts a vote, re-renders and, for a dislike, opens the feedback prompt
/// after a short delay if the dislike still stands by then.
pub fn cast_vote(
    document: &web::Document,
    config: &WidgetConfig,
    system: &SharedStats,
    vote: Vote,
) {
    let outcome = system.borrow_mut().cast_vote(vote);
    render_rating_of(document, system);
    if outcome.prompt_feedback {
        let doc = document.clone();
        let system = system.clone();
        dom::set_timeout(config.dislike_prompt_delay_ms, move || {
            if system.borrow().rating().user_vote == Some(Vote::Dislike) {
                modal::open_feedback(&doc);
            }
        });
    }
}

fn press_effect(tile: &web::Element) {
    dom::set_style(tile, "transform", "scale(0.95)");
    let tile = tile.clone();
    dom::set_timeout(STAT_PRESS_RESET_MS, move || {
        dom::set_style(&tile, "transform", "scale(1)");
    });
}

/// Delegated clicks inside the widget: vote buttons, stat tiles, feedback button.
pub fn wire_widget(
    root: &web::Element,
    document: &web::Document,
    config: &WidgetConfig,
    system: &SharedStats,
) {
    let doc = document.clone();
    let config = config.clone();
    let system = system.clone();
    dom::listen::<web::MouseEvent>(root, "click", move |ev| {
        let Some(target) = dom::event_element(&ev) else {
            return;
        };
        if let Some(button) = dom::closest(&target, "[data-vote]") {
            match button.get_attribute("data-vote").as_deref() {
                Some("like") => cast_vote(&doc, &config, &system, Vote::Like),
                Some("dislike") => cast_vote(&doc, &config, &system, Vote::Dislike),
                _ => {}
            }
        } else if dom::closest(&target, "[data-open-feedback]").is_some() {
            modal::open_feedback(&doc);
        } else if let Some(tile) = dom::closest(&target, "[data-stat]") {
            press_effect(&tile);
            let stat = tile.get_attribute("data-stat").and_then(|k| StatTile::from_key(&k));
            if let Some(stat) = stat {
                log::info!("{}", stat.describe(system.borrow().stats()));
            }
        }
    });
}

fn comment_value(document: &web::Document) -> String {
    document
        .get_element_by_id(FEEDBACK_COMMENT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
        .map(|t| t.value())
        .unwrap_or_default()
}

pub fn submit_feedback(document: &web::Document, config: &WidgetConfig, system: &SharedStats) {
    modal::hide_feedback_messages(document);
    let comment = comment_value(document);
    let result = system.borrow_mut().submit_feedback(&comment, Utc::now());
    match result {
        Ok(_) => {
            modal::show_feedback_success(document);
            render_stats_of(document, system);
            let doc = document.clone();
            dom::set_timeout(config.success_close_delay_ms, move || {
                if modal::is_open(&doc, FEEDBACK_MODAL_ID) {
                    modal::close_feedback(&doc);
                } else {
                    modal::hide_feedback_messages(&doc);
                }
            });
        }
        Err(rejection) => modal::show_feedback_error(document, rejection.user_message()),
    }
}

pub fn wire_feedback_modal(document: &web::Document, config: &WidgetConfig, system: &SharedStats) {
    if let Some(textarea) = document.get_element_by_id(FEEDBACK_COMMENT_ID) {
        let doc = document.clone();
        dom::listen::<web::Event>(&textarea, "input", move |_| {
            let count = comment_length(&comment_value(&doc));
            if let Some(el) = doc.get_element_by_id(CHAR_COUNT_ID) {
                el.set_text_content(Some(&count.to_string()));
            }
        });
    }

    for btn in dom::query_all_in_document(document, ".feedback-modal-close") {
        let doc = document.clone();
        dom::listen::<web::MouseEvent>(&btn, "click", move |_| modal::close_feedback(&doc));
    }

    if let Some(backdrop) = document.get_element_by_id(FEEDBACK_MODAL_ID) {
        let doc = document.clone();
        let modal_el = backdrop.clone();
        dom::listen::<web::MouseEvent>(&backdrop, "click", move |ev| {
            if dom::event_element(&ev).as_ref() == Some(&modal_el) {
                modal::close_feedback(&doc);
            }
        });
    }

    if let Some(form) = document.get_element_by_id(FEEDBACK_FORM_ID) {
        let doc = document.clone();
        let config = config.clone();
        let system = system.clone();
        dom::listen::<web::Event>(&form, "submit", move |ev| {
            ev.prevent_default();
            submit_feedback(&doc, &config, &system);
        });
    }

    let doc = document.clone();
    dom::listen::<web::KeyboardEvent>(document, "keydown", move |ev| {
        if ev.key() == "Escape" && modal::is_open(&doc, FEEDBACK_MODAL_ID) {
            modal::close_feedback(&doc);
        }
    });
}

/// Page-wide fallback: log uncaught errors and rejections, nothing else.
pub fn wire_global_error_logging(window: &web::Window) {
    dom::listen::<web::ErrorEvent>(window, "error", |ev| {
        log::error!("uncaught error: {} ({:?})", ev.message(), ev.error());
    });
    dom::listen::<web::PromiseRejectionEvent>(window, "unhandledrejection", |ev| {
        log::error!("unhandled rejection: {:?}", ev.reason());
    });
}
