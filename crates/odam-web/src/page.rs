//! Stateless page behaviors around the widget.

use crate::constants::*;
use crate::{dom, modal, observe};
use odam_core::constants::{
    FADE_IN_THRESHOLD, LOADING_COMPLETE_DELAY_MS, LOADING_FLOOR_DELAY_MS, LOADING_HIDE_DELAY_MS,
};
use odam_core::site::{anchor_scroll_top, header_state, pick_index, LoadProgress};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Accordion and contact-modal clicks, delegated from the document.
pub fn wire_delegated_clicks(document: &web::Document) {
    let doc = document.clone();
    dom::listen::<web::MouseEvent>(document, "click", move |ev| {
        let Some(target) = dom::event_element(&ev) else {
            return;
        };

        if let Some(item) = dom::closest(&target, ".service-accordion-header")
            .and_then(|header| header.parent_element())
        {
            let was_active = item.class_list().contains("active");
            for other in dom::query_all_in_document(&doc, ".service-accordion-item") {
                dom::set_class(&other, "active", false);
            }
            if !was_active {
                dom::set_class(&item, "active", true);
            }
        }

        if dom::closest(&target, ".open-contact-modal").is_some() {
            ev.prevent_default();
            modal::open_contact(&doc);
        }

        if dom::closest(&target, ".modal-close").is_some() || target.id() == CONTACT_MODAL_ID {
            modal::close_contact(&doc);
        }
    });

    let doc = document.clone();
    dom::listen::<web::KeyboardEvent>(document, "keydown", move |ev| {
        if ev.key() == "Escape" && modal::is_open(&doc, CONTACT_MODAL_ID) {
            modal::close_contact(&doc);
        }
    });
}

fn close_menu(document: &web::Document, toggle: &web::Element, nav: &web::Element) {
    dom::set_class(nav, "open", false);
    let _ = toggle.set_attribute("aria-expanded", "false");
    dom::lock_body_scroll(document, false);
}

pub fn wire_mobile_menu(document: &web::Document) {
    let (Some(toggle), Some(nav)) = (
        document.get_element_by_id(NAV_TOGGLE_ID),
        document.get_element_by_id(NAV_ID),
    ) else {
        return;
    };

    {
        let doc = document.clone();
        let nav = nav.clone();
        let btn = toggle.clone();
        dom::listen::<web::MouseEvent>(&toggle, "click", move |ev| {
            ev.stop_propagation();
            let expanded = btn.get_attribute("aria-expanded").as_deref() == Some("true");
            let _ = btn.set_attribute("aria-expanded", if expanded { "false" } else { "true" });
            let _ = nav.class_list().toggle("open");
            dom::lock_body_scroll(&doc, !expanded);
        });
    }

    for link in dom::query_all(&nav, "a") {
        let doc = document.clone();
        let nav = nav.clone();
        let toggle = toggle.clone();
        dom::listen::<web::MouseEvent>(&link, "click", move |_| close_menu(&doc, &toggle, &nav));
    }

    let doc = document.clone();
    dom::listen::<web::MouseEvent>(document, "click", move |ev| {
        if !nav.class_list().contains("open") {
            return;
        }
        let target: Option<web::Node> = ev.target().and_then(|t| t.dyn_into().ok());
        let inside = nav.contains(target.as_ref()) || toggle.contains(target.as_ref());
        if !inside {
            close_menu(&doc, &toggle, &nav);
        }
    });
}

pub fn wire_smooth_scroll(window: &web::Window, document: &web::Document) {
    for anchor in dom::query_all_in_document(document, r##"a[href^="#"]"##) {
        let win = window.clone();
        let doc = document.clone();
        let link = anchor.clone();
        dom::listen::<web::MouseEvent>(&anchor, "click", move |ev| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            if href == "#" {
                return;
            }
            ev.prevent_default();
            let Ok(Some(target)) = doc.query_selector(&href) else {
                return;
            };
            let top = anchor_scroll_top(
                target.get_bounding_client_rect().top(),
                win.page_y_offset().unwrap_or(0.0),
            );
            let options = web::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web::ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
            if let Ok(history) = win.history() {
                let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&href));
            }
        });
    }
}

pub fn wire_header_scroll(window: &web::Window, document: &web::Document) {
    let Ok(Some(header)) = document.query_selector("header") else {
        return;
    };
    let last = Rc::new(Cell::new(0.0_f64));
    let win = window.clone();
    dom::listen_passive(window, "scroll", move |_| {
        let current = win.page_y_offset().unwrap_or(0.0);
        let state = header_state(current, last.get());
        dom::set_class(&header, "scrolled", state.scrolled);
        dom::set_style(
            &header,
            "transform",
            if state.hidden { "translateY(-100%)" } else { "translateY(0)" },
        );
        last.set(current);
    });
}

pub fn wire_fade_in(window: &web::Window, document: &web::Document) {
    let elements = dom::query_all_in_document(document, ".fade-in");
    let reduced_motion = window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|q| q.matches())
        .unwrap_or(false);
    if reduced_motion {
        for el in &elements {
            dom::set_style(el, "transition", "none");
            dom::set_class(el, "show", true);
        }
        return;
    }
    observe::watch_once(
        elements,
        FADE_IN_THRESHOLD,
        Some(FADE_IN_ROOT_MARGIN),
        |_, el| dom::set_class(el, "show", true),
    );
}

fn show_next_verse(document: &web::Document, current: &Cell<Option<usize>>) {
    let Some(el) = document.get_element_by_id(VERSE_ID) else {
        return;
    };
    let Some(index) = pick_index(&mut rand::thread_rng(), VERSES.len(), current.get()) else {
        return;
    };
    current.set(Some(index));
    let (text, reference) = VERSES[index];
    dom::set_style(&el, "opacity", "0");
    dom::set_timeout(VERSE_FADE_MS, move || {
        el.set_inner_html(&format!(
            r#"<div class="verse-text">{text}</div><div class="verse-reference">{reference}</div>"#
        ));
        dom::set_style(&el, "opacity", "1");
    });
}

pub fn wire_verses(document: &web::Document) {
    let current = Rc::new(Cell::new(None::<usize>));
    {
        let doc = document.clone();
        let current = current.clone();
        dom::set_timeout(VERSE_FIRST_DELAY_MS, move || show_next_verse(&doc, &current));
    }
    if let Some(el) = document.get_element_by_id(VERSE_ID) {
        for event in ["click", "touchstart"] {
            let doc = document.clone();
            let current = current.clone();
            dom::listen::<web::Event>(&el, event, move |_| show_next_verse(&doc, &current));
        }
    }
    let doc = document.clone();
    let _ = dom::set_interval(VERSE_PERIOD_MS, move || show_next_verse(&doc, &current));
}

fn show_progress(fill: Option<&web::Element>, percent: f64) {
    if let Some(fill) = fill {
        dom::set_style(fill, "width", &format!("{percent}%"));
    }
}

fn after_progress(
    bar: &web::Element,
    fill: &Option<web::Element>,
    progress: &Rc<RefCell<LoadProgress>>,
    percent: f64,
) {
    show_progress(fill.as_ref(), percent);
    if !progress.borrow_mut().should_complete() {
        return;
    }
    let bar = bar.clone();
    let fill = fill.clone();
    let progress = progress.clone();
    dom::set_timeout(LOADING_COMPLETE_DELAY_MS, move || {
        let percent = progress.borrow_mut().complete();
        show_progress(fill.as_ref(), percent);
        dom::set_timeout(LOADING_HIDE_DELAY_MS, move || dom::set_class(&bar, "loading", false));
    });
}

/// Drives `#loading-progress` from image loads, with a forced floor after 1s.
pub fn wire_loading_progress(document: &web::Document) {
    let Some(bar) = document.get_element_by_id(LOADING_BAR_ID) else {
        return;
    };
    let fill = document.query_selector(PROGRESS_FILL_SELECTOR).ok().flatten();
    let images: Vec<web::HtmlImageElement> = dom::query_all_in_document(document, "img")
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlImageElement>().ok())
        .collect();
    let pending: Vec<&web::HtmlImageElement> =
        images.iter().filter(|img| !img.complete()).collect();
    let progress = Rc::new(RefCell::new(LoadProgress::new(images.len(), pending.len())));

    dom::set_class(&bar, "loading", true);
    show_progress(fill.as_ref(), progress.borrow().percent());

    for img in pending {
        for event in ["load", "error"] {
            let bar = bar.clone();
            let fill = fill.clone();
            let progress = progress.clone();
            dom::listen::<web::Event>(img, event, move |_| {
                let percent = progress.borrow_mut().image_settled();
                after_progress(&bar, &fill, &progress, percent);
            });
        }
    }

    dom::set_timeout(LOADING_FLOOR_DELAY_MS, move || {
        let percent = progress.borrow_mut().force_floor();
        after_progress(&bar, &fill, &progress, percent);
    });
}

/// Logs the page load time once the window `load` event has fired.
pub fn log_load_time(window: &web::Window, document: &web::Document) {
    fn report(window: &web::Window) {
        if let Some(performance) = window.performance() {
            log::info!("page load time: {:.0}ms", performance.now());
        }
    }
    if document.ready_state() == "complete" {
        report(window);
        return;
    }
    let win = window.clone();
    dom::listen::<web::Event>(window, "load", move |_| report(&win));
}
