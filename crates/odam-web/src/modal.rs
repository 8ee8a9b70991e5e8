use crate::constants::*;
use crate::dom;
use odam_core::constants::FEEDBACK_FOCUS_DELAY_MS;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn is_open(document: &web::Document, id: &str) -> bool {
    document
        .get_element_by_id(id)
        .map(|el| el.class_list().contains("active"))
        .unwrap_or(false)
}

#[inline]
fn set_open(document: &web::Document, id: &str, open: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        dom::set_class(&el, "active", open);
        dom::lock_body_scroll(document, open);
    }
}

#[inline]
fn show_block(document: &web::Document, id: &str, shown: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        dom::set_style(&el, "display", if shown { "block" } else { "none" });
    }
}

pub fn open_feedback(document: &web::Document) {
    set_open(document, FEEDBACK_MODAL_ID, true);
    let doc = document.clone();
    dom::set_timeout(FEEDBACK_FOCUS_DELAY_MS, move || {
        if let Some(textarea) = doc
            .get_element_by_id(FEEDBACK_COMMENT_ID)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        {
            let _ = textarea.focus();
        }
    });
}

/// Closes the feedback modal and resets the form and its messages.
pub fn close_feedback(document: &web::Document) {
    set_open(document, FEEDBACK_MODAL_ID, false);
    if let Some(form) = document
        .get_element_by_id(FEEDBACK_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    {
        form.reset();
        if let Some(count) = document.get_element_by_id(CHAR_COUNT_ID) {
            count.set_text_content(Some("0"));
        }
    }
    hide_feedback_messages(document);
}

pub fn hide_feedback_messages(document: &web::Document) {
    show_block(document, FEEDBACK_ERROR_ID, false);
    show_block(document, FEEDBACK_SUCCESS_ID, false);
}

pub fn show_feedback_error(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id(FEEDBACK_ERROR_ID) {
        el.set_text_content(Some(message));
    }
    show_block(document, FEEDBACK_ERROR_ID, true);
}

pub fn show_feedback_success(document: &web::Document) {
    show_block(document, FEEDBACK_SUCCESS_ID, true);
}

pub fn open_contact(document: &web::Document) {
    set_open(document, CONTACT_MODAL_ID, true);
}

pub fn close_contact(document: &web::Document) {
    set_open(document, CONTACT_MODAL_ID, false);
}
