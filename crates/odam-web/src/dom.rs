use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach a listener for the lifetime of the page.
pub fn listen<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like `listen`, registered as passive (scroll, touch).
pub fn listen_passive(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(true);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

/// One-shot deferral. The callback must re-check any state it depends on.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let callback = Closure::once_into_js(f);
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        ) {
            log::warn!("setTimeout failed: {:?}", e);
        }
    }
}

/// Repeating timer; returns the handle for `clear_interval`.
pub fn set_interval(period_ms: i32, mut f: impl FnMut() + 'static) -> Option<i32> {
    let window = web::window()?;
    let closure = Closure::wrap(Box::new(move || f()) as Box<dyn FnMut()>);
    let handle = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        )
        .ok();
    closure.forget();
    handle
}

pub fn clear_interval(handle: i32) {
    if let Some(window) = web::window() {
        window.clear_interval_with_handle(handle);
    }
}

/// All elements under `root` matching `selector`.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    collect_nodes(root.query_selector_all(selector).ok())
}

pub fn query_all_in_document(document: &web::Document, selector: &str) -> Vec<web::Element> {
    collect_nodes(document.query_selector_all(selector).ok())
}

fn collect_nodes(list: Option<web::NodeList>) -> Vec<web::Element> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

/// Lock or release page scrolling behind an open overlay.
#[inline]
pub fn lock_body_scroll(document: &web::Document, locked: bool) {
    if let Some(body) = document.body() {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "auto" });
    }
}

/// The element an event started on, if it is one.
#[inline]
pub fn event_element(ev: &web::Event) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}

#[inline]
pub fn closest(el: &web::Element, selector: &str) -> Option<web::Element> {
    el.closest(selector).ok().flatten()
}
