use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Calls `on_visible(index)` the first time each element crosses `threshold`,
/// then stops watching that element. Index is the element's position in
/// `elements`.
pub fn watch_once(
    elements: Vec<web::Element>,
    threshold: f64,
    root_margin: Option<&str>,
    mut on_visible: impl FnMut(usize, &web::Element) + 'static,
) {
    if elements.is_empty() {
        return;
    }
    let targets = elements.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                if let Some(index) = targets.iter().position(|el| *el == target) {
                    on_visible(index, &target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for el in &elements {
                observer.observe(el);
            }
        }
        Err(e) => log::warn!("IntersectionObserver unavailable: {:?}", e),
    }
    callback.forget();
}
