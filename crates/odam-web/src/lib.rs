#![cfg(target_arch = "wasm32")]
use odam_core::{StatsSystem, WidgetConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod handle;
mod modal;
mod observe;
mod page;
mod render;
mod storage;
mod widget;

pub use handle::StatsWidget;

/// Property on `window` where page scripts find the widget handle.
const HANDLE_PROPERTY: &str = "odamStats";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("odam-web starting");

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    events::wire_global_error_logging(&window);

    let loading = window
        .document()
        .map(|d| d.ready_state() == "loading")
        .unwrap_or(false);
    if loading {
        dom::listen::<web::Event>(&window, "DOMContentLoaded", |_| run_init());
    } else {
        run_init();
    }
    Ok(())
}

fn run_init() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    page::wire_loading_progress(&document);
    page::log_load_time(&window, &document);

    init_stats_widget(&window, &document)?;

    page::wire_delegated_clicks(&document);
    page::wire_mobile_menu(&document);
    page::wire_smooth_scroll(&window, &document);
    page::wire_header_scroll(&window, &document);
    page::wire_fade_in(&window, &document);
    page::wire_verses(&document);

    let doc = document.clone();
    dom::set_timeout(constants::AUDIO_INIT_DELAY_MS, move || {
        audio::init_players(&doc);
    });

    log::info!("odam-web ready");
    Ok(())
}

/// Builds the single `StatsSystem`, mounts the widget and hands the shared
/// instance to every handler that needs it.
fn init_stats_widget(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let config = WidgetConfig::default();
    let system: events::SharedStats = Rc::new(RefCell::new(StatsSystem::load(
        storage::LocalStorage::open(),
    )));

    let (stats_view, rating_view) = {
        let s = system.borrow();
        (s.stats_view(), s.rating_view())
    };
    if let Some(root) = widget::mount(document, &config, &stats_view, &rating_view) {
        events::wire_widget(&root, document, &config, &system);
    }
    events::wire_feedback_modal(document, &config, &system);

    events::track_visit(document, &system);
    events::wire_session_tracking(window, document, &config, &system);
    events::wire_view_tracking(document, &config, &system);

    let handle = StatsWidget::new(system, document.clone(), config);
    js_sys::Reflect::set(window, &JsValue::from_str(HANDLE_PROPERTY), &JsValue::from(handle))
        .map_err(|e| anyhow::anyhow!("could not expose widget handle: {:?}", e))?;
    log::info!("📊 stats widget initialized");
    Ok(())
}
