//! Project-card audio mini-players. At most one plays at a time.

use crate::constants::*;
use crate::dom;
use odam_core::site::{format_time, progress_percent, WaveBar};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub struct Player {
    id: &'static str,
    audio: web::HtmlAudioElement,
    play_btn: web::Element,
    progress: Option<web::Element>,
    time_label: Option<web::Element>,
    container: Option<web::Element>,
    wave_bars: Vec<web::Element>,
    wave_timer: Cell<Option<i32>>,
}

impl Player {
    fn find(document: &web::Document, card_id: &str, audio_id: &'static str) -> Option<Self> {
        let card = document.get_element_by_id(card_id);
        let audio = document
            .get_element_by_id(audio_id)
            .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok());
        let (Some(card), Some(audio)) = (card, audio) else {
            log::error!("[audio] missing #{} or #{}", card_id, audio_id);
            return None;
        };
        let pick = |sel: &str| card.query_selector(sel).ok().flatten();
        let play_btn = pick(".audio-play-btn")?;
        let wave_bars = pick(".audio-waveform")
            .map(|w| dom::query_all(&w, ".wave-bar"))
            .unwrap_or_default();
        Some(Self {
            id: audio_id,
            progress: pick(".audio-progress"),
            time_label: pick(".audio-time"),
            container: pick(".audio-player-mini"),
            audio,
            play_btn,
            wave_bars,
            wave_timer: Cell::new(None),
        })
    }

    fn set_icon(&self, icon: &str) {
        self.play_btn.set_inner_html(icon);
    }

    fn set_time_label(&self, seconds: f64) {
        if let Some(label) = &self.time_label {
            label.set_text_content(Some(&format_time(seconds)));
        }
    }

    fn mark_playing(&self) {
        if let Some(c) = &self.container {
            dom::set_class(c, "playing", true);
        }
        self.set_icon(ICON_PAUSE);
    }

    fn mark_stopped(&self) {
        if let Some(c) = &self.container {
            dom::set_class(c, "playing", false);
        }
        self.set_icon(ICON_PLAY);
        self.stop_waves();
    }

    fn update_progress(&self) {
        let media: &web::HtmlMediaElement = &self.audio;
        if let (Some(bar), Some(pct)) = (
            &self.progress,
            progress_percent(media.current_time(), media.duration()),
        ) {
            dom::set_style(bar, "width", &format!("{pct}%"));
        }
        self.set_time_label(media.current_time());
    }

    fn start_waves(self: &Rc<Self>) {
        self.stop_waves();
        if self.wave_bars.is_empty() {
            return;
        }
        let player = self.clone();
        let handle = dom::set_interval(WAVE_FRAME_MS, move || {
            if player.audio.paused() {
                return;
            }
            let mut rng = rand::thread_rng();
            for bar in &player.wave_bars {
                let sample = WaveBar::sample(&mut rng);
                dom::set_style(bar, "height", &format!("{:.1}px", sample.height_px));
                dom::set_style(bar, "opacity", &format!("{:.2}", sample.opacity));
            }
        });
        self.wave_timer.set(handle);
    }

    fn stop_waves(&self) {
        if let Some(handle) = self.wave_timer.take() {
            dom::clear_interval(handle);
        }
    }

    fn reset_waves(&self) {
        for bar in &self.wave_bars {
            dom::set_style(bar, "height", "");
            dom::set_style(bar, "opacity", "0.6");
        }
    }

    fn rewind(&self) {
        let _ = self.audio.pause();
        self.audio.set_current_time(0.0);
        self.mark_stopped();
    }
}

fn toggle(players: &[Rc<Player>], index: usize) {
    for (i, other) in players.iter().enumerate() {
        if i != index && !other.audio.paused() {
            other.rewind();
        }
    }
    let player = players[index].clone();
    if player.audio.paused() {
        let promise = match player.audio.play() {
            Ok(p) => p,
            Err(e) => {
                log::error!("[audio] play {} failed: {:?}", player.id, e);
                player.set_icon(ICON_ERROR);
                return;
            }
        };
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => {
                    player.mark_playing();
                    player.start_waves();
                }
                Err(e) => {
                    log::error!("[audio] play {} rejected: {:?}", player.id, e);
                    player.set_icon(ICON_ERROR);
                }
            }
        });
    } else {
        let _ = player.audio.pause();
        player.mark_stopped();
    }
}

fn wire_player(players: &Rc<Vec<Rc<Player>>>, index: usize) {
    let player = &players[index];
    {
        let players = players.clone();
        dom::listen::<web::MouseEvent>(&player.play_btn, "click", move |_| {
            toggle(&players, index);
        });
    }
    let media: &web::EventTarget = &player.audio;
    {
        let p = player.clone();
        dom::listen::<web::Event>(media, "timeupdate", move |_| p.update_progress());
    }
    {
        let p = player.clone();
        dom::listen::<web::Event>(media, "play", move |_| p.mark_playing());
    }
    {
        let p = player.clone();
        dom::listen::<web::Event>(media, "pause", move |_| {
            p.mark_stopped();
            p.reset_waves();
        });
    }
    {
        let p = player.clone();
        dom::listen::<web::Event>(media, "ended", move |_| {
            p.audio.set_current_time(0.0);
            p.mark_stopped();
            if let Some(bar) = &p.progress {
                dom::set_style(bar, "width", "0%");
            }
            p.set_time_label(0.0);
        });
    }
    {
        let p = player.clone();
        dom::listen::<web::Event>(media, "loadedmetadata", move |_| p.set_time_label(0.0));
    }
    {
        let p = player.clone();
        dom::listen::<web::Event>(media, "error", move |_| {
            log::error!("[audio] could not load {}", p.id);
            p.set_icon(ICON_ERROR);
            dom::set_style(&p.play_btn, "color", "#ff6b6b");
        });
    }
}

/// Finds every playlist entry present on the page and wires it.
pub fn init_players(document: &web::Document) -> usize {
    let players: Rc<Vec<Rc<Player>>> = Rc::new(
        PLAYLIST
            .iter()
            .filter_map(|&(card, audio)| Player::find(document, card, audio))
            .map(Rc::new)
            .collect(),
    );
    for index in 0..players.len() {
        wire_player(&players, index);
    }
    log::info!("[audio] {} players ready", players.len());
    players.len()
}
