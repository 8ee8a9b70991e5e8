//! Markup for the stats widget and its feedback modal.
//!
//! Handlers are attached by `events` after insertion; nothing here relies on
//! inline `onclick` attributes.

use odam_core::{RatingView, StatsView, WidgetConfig};
use web_sys as web;

fn stat_tile(key: &str, id: &str, value: &str, label: &str) -> String {
    format!(
        r#"<div class="stat-item" data-stat="{key}">
                <span class="stat-number" id="{id}">{value}</span>
                <span class="stat-label">{label}</span>
            </div>"#
    )
}

pub fn widget_html(config: &WidgetConfig, stats: &StatsView, rating: &RatingView) -> String {
    let tiles = [
        stat_tile("visits", "stat-visits", &stats.visits, "Visitas"),
        stat_tile("time", "stat-time", &stats.time, "Tiempo"),
        stat_tile("engagement", "stat-engagement", &stats.engagement, "Compromiso"),
        stat_tile("projects", "stat-projects", &stats.projects, "Proyectos Vistos"),
    ]
    .concat();
    format!(
        r#"<div class="{container}">
    <div class="stats-title">Interacción de la Comunidad</div>
    <div class="stats-grid">{tiles}</div>
    <div class="rating-section">
        <div class="rating-title">¿Te gusta nuestra página?</div>
        <div class="rating-buttons">
            <button class="{like_class}" data-vote="like" aria-label="Me gusta">
                <i class="fas fa-thumbs-up"></i>
            </button>
            <button class="{dislike_class}" data-vote="dislike" aria-label="No me gusta">
                <i class="fas fa-thumbs-down"></i>
            </button>
        </div>
        <div class="rating-result">{summary}</div>
    </div>
    <div class="feedback-section">
        <button class="feedback-btn" data-open-feedback>
            <i class="fas fa-comment"></i> Dejar Comentarios
        </button>
    </div>
</div>"#,
        container = config.container_class,
        like_class = rating.like_class,
        dislike_class = rating.dislike_class,
        summary = rating.summary,
    )
}

pub const FEEDBACK_MODAL_HTML: &str = r#"<div id="feedback-modal" class="feedback-modal">
    <div class="feedback-modal-content">
        <div class="feedback-modal-header">
            <h3>¿Qué podemos mejorar?</h3>
            <button class="feedback-modal-close" aria-label="Cerrar">&times;</button>
        </div>
        <form id="feedback-form" class="feedback-form">
            <div class="form-group">
                <label for="feedback-comment">Tu feedback es importante para nosotros:</label>
                <textarea id="feedback-comment"
                    placeholder="Por favor, comparte tus sugerencias de manera respetuosa y constructiva..."
                    required maxlength="500"></textarea>
                <div class="feedback-error" id="feedback-error"></div>
                <div class="feedback-success" id="feedback-success">
                    ¡Gracias por tus comentarios! Los tomaremos en cuenta para mejorar.
                </div>
                <div class="feedback-counter"><span id="char-count">0</span>/500 caracteres</div>
            </div>
            <div class="feedback-actions">
                <button type="submit" class="btn btn-primary">
                    <i class="fas fa-paper-plane"></i> Enviar Comentario
                </button>
                <button type="button" class="btn btn-secondary feedback-modal-close">Cancelar</button>
            </div>
        </form>
    </div>
</div>"#;

/// Appends the widget to its mount section (if present) and the modal to
/// `<body>`. Returns the widget root.
pub fn mount(
    document: &web::Document,
    config: &WidgetConfig,
    stats: &StatsView,
    rating: &RatingView,
) -> Option<web::Element> {
    let mut root = None;
    match document.get_element_by_id(config.mount_id) {
        Some(section) => {
            let _ = section
                .insert_adjacent_html("beforeend", &widget_html(config, stats, rating));
            root = section
                .query_selector(&format!(".{}", config.container_class))
                .ok()
                .flatten();
        }
        None => log::warn!("[widget] #{} not found; widget not shown", config.mount_id),
    }
    if let Some(body) = document.body() {
        let _ = body.insert_adjacent_html("beforeend", FEEDBACK_MODAL_HTML);
    }
    root
}
