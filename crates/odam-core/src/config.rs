use crate::constants::*;

/// DOM hooks and pacing for the stats widget.
#[derive(Clone, Debug)]
pub struct WidgetConfig {
    /// Id of the section the widget is appended to.
    pub mount_id: &'static str,
    /// Class on the widget root; clicks inside it are not counted.
    pub container_class: &'static str,
    pub projects_section_id: &'static str,
    pub projects_threshold: f64,
    pub service_item_selector: &'static str,
    pub service_threshold: f64,
    pub dislike_prompt_delay_ms: i32,
    pub success_close_delay_ms: i32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            mount_id: "interaccion",
            container_class: "stats-system-container",
            projects_section_id: "proyectos",
            projects_threshold: PROJECTS_VIEW_THRESHOLD,
            service_item_selector: ".service-accordion-item",
            service_threshold: SERVICE_VIEW_THRESHOLD,
            dislike_prompt_delay_ms: DISLIKE_PROMPT_DELAY_MS,
            success_close_delay_ms: FEEDBACK_SUCCESS_CLOSE_MS,
        }
    }
}
