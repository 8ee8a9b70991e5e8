// Page wiring constants: element hooks, playlist and timer periods

// Project cards and their <audio> elements
pub const PLAYLIST: &[(&str, &str)] = &[
    ("project-tu-me-sostendras", "audio-tu-me-sostendras"),
    ("project-renovados-en-tu-voluntad", "audio-renovados-en-tu-voluntad"),
    ("project-en-ti-confio-senor", "audio-en-ti-confio-senor"),
    (
        "project-el-diezmo-es-del-senor-version-bachata",
        "audio-el-diezmo-es-del-senor-version-bachata",
    ),
    ("project-mi-refugio", "audio-mi-refugio"),
    ("project-aleluya", "audio-aleluya"),
];

pub const AUDIO_INIT_DELAY_MS: i32 = 1500;
pub const WAVE_FRAME_MS: i32 = 150;

pub const ICON_PLAY: &str = r#"<i class="fas fa-play"></i>"#;
pub const ICON_PAUSE: &str = r#"<i class="fas fa-pause"></i>"#;
pub const ICON_ERROR: &str = r#"<i class="fas fa-exclamation-triangle"></i>"#;

// Rotating verse
pub const VERSE_FIRST_DELAY_MS: i32 = 1000;
pub const VERSE_FADE_MS: i32 = 300;
pub const VERSE_PERIOD_MS: i32 = 30_000;

pub const VERSES: &[(&str, &str)] = &[
    ("El temor del Señor es el principio de la sabiduría.", "Proverbios 1:7"),
    ("Todo lo puedo en Cristo que me fortalece.", "Filipenses 4:13"),
    ("Encomienda a Jehová tu camino, y confía en él; y él hará.", "Salmos 37:5"),
    (
        "Porque de tal manera amó Dios al mundo, que ha dado a su Hijo unigénito.",
        "Juan 3:16",
    ),
    ("Jesucristo es el mismo ayer, y hoy, y por los siglos.", "Hebreos 13:8"),
];

// Element ids
pub const FEEDBACK_MODAL_ID: &str = "feedback-modal";
pub const FEEDBACK_FORM_ID: &str = "feedback-form";
pub const FEEDBACK_COMMENT_ID: &str = "feedback-comment";
pub const FEEDBACK_ERROR_ID: &str = "feedback-error";
pub const FEEDBACK_SUCCESS_ID: &str = "feedback-success";
pub const CHAR_COUNT_ID: &str = "char-count";
pub const CONTACT_MODAL_ID: &str = "contact-modal";
pub const NAV_TOGGLE_ID: &str = "site-nav-toggle";
pub const NAV_ID: &str = "site-nav";
pub const VERSE_ID: &str = "bible-verse";
pub const LOADING_BAR_ID: &str = "loading-progress";
pub const PROGRESS_FILL_SELECTOR: &str = ".progress-fill";

// Fade-in observer margin
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";
