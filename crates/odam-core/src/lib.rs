pub mod config;
pub mod constants;
pub mod moderation;
pub mod rating;
pub mod records;
pub mod score;
pub mod site;
pub mod stats;
pub mod store;
pub mod system;
pub mod view;

pub use config::*;
pub use moderation::{comment_length, validate, Rejection};
pub use rating::*;
pub use records::*;
pub use score::*;
pub use stats::*;
pub use store::*;
pub use system::*;
pub use view::*;
