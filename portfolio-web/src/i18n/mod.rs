mod bundle;
mod locales;
mod render;

pub use bundle::{current_lang, set_lang};
pub use locales::load_translations;
pub use render::t;
