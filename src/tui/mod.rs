pub mod app;
pub mod error;
pub mod events;
pub mod layout;
pub mod palette;
pub mod render;
pub mod widgets;

pub use app::{App, Mode};
pub use error::TuiError;
pub use events::run_event_loop;
pub use layout::Layout;
pub use palette::Palette;
pub use render::render;
