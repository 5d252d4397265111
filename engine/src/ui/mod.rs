//! UI-facing state owned by the engine: animations and view options.

mod animation;
mod reveal;
mod slider;
mod view_state;

pub use animation::ease_out_cubic;
pub use daypredict_types::ui::UiOptions;
pub use reveal::{REVEAL_DURATION, RevealEffect};
pub use slider::{SNAP_DURATION, SliderDisplay};
pub use view_state::ViewState;
