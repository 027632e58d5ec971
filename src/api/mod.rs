mod behavior;
mod binding;
mod callbacks;
mod pointer_controller;
mod render_controller;

pub use behavior::{DragBehavior, LivePreviewBehavior, StyleClasses};
pub use binding::DragBinding;
pub use callbacks::{
    DownOutcome, DropOutcome, PreviewEvent, PreviewObserver, UpdateCallback, UpdateEvent,
};
