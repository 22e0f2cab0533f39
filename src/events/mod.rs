pub mod actions;
pub mod keyboard;
pub mod pointer;
pub mod scroll;

pub use actions::wire_action_buttons;
pub use keyboard::wire_global_keydown;
pub use pointer::wire_pointer_handlers;
pub use scroll::wire_scroll_handlers;
