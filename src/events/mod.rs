pub mod scroll;
pub mod visibility;

pub use scroll::wire_scroll_pass;
pub use visibility::observe_visibility;
