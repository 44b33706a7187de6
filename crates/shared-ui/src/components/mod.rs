// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod detail_list;
pub mod input;
pub mod page_header;
pub mod skeleton;

// Overlay wrappers
pub mod alert_dialog;

pub use alert_dialog::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use detail_list::*;
pub use input::*;
pub use page_header::*;
pub use skeleton::*;
