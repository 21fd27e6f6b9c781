pub mod constants;
pub mod drag;
pub mod scrollbar;
pub mod visibility;

pub use constants::*;
pub use drag::*;
pub use scrollbar::*;
pub use visibility::*;
