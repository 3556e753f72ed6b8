mod dict;
mod events;
mod view;

pub use dict::*;
pub use events::*;
pub use view::*;
