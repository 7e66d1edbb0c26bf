mod circular;
mod window;

pub use circular::*;
pub use window::*;
