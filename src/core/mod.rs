pub mod constants;
pub mod countdown;
pub mod particles;
pub mod progress;
pub mod schedule;
pub mod transform;

pub use countdown::*;
pub use particles::*;
pub use progress::*;
pub use schedule::*;
pub use transform::*;
