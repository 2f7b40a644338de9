pub mod time;
pub mod weekday;
pub mod window;

pub use time::*;
pub use weekday::*;
pub use window::*;
