pub mod path;
pub mod point;

pub use path::Path;
pub use point::Point;
