//! Plain value-type figures and the [`Figure`] trait they share.

pub mod circle;
pub mod figure;
pub mod point;
pub mod rectangle;
pub mod scene;

pub use circle::Circle;
pub use figure::{report, total_surface, Figure};
pub use point::Point;
pub use rectangle::Rectangle;
pub use scene::{FigureSpec, Scene};
