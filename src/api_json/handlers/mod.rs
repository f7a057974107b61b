pub mod courses;
pub mod docs;
pub mod extract;
pub mod weekdays;

pub use courses::*;
pub use docs::*;
pub use extract::*;
pub use weekdays::*;
