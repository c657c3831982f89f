mod contact;
mod experience;
mod testimonial;

pub use contact::{ContactMessage, DEFAULT_SOURCE};
pub use experience::Experience;
pub use testimonial::Testimonial;
