//! Record shapes shared by the Folio API and its persistence layer.
//!
//! Every record implements [`Record`], which ties the type to its collection
//! name. The schema endpoint is derived from these same declarations through
//! [`Schema`], so the two can never drift apart.

pub mod models;
pub mod record;
pub mod schema;

pub use models::{ContactMessage, Experience, Testimonial, DEFAULT_SOURCE};
pub use record::Record;
pub use schema::{field_names, CollectionSchema, Schema};
