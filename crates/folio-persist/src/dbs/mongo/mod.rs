mod builder;
mod client;
mod models;

pub use builder::MongoStoreBuilder;
pub use client::MongoStore;
pub use models::{inserted_id_to_string, to_bson_document};
