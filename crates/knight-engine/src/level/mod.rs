pub mod store;
pub mod template;
