pub mod form;
pub mod store;
pub mod validate;
mod view;

pub use view::LeadForm;
