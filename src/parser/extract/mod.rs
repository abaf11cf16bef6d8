pub mod email;
pub mod links;
pub mod name;

pub use email::extract_email;
pub use links::{hyperlinks, is_absolute_http};
pub use name::clean_name;
