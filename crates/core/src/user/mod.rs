mod attributes;
mod types;

pub use attributes::{ATTR_AGE, ATTR_ID, ATTR_NAME};
pub use types::{User, UserChanges};
