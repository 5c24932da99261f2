pub mod id;
pub mod percentage;

pub use id::{generate_identifier, generate_uuid_identifier};
pub use percentage::clamp_percentage;
