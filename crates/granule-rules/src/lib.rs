pub mod defaults;
pub mod loader;
pub mod validator;

pub use loader::LoadError;
pub use validator::ValidationError;
