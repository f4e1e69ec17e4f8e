pub mod session;
pub mod summary;

pub use session::Session;
