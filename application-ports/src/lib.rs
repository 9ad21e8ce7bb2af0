pub mod channel;
pub mod membership;
pub mod workspace;

pub use domain_shared::slack;
