pub mod channel;
pub mod directory;
pub mod membership;
pub mod ports;
pub mod user;
