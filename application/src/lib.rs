pub mod channel;
pub mod membership;
pub mod workspace;

#[cfg(test)]
mod fake_slack;
