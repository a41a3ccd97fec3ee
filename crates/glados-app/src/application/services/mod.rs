mod check_in_agent;

pub use check_in_agent::CheckInAgent;
