mod report;
mod sender;

pub use report::{beijing_time, CheckInReport};
pub use sender::{NotificationMessage, NotificationSender};
