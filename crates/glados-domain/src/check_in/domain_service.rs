use super::value_objects::CheckInOutcome;

const COOLDOWN_MARKER: &str = "Please Try Tomorrow";
const REWARD_MARKER: &str = "Got";
const REWARD_PREFIX: &str = "Got ";

/// Domain service for check-in business rules
/// Contains pure domain logic without infrastructure dependencies
pub struct CheckInDomainService;

impl CheckInDomainService {
    /// Classify the free-text `message` field of a check-in reply
    ///
    /// The service has no schema for this field, so matching is literal and
    /// case-sensitive. The cooldown marker wins over the reward marker.
    pub fn classify_message(message: &str) -> CheckInOutcome {
        if message.contains(COOLDOWN_MARKER) {
            return CheckInOutcome::failed("请明天再试 ⏳");
        }

        if message.contains(REWARD_MARKER) {
            if let Some(points) = Self::extract_points(message) {
                return CheckInOutcome::succeeded(format!("获得 {} 积分 🎉", points));
            }
        }

        CheckInOutcome::failed(format!("未知响应: {} ❓", message))
    }

    /// Token right after the first "Got " up to the next space
    pub fn extract_points(message: &str) -> Option<&str> {
        let (_, rest) = message.split_once(REWARD_PREFIX)?;
        rest.split(' ').next()
    }
}
