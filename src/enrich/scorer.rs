/// Score agent performance from the communication trail and lead status.
///
/// The base score comes from how many times the agent has been in touch;
/// the lead status then adjusts it. Scores are clamped to 1..=10.
pub fn score_agent(communications_count: u32, lead_status: &str) -> (u8, String) {
    let (mut score, mut recommendation) = match communications_count {
        0 => (3, "No response from agent yet"),
        1 => (6, "Initial contact made, needs follow-up"),
        _ => (8, "Active communication maintained"),
    };

    let status = lead_status.to_lowercase();
    if status.contains("confirmed") {
        score = (score + 2).min(10);
        recommendation = "Lead successfully converted";
    } else if status.contains("new") && communications_count > 0 {
        score = (score - 1).max(1);
        recommendation = "Response needed for new lead";
    }

    (score, recommendation.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_score_buckets() {
        assert_eq!(score_agent(0, "").0, 3);
        assert_eq!(score_agent(1, "").0, 6);
        assert_eq!(score_agent(2, "").0, 8);
        assert_eq!(score_agent(17, "").0, 8);
    }

    #[test]
    fn test_base_recommendations() {
        assert_eq!(score_agent(0, "").1, "No response from agent yet");
        assert_eq!(score_agent(1, "").1, "Initial contact made, needs follow-up");
        assert_eq!(score_agent(3, "").1, "Active communication maintained");
    }

    #[test]
    fn test_confirmed_boosts_and_caps() {
        let (score, recommendation) = score_agent(0, "Confirmed Booking");
        assert_eq!(score, 5);
        assert_eq!(recommendation, "Lead successfully converted");

        // 8 + 2 hits the cap exactly; it must never exceed 10
        assert_eq!(score_agent(2, "confirmed").0, 10);
        assert_eq!(score_agent(5, "CONFIRMED").0, 10);
    }

    #[test]
    fn test_new_lead_with_contact_deducts() {
        let (score, recommendation) = score_agent(1, "New Request");
        assert_eq!(score, 5);
        assert_eq!(recommendation, "Response needed for new lead");

        assert_eq!(score_agent(2, "new").0, 7);
    }

    #[test]
    fn test_new_lead_without_contact_keeps_base() {
        let (score, recommendation) = score_agent(0, "New Request");
        assert_eq!(score, 3);
        assert_eq!(recommendation, "No response from agent yet");
    }

    #[test]
    fn test_confirmed_takes_precedence_over_new() {
        // "New Confirmed" matches both; confirmed wins
        let (score, recommendation) = score_agent(1, "New Confirmed");
        assert_eq!(score, 8);
        assert_eq!(recommendation, "Lead successfully converted");
    }
}
