use crate::models::Lead;

/// Tag leads with known low-margin patterns. Rules are evaluated
/// independently; a lead can carry several tags at once.
pub fn check(lead: &Lead) -> String {
    let mut flags = Vec::new();

    let pax = lead.pax.to_lowercase();
    if pax == "1" || pax.contains("solo") {
        flags.push("Solo traveler (1 PAX)");
    }

    let client_name = lead.client_name.to_lowercase();
    if client_name.contains("shore") || client_name.contains("excursion") {
        flags.push("Shore excursion");
    }

    if client_name.contains("day trip") || client_name.contains("half day") {
        flags.push("Short duration trip");
    }

    if flags.is_empty() {
        "No issues identified".to_string()
    } else {
        flags.join("; ")
    }
}
