/// Canonical region code: lowercase with spaces removed, so
/// `"West Europe"` becomes `"westeurope"`.
pub fn normalize_location(location: &str) -> String {
    location
        .chars()
        .filter(|c| *c != ' ')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_spaces_and_lowercases() {
        assert_eq!(normalize_location("West Europe"), "westeurope");
        assert_eq!(normalize_location("East US 2"), "eastus2");
    }

    #[test]
    fn normalizing_is_idempotent() {
        for raw in ["West Europe", "eastus2", "Germany West Central", ""] {
            let once = normalize_location(raw);
            assert_eq!(normalize_location(&once), once);
        }
    }
}
