use std::collections::HashMap;

/// Builds the line-to-route directory once at startup.
///
/// The directory is static reference data covering the known lines of both
/// networks; a line missing from it simply has no route information, which is
/// ordinary for newly exported lines.
pub fn route_directory() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        // Suburban
        ("T1", "Berowra/Hornsby to Richmond"),
        ("T2", "Parramatta to City"),
        ("T3", "Liverpool/City to Lidcombe"),
        ("T4", "Cronulla to Bondi Junction"),
        ("T5", "Richmond to City"),
        ("T7", "Olympic Park to City"),
        ("T8", "Macarthur to City"),
        ("T9", "Hornsby/Northern Line to North Shore"),
        // Intercity
        ("Blue Mountains", "Central to Lithgow/Katoomba"),
        ("Central Coast & Newcastle", "Central to Newcastle"),
        ("South Coast", "Central to Kiama"),
        ("Southern Highlands", "Central to Goulburn/Moss Vale"),
        ("Hunter", "Newcastle to Dungog"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_line_has_route() {
        let routes = route_directory();
        assert_eq!(routes.get("T4"), Some(&"Cronulla to Bondi Junction"));
        assert_eq!(routes.get("Hunter"), Some(&"Newcastle to Dungog"));
    }

    #[test]
    fn test_unknown_line_is_absent() {
        let routes = route_directory();
        assert_eq!(routes.get("T6"), None);
    }
}
