/// Fallback file stem for titles with nothing usable left after sanitizing.
const DEFAULT_STEM: &str = "event";

/// Builds the suggested download filename for an event title.
///
/// Characters that are unsafe in file names or in a quoted
/// `Content-Disposition` parameter are replaced with `_`.
pub fn ics_filename(title: &str) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();

    if stem.chars().all(|c| c == '_' || c == '.') {
        return format!("{DEFAULT_STEM}.ics");
    }

    format!("{stem}.ics")
}

fn is_forbidden(c: char) -> bool {
    matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') || c.is_control()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_title_keeps_its_text() {
        assert_eq!(ics_filename("Captain's Dinner"), "Captain's Dinner.ics");
        assert_eq!(ics_filename("Opening; Party, Tonight"), "Opening; Party, Tonight.ics");
    }

    #[test]
    fn test_path_hostile_characters_are_replaced() {
        assert_eq!(ics_filename("../etc/passwd"), ".._etc_passwd.ics");
        assert_eq!(ics_filename("Say \"Cheese\""), "Say _Cheese_.ics");
        assert_eq!(ics_filename("Trivia\r\nNight"), "Trivia__Night.ics");
    }

    #[test]
    fn test_blank_title_falls_back_to_default() {
        assert_eq!(ics_filename(""), "event.ics");
        assert_eq!(ics_filename("   "), "event.ics");
        assert_eq!(ics_filename("//"), "event.ics");
        assert_eq!(ics_filename(".."), "event.ics");
    }
}
