pub const INVITE_INFO_TEMPLATE: &str = include_str!("invite_info.html");

pub const INVITE_INFO_SUBJECT: &str = "Network GPT Ağına Eklendiğiniz Bildirimi";

const FALLBACK_CONTACT_NAME: &str = "Değerli kullanıcı";
const FALLBACK_INVITER_NAME: &str = "Bir arkadaşınız";

/// Render the invite notification body. Empty names fall back the same way
/// missing ones do. Substitution is literal.
pub fn render_invite_info(contact_name: Option<&str>, inviter_name: Option<&str>) -> String {
    INVITE_INFO_TEMPLATE
        .replace(
            "{{CONTACT_NAME}}",
            contact_name.filter(|s| !s.is_empty()).unwrap_or(FALLBACK_CONTACT_NAME),
        )
        .replace(
            "{{INVITER_NAME}}",
            inviter_name.filter(|s| !s.is_empty()).unwrap_or(FALLBACK_INVITER_NAME),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_substituted() {
        let html = render_invite_info(Some("Ayşe Yılmaz"), Some("Mehmet Demir"));

        assert!(html.contains("Ayşe Yılmaz"));
        assert!(html.contains("Mehmet Demir"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_missing_names_use_fallbacks() {
        let html = render_invite_info(None, None);

        assert!(html.contains("Değerli kullanıcı"));
        assert!(html.contains("Bir arkadaşınız"));
    }

    #[test]
    fn test_empty_names_use_fallbacks() {
        let html = render_invite_info(Some(""), Some(""));

        assert!(html.contains("Değerli kullanıcı"));
        assert!(html.contains("Bir arkadaşınız"));
    }
}
