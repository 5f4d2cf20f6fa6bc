//! Email address utilities

/// Mask an email address for logging, keeping the first character of the
/// local part and the full domain: `jane@example.com` -> `j***@example.com`.
pub fn mask_email(email: &str) -> String {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, domain)
        }
        None if email.is_empty() => String::new(),
        None => "***".to_string(),
    }
}
