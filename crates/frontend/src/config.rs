//! Fixed site configuration: the sales phone number and the company name.

pub const DEFAULT_PHONE: &str = "+2348126876435";
pub const DEFAULT_COMPANY: &str = "Limbo Works";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Phone number as displayed to visitors and copied to the clipboard.
    pub phone: String,
    pub company: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            phone: DEFAULT_PHONE.to_string(),
            company: DEFAULT_COMPANY.to_string(),
        }
    }
}

impl SiteConfig {
    /// `tel:` URI for the configured phone number.
    ///
    /// Example: "+1 (555) 014-2290" -> "tel:+15550142290"
    pub fn tel_uri(&self) -> String {
        format!("tel:{}", dial_digits(&self.phone))
    }
}

/// Keep digits and a leading `+`, drop formatting characters.
fn dial_digits(phone: &str) -> String {
    let trimmed = phone.trim();
    let mut out = String::with_capacity(trimmed.len());
    if trimmed.starts_with('+') {
        out.push('+');
    }
    out.extend(trimmed.chars().filter(|c| c.is_ascii_digit()));
    out
}
