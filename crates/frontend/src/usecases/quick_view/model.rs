use crate::config::SiteConfig;

/// Content of the quick-view dialog for one product model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickView {
    pub model: String,
    pub title: String,
    pub description: String,
}

impl QuickView {
    /// `None` for an empty or blank model identifier.
    pub fn for_model(model: &str, config: &SiteConfig) -> Option<Self> {
        if model.trim().is_empty() {
            return None;
        }
        Some(Self {
            model: model.to_string(),
            title: model.to_string(),
            description: format!(
                "{model} — Long-lasting, automated, engineered for reliability and excitement. \
                 Call {phone} to reserve.",
                phone = config.phone,
            ),
        })
    }
}

/// A `.product-card` as seen from one of its buttons.
pub trait ProductCard {
    /// Raw `data-model` attribute, if present.
    fn data_model(&self) -> Option<String>;
}

impl ProductCard for web_sys::Element {
    fn data_model(&self) -> Option<String> {
        self.get_attribute(MODEL_ATTRIBUTE)
    }
}

pub const MODEL_ATTRIBUTE: &str = "data-model";

/// Model identifier of the enclosing card; `None` without a card or a usable attribute.
pub fn card_model<C: ProductCard + ?Sized>(card: Option<&C>) -> Option<String> {
    card?.data_model().filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeCard(Option<&'static str>);

    impl ProductCard for FakeCard {
        fn data_model(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[test]
    fn test_heading_is_the_exact_model() {
        let config = SiteConfig::default();
        let qv = QuickView::for_model("Aurora X2 Pro", &config).unwrap();
        assert_eq!(qv.title, "Aurora X2 Pro");
        assert_eq!(
            qv.description,
            "Aurora X2 Pro — Long-lasting, automated, engineered for reliability and \
             excitement. Call +2348126876435 to reserve."
        );
    }

    #[test]
    fn test_blank_model_has_no_quick_view() {
        let config = SiteConfig::default();
        assert_eq!(QuickView::for_model("", &config), None);
        assert_eq!(QuickView::for_model("   ", &config), None);
    }

    #[test]
    fn test_card_model() {
        assert_eq!(card_model::<FakeCard>(None), None);
        assert_eq!(card_model(Some(&FakeCard(None))), None);
        assert_eq!(card_model(Some(&FakeCard(Some("")))), None);
        assert_eq!(
            card_model(Some(&FakeCard(Some("K-9")))),
            Some("K-9".to_string())
        );
    }
}
