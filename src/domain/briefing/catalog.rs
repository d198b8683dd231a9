//! ServiceCatalog - the selectable service offerings and their base prices.

use once_cell::sync::Lazy;

/// One selectable service offering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOffering {
    pub id: &'static str,
    /// Key of the card title in the UI string table.
    pub label_key: &'static str,
    /// Key of the card description in the UI string table.
    pub description_key: &'static str,
    /// Name used in operator-facing notifications.
    pub display_name: &'static str,
    /// Base price in whole euros.
    pub base_price: u32,
}

/// Static, immutable list of service offerings.
#[derive(Debug)]
pub struct ServiceCatalog {
    offerings: Vec<ServiceOffering>,
}

static CATALOG: Lazy<ServiceCatalog> = Lazy::new(|| ServiceCatalog {
    offerings: vec![
        offering("web-design", "service_web", "service_web_desc", "Web Design", 500),
        offering("branding", "service_branding", "service_branding_desc", "Branding", 400),
        offering(
            "social-media",
            "service_social",
            "service_social_desc",
            "Social Media",
            300,
        ),
        offering("seo", "service_seo", "service_seo_desc", "SEO", 350),
        offering(
            "e-commerce",
            "service_ecommerce",
            "service_ecommerce_desc",
            "E-commerce",
            800,
        ),
        offering(
            "content-creation",
            "service_content",
            "service_content_desc",
            "Content Creation",
            250,
        ),
    ],
});

fn offering(
    id: &'static str,
    label_key: &'static str,
    description_key: &'static str,
    display_name: &'static str,
    base_price: u32,
) -> ServiceOffering {
    ServiceOffering {
        id,
        label_key,
        description_key,
        display_name,
        base_price,
    }
}

impl ServiceCatalog {
    /// The process-wide catalog.
    pub fn global() -> &'static ServiceCatalog {
        &CATALOG
    }

    /// All offerings in display order.
    pub fn offerings(&self) -> &[ServiceOffering] {
        &self.offerings
    }

    pub fn find(&self, id: &str) -> Option<&ServiceOffering> {
        self.offerings.iter().find(|o| o.id == id)
    }

    /// Sum of base prices of the selected services; unknown ids count as 0.
    pub fn estimate<S: AsRef<str>>(&self, services: &[S]) -> u32 {
        services
            .iter()
            .filter_map(|id| self.find(id.as_ref()))
            .map(|o| o.base_price)
            .sum()
    }

    /// Human-readable names joined with `, `; unknown ids are shown verbatim.
    pub fn display_names<S: AsRef<str>>(&self, services: &[S]) -> String {
        services
            .iter()
            .map(|id| {
                let id = id.as_ref();
                self.find(id).map(|o| o.display_name).unwrap_or(id)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
