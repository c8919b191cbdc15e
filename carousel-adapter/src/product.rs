use alloc::string::String;

/// One storefront product as supplied by the remote catalog.
///
/// The engine treats this as opaque payload; only `id` matters to it. `price`
/// drives the sort tabs, `price_text` is the preformatted display string.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub img: String,
    pub price: f64,
    pub price_text: String,
    pub rating: f32,
    pub rating_count: u32,
    pub url: String,
}

/// Sort orderings selectable in the storefront header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ProductTab {
    #[default]
    Top,
    Bestsellers,
    PriceAsc,
    PriceDesc,
}

impl ProductTab {
    /// Every tab, in display order. The first entry is the canonical default.
    pub const ALL: [ProductTab; 4] = [
        ProductTab::Top,
        ProductTab::Bestsellers,
        ProductTab::PriceAsc,
        ProductTab::PriceDesc,
    ];

    /// Parses an external tab value. Anything unknown falls back to the
    /// canonical first tab instead of erroring.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "top" => Self::Top,
            "bestsellers" => Self::Bestsellers,
            "price_asc" => Self::PriceAsc,
            "price_desc" => Self::PriceDesc,
            _ => Self::ALL[0],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bestsellers => "bestsellers",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
        }
    }
}

impl core::fmt::Display for ProductTab {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orders products for the active tab.
///
/// `Top` and `Bestsellers` keep the catalog order; the price tabs sort by
/// numeric price with ties keeping their relative order.
pub fn sort_products(products: &mut [Product], tab: ProductTab) {
    match tab {
        ProductTab::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        ProductTab::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        ProductTab::Top | ProductTab::Bestsellers => {}
    }
}
