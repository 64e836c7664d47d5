use serde::{Deserialize, Serialize};

/// The social networks the store sells engagement for.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Tiktok,
    Youtube,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Instagram, Platform::Tiktok, Platform::Youtube];

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Tiktok => "TikTok",
            Platform::Youtube => "YouTube",
        }
    }

    /// CSS class suffix for the platform gradient badges.
    pub fn css_class(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PackageOption {
    pub quantity: u32,
    pub price: f64,
    pub package_id: &'static str,
}

/// A service is priced in exactly one of two ways. The enum makes the
/// invariant structural: there is no way to populate both modes.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Pricing {
    PerUnit {
        price_per_unit: f64,
        min_quantity: u32,
        max_quantity: u32,
    },
    Packages(&'static [PackageOption]),
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Service {
    /// Order id understood by the fulfillment webhook.
    pub id: &'static str,
    pub platform: Platform,
    pub name: &'static str,
    pub description: &'static str,
    pub pricing: Pricing,
}

impl Service {
    /// Quantity shown when the purchase dialog opens.
    pub fn default_quantity(&self) -> u32 {
        match self.pricing {
            Pricing::PerUnit { min_quantity, .. } => min_quantity,
            Pricing::Packages(options) => options.first().map(|pkg| pkg.quantity).unwrap_or(0),
        }
    }

    /// For per-unit services any input is forced into `[min, max]`. For
    /// package services only enumerated tier quantities are accepted, so
    /// an unknown value leaves the selection unchanged (`current`).
    pub fn adjust_quantity(&self, requested: u32, current: u32) -> u32 {
        match self.pricing {
            Pricing::PerUnit {
                min_quantity,
                max_quantity,
                ..
            } => requested.clamp(min_quantity, max_quantity),
            Pricing::Packages(options) => {
                if options.iter().any(|pkg| pkg.quantity == requested) {
                    requested
                } else {
                    current
                }
            }
        }
    }

    pub fn package(&self, quantity: u32) -> Option<&'static PackageOption> {
        match self.pricing {
            Pricing::Packages(options) => options.iter().find(|pkg| pkg.quantity == quantity),
            Pricing::PerUnit { .. } => None,
        }
    }

    /// Package tiers charge the listed price, never quantity times a rate.
    pub fn total_price(&self, quantity: u32) -> f64 {
        match self.pricing {
            Pricing::PerUnit { price_per_unit, .. } => price_per_unit * quantity as f64,
            Pricing::Packages(_) => self.package(quantity).map(|pkg| pkg.price).unwrap_or(0.0),
        }
    }

    /// Cheapest entry point, shown on the catalog cards ("a partir de").
    pub fn starting_price(&self) -> f64 {
        match self.pricing {
            Pricing::PerUnit { price_per_unit, .. } => price_per_unit,
            Pricing::Packages(options) => options.first().map(|pkg| pkg.price).unwrap_or(0.0),
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self.id {
            "5571" => "👥",
            "8952" => "❤️",
            "7320" => "🎬",
            "9390" => "🚀",
            "9225" => "👍",
            "9444" => "👁️",
            "yt-subscribers" => "🎯",
            "yt-views" => "▶️",
            "yt-likes" => "⭐",
            _ => "🛒",
        }
    }
}

const IG_FOLLOWER_PACKAGES: &[PackageOption] = &[
    PackageOption {
        quantity: 250,
        price: 4.90,
        package_id: "5571-250",
    },
    PackageOption {
        quantity: 500,
        price: 8.90,
        package_id: "5571-500",
    },
    PackageOption {
        quantity: 1000,
        price: 14.90,
        package_id: "5571-1000",
    },
    PackageOption {
        quantity: 2500,
        price: 32.90,
        package_id: "5571-2500",
    },
    PackageOption {
        quantity: 5000,
        price: 59.90,
        package_id: "5571-5000",
    },
];

pub const SERVICES: &[Service] = &[
    // Instagram
    Service {
        id: "5571",
        platform: Platform::Instagram,
        name: "Seguidores Instagram",
        description: "Aumente seu número de seguidores com perfis reais e ativos.",
        pricing: Pricing::Packages(IG_FOLLOWER_PACKAGES),
    },
    Service {
        id: "8952",
        platform: Platform::Instagram,
        name: "Curtidas Instagram",
        description: "Curtidas para suas fotos e vídeos. Aumenta o engajamento.",
        pricing: Pricing::PerUnit {
            price_per_unit: 0.02,
            min_quantity: 50,
            max_quantity: 10_000,
        },
    },
    Service {
        id: "7320",
        platform: Platform::Instagram,
        name: "Visualizações Reels",
        description: "Impulsione seus Reels com visualizações reais.",
        pricing: Pricing::PerUnit {
            price_per_unit: 0.01,
            min_quantity: 100,
            max_quantity: 100_000,
        },
    },
    // TikTok
    Service {
        id: "9390",
        platform: Platform::Tiktok,
        name: "Seguidores TikTok",
        description: "Seguidores reais para seu perfil TikTok.",
        pricing: Pricing::PerUnit {
            price_per_unit: 0.04,
            min_quantity: 100,
            max_quantity: 50_000,
        },
    },
    Service {
        id: "9225",
        platform: Platform::Tiktok,
        name: "Curtidas TikTok",
        description: "Curtidas para seus vídeos do TikTok.",
        pricing: Pricing::PerUnit {
            price_per_unit: 0.02,
            min_quantity: 50,
            max_quantity: 20_000,
        },
    },
    Service {
        id: "9444",
        platform: Platform::Tiktok,
        name: "Visualizações TikTok",
        description: "Aumente as visualizações dos seus vídeos.",
        pricing: Pricing::PerUnit {
            price_per_unit: 0.005,
            min_quantity: 500,
            max_quantity: 500_000,
        },
    },
    // YouTube (ids ainda não cadastrados no webhook)
    Service {
        id: "yt-subscribers",
        platform: Platform::Youtube,
        name: "Inscritos YouTube",
        description: "Aumente seus inscritos com qualidade e segurança.",
        pricing: Pricing::PerUnit {
            price_per_unit: 0.1,
            min_quantity: 50,
            max_quantity: 10_000,
        },
    },
    Service {
        id: "yt-views",
        platform: Platform::Youtube,
        name: "Visualizações YouTube",
        description: "Visualizações reais para seus vídeos.",
        pricing: Pricing::PerUnit {
            price_per_unit: 0.02,
            min_quantity: 100,
            max_quantity: 100_000,
        },
    },
    Service {
        id: "yt-likes",
        platform: Platform::Youtube,
        name: "Likes YouTube",
        description: "Curtidas para aumentar o engajamento dos vídeos.",
        pricing: Pricing::PerUnit {
            price_per_unit: 0.04,
            min_quantity: 50,
            max_quantity: 10_000,
        },
    },
];

pub fn services_for(platform: Platform) -> impl Iterator<Item = &'static Service> {
    SERVICES.iter().filter(move |service| service.platform == platform)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

/// pt-BR currency rendering: "1234.5" -> "1.234,50". The "R$ " prefix is
/// left to the markup.
pub fn format_brl(value: f64) -> String {
    let cents = (value * 100.0).round() as u64;
    format!("{},{:02}", group_thousands(cents / 100), cents % 100)
}

pub fn format_quantity(value: u32) -> String {
    group_thousands(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(id: &str) -> &'static Service {
        SERVICES
            .iter()
            .find(|service| service.id == id)
            .expect("unknown service id")
    }

    #[test]
    fn per_unit_quantity_is_clamped_to_bounds() {
        let followers = service("9390"); // min 100, max 50 000
        assert_eq!(followers.adjust_quantity(30, 100), 100);
        assert_eq!(followers.adjust_quantity(999_999, 100), 50_000);
        assert_eq!(followers.adjust_quantity(2_500, 100), 2_500);
        assert_eq!(followers.adjust_quantity(0, 100), 100);
    }

    #[test]
    fn per_unit_total_is_quantity_times_rate() {
        let likes = service("8952");
        assert!((likes.total_price(1_000) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn package_quantities_are_the_only_selectable_values() {
        let followers = service("5571");
        // valid tiers pass through, anything else keeps the selection
        assert_eq!(followers.adjust_quantity(1_000, 500), 1_000);
        assert_eq!(followers.adjust_quantity(750, 500), 500);
        assert!(followers.package(750).is_none());
    }

    #[test]
    fn package_total_is_the_listed_price_not_a_rate() {
        let followers = service("5571");
        assert_eq!(followers.total_price(500), 8.90);
        assert_eq!(followers.total_price(1_000), 14.90);
        // 1000 * (8.90 / 500) would be 17.80; the listed tier price wins
        assert!((followers.total_price(1_000) - 17.80).abs() > 1.0);
    }

    #[test]
    fn default_quantity_matches_pricing_mode() {
        assert_eq!(service("5571").default_quantity(), 250);
        assert_eq!(service("9444").default_quantity(), 500);
    }

    #[test]
    fn catalog_is_partitioned_by_platform() {
        assert_eq!(services_for(Platform::Instagram).count(), 3);
        assert_eq!(services_for(Platform::Tiktok).count(), 3);
        assert_eq!(services_for(Platform::Youtube).count(), 3);
        let total: usize = Platform::ALL
            .iter()
            .map(|platform| services_for(*platform).count())
            .sum();
        assert_eq!(total, SERVICES.len());
    }

    #[test]
    fn brl_formatting_uses_pt_br_separators() {
        assert_eq!(format_brl(8.90), "8,90");
        assert_eq!(format_brl(14.9), "14,90");
        assert_eq!(format_brl(0.0), "0,00");
        assert_eq!(format_brl(1_234.5), "1.234,50");
        assert_eq!(format_brl(2_500.0 * 0.005), "12,50");
    }

    #[test]
    fn quantity_formatting_groups_thousands() {
        assert_eq!(format_quantity(500), "500");
        assert_eq!(format_quantity(50_000), "50.000");
        assert_eq!(format_quantity(500_000), "500.000");
    }
}
