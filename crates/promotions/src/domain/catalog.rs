// crates/promotions/src/domain/catalog.rs

use shared_kernel::domain::value_objects::{ClockTime, DiscountPercent, Timezone};

use crate::domain::entities::{PromotionDefinition, RegionalBusinessHours, RegionalVoucher};
use crate::domain::value_objects::{ActiveDays, ActiveWindow};

/// Catalogue statique des promotions planifiées.
/// L'ordre de déclaration est significatif : l'évaluateur le préserve
/// tel quel dans ses résultats (aucun tri implicite).
#[derive(Debug, Clone)]
pub struct PromotionCatalog {
    entries: Vec<PromotionDefinition>,
}

impl PromotionCatalog {
    pub fn new(entries: Vec<PromotionDefinition>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PromotionDefinition] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PromotionCatalog {
    /// Les quatre promotions de production
    fn default() -> Self {
        Self::new(vec![
            PromotionDefinition {
                id: "happy-hour-us".into(),
                name: "Happy Hour Special".into(),
                description: "50% off all dining vouchers".into(),
                discount: DiscountPercent::new_unchecked(50),
                window: ActiveWindow::new_unchecked(
                    ClockTime::new_unchecked(17, 0),
                    ClockTime::new_unchecked(19, 0),
                ),
                active_days: ActiveDays::weekdays(),
                timezones: us_timezones(),
                voucher_categories: vec!["dining".into(), "restaurant".into()],
            },
            PromotionDefinition {
                id: "lunch-rush-europe".into(),
                name: "Lunch Rush Deal".into(),
                description: "30% off lunch vouchers".into(),
                discount: DiscountPercent::new_unchecked(30),
                window: ActiveWindow::new_unchecked(
                    ClockTime::new_unchecked(12, 0),
                    ClockTime::new_unchecked(14, 0),
                ),
                active_days: ActiveDays::weekdays(),
                timezones: vec![
                    Timezone::new_unchecked("Europe/London"),
                    Timezone::new_unchecked("Europe/Paris"),
                    Timezone::new_unchecked("Europe/Berlin"),
                ],
                voucher_categories: vec!["dining".into(), "lunch".into()],
            },
            PromotionDefinition {
                id: "weekend-shopping-asia".into(),
                name: "Weekend Shopping Spree".into(),
                description: "25% off retail vouchers".into(),
                discount: DiscountPercent::new_unchecked(25),
                window: ActiveWindow::new_unchecked(
                    ClockTime::new_unchecked(10, 0),
                    ClockTime::new_unchecked(18, 0),
                ),
                active_days: ActiveDays::weekend(),
                timezones: vec![
                    Timezone::new_unchecked("Asia/Tokyo"),
                    Timezone::new_unchecked("Asia/Shanghai"),
                    Timezone::new_unchecked("Asia/Dubai"),
                ],
                voucher_categories: vec!["shopping".into(), "retail".into()],
            },
            PromotionDefinition {
                id: "morning-coffee-global".into(),
                name: "Morning Coffee Boost".into(),
                description: "20% off coffee vouchers".into(),
                discount: DiscountPercent::new_unchecked(20),
                window: ActiveWindow::new_unchecked(
                    ClockTime::new_unchecked(7, 0),
                    ClockTime::new_unchecked(10, 0),
                ),
                active_days: ActiveDays::weekdays(),
                timezones: vec![
                    Timezone::new_unchecked("America/New_York"),
                    Timezone::new_unchecked("Europe/London"),
                    Timezone::new_unchecked("Asia/Tokyo"),
                    Timezone::new_unchecked("Australia/Sydney"),
                ],
                voucher_categories: vec!["coffee".into(), "beverage".into()],
            },
        ])
    }
}

fn us_timezones() -> Vec<Timezone> {
    vec![
        Timezone::new_unchecked("America/New_York"),
        Timezone::new_unchecked("America/Chicago"),
        Timezone::new_unchecked("America/Denver"),
        Timezone::new_unchecked("America/Los_Angeles"),
    ]
}

/// Horaires d'ouverture par région commerciale
pub fn default_business_hours() -> Vec<RegionalBusinessHours> {
    fn window(sh: u8, sm: u8, eh: u8, em: u8) -> ActiveWindow {
        ActiveWindow::new_unchecked(
            ClockTime::new_unchecked(sh, sm),
            ClockTime::new_unchecked(eh, em),
        )
    }

    vec![
        RegionalBusinessHours {
            timezone: Timezone::new_unchecked("America/New_York"),
            region: "Eastern US".into(),
            weekday_hours: window(9, 0, 18, 0),
            weekend_hours: Some(window(10, 0, 16, 0)),
        },
        RegionalBusinessHours {
            timezone: Timezone::new_unchecked("Europe/London"),
            region: "UK".into(),
            weekday_hours: window(9, 0, 17, 0),
            weekend_hours: Some(window(10, 0, 15, 0)),
        },
        RegionalBusinessHours {
            timezone: Timezone::new_unchecked("Asia/Tokyo"),
            region: "Japan".into(),
            weekday_hours: window(9, 0, 18, 0),
            weekend_hours: Some(window(10, 0, 17, 0)),
        },
        RegionalBusinessHours {
            timezone: Timezone::new_unchecked("Australia/Sydney"),
            region: "Australia".into(),
            weekday_hours: window(8, 30, 17, 30),
            weekend_hours: Some(window(9, 0, 16, 0)),
        },
    ]
}

/// Bons régionaux avec plages de disponibilité locales
pub fn default_regional_vouchers() -> Vec<RegionalVoucher> {
    fn window(sh: u8, sm: u8, eh: u8, em: u8) -> ActiveWindow {
        ActiveWindow::new_unchecked(
            ClockTime::new_unchecked(sh, sm),
            ClockTime::new_unchecked(eh, em),
        )
    }

    vec![
        RegionalVoucher {
            voucher_id: "local-restaurant-ny".into(),
            title: "NYC Local Eateries".into(),
            timezones: vec![Timezone::new_unchecked("America/New_York")],
            availability: Some(window(11, 0, 22, 0)),
            is_regional: true,
        },
        RegionalVoucher {
            voucher_id: "london-pubs".into(),
            title: "London Pub Experience".into(),
            timezones: vec![Timezone::new_unchecked("Europe/London")],
            availability: Some(window(17, 0, 23, 0)),
            is_regional: true,
        },
        RegionalVoucher {
            voucher_id: "tokyo-ramen".into(),
            title: "Tokyo Ramen Tours".into(),
            timezones: vec![Timezone::new_unchecked("Asia/Tokyo")],
            availability: Some(window(12, 0, 21, 0)),
            is_regional: true,
        },
    ]
}

/// Les fuseaux proposés par défaut dans le sélecteur
pub fn common_timezones() -> Vec<Timezone> {
    [
        "America/New_York",
        "America/Chicago",
        "America/Denver",
        "America/Los_Angeles",
        "Europe/London",
        "Europe/Paris",
        "Europe/Berlin",
        "Asia/Tokyo",
        "Asia/Shanghai",
        "Asia/Dubai",
        "Australia/Sydney",
        "Pacific/Auckland",
    ]
    .into_iter()
    .map(Timezone::new_unchecked)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_kernel::domain::value_objects::ValueObject;

    #[test]
    fn test_default_catalog_data_is_internally_valid() {
        let catalog = PromotionCatalog::default();
        assert_eq!(catalog.entries().len(), 4);

        for entry in catalog.entries() {
            entry.discount.validate().unwrap();
            entry.window.validate().unwrap();
            for tz in &entry.timezones {
                tz.validate().unwrap();
            }
        }
        for tz in common_timezones() {
            tz.validate().unwrap();
        }
    }

    #[test]
    fn test_declaration_order_is_preserved() {
        let catalog = PromotionCatalog::default();
        let ids: Vec<&str> = catalog.entries().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "happy-hour-us",
                "lunch-rush-europe",
                "weekend-shopping-asia",
                "morning-coffee-global"
            ]
        );
    }
}
