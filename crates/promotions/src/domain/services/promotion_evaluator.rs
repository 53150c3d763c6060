// crates/promotions/src/domain/services/promotion_evaluator.rs

use chrono::{DateTime, Utc, Weekday};
use shared_kernel::domain::value_objects::Timezone;

use crate::domain::catalog::PromotionCatalog;
use crate::domain::entities::{PromotionDefinition, RegionalBusinessHours, RegionalVoucher};
use crate::domain::services::timezone_resolver::{local_clock_time, local_weekday};

/// Promotions du catalogue actives à `instant` dans `timezone`.
/// Une entrée est retenue si le fuseau lui est applicable, si le jour de
/// semaine local figure dans ses jours actifs et si l'heure murale locale
/// tombe dans sa fenêtre (bornes inclusives : une promotion est encore
/// active pile à son heure de fin).
///
/// Fonction pure, ordre de déclaration du catalogue préservé.
pub fn active_promotions<'a>(
    catalog: &'a PromotionCatalog,
    timezone: &Timezone,
    instant: DateTime<Utc>,
) -> Vec<&'a PromotionDefinition> {
    let weekday = local_weekday(timezone, instant);
    let now = local_clock_time(timezone, instant);

    catalog
        .entries()
        .iter()
        .filter(|p| p.applies_to(timezone))
        .filter(|p| p.active_days.contains(weekday))
        .filter(|p| p.window.contains(now))
        .collect()
}

/// Prochaine promotion à venir dans `timezone`.
///
/// Parcourt les entrées applicables triées par heure de début : d'abord
/// celles d'aujourd'hui démarrant strictement après l'heure locale, sinon
/// la première de demain. La recherche ne va pas au-delà de demain : une
/// promotion dont le prochain jour actif est à 2+ jours n'est pas trouvée
/// (comportement historique du produit, conservé tel quel).
pub fn next_promotion<'a>(
    catalog: &'a PromotionCatalog,
    timezone: &Timezone,
    instant: DateTime<Utc>,
) -> Option<&'a PromotionDefinition> {
    let today = local_weekday(timezone, instant);
    let now = local_clock_time(timezone, instant);

    let mut upcoming: Vec<&PromotionDefinition> = catalog
        .entries()
        .iter()
        .filter(|p| p.applies_to(timezone))
        .collect();
    upcoming.sort_by_key(|p| p.window.start());

    // 1. Le reste de la journée
    if let Some(found) = upcoming
        .iter()
        .find(|p| p.active_days.contains(today) && p.window.start() > now)
    {
        return Some(found);
    }

    // 2. La première de demain
    let tomorrow = today.succ();
    upcoming
        .into_iter()
        .find(|p| p.active_days.contains(tomorrow))
}

/// Durée avant la prochaine promotion, rendue "Xh Ym" (ou "Ym" sous
/// l'heure). `None` quand aucune promotion à venir n'est trouvée.
pub fn time_until_next(
    catalog: &PromotionCatalog,
    timezone: &Timezone,
    instant: DateTime<Utc>,
) -> Option<String> {
    let next = next_promotion(catalog, timezone, instant)?;
    let today = local_weekday(timezone, instant);
    let now = local_clock_time(timezone, instant);

    let start = next.window.start().minutes_from_midnight();
    let current = now.minutes_from_midnight();

    let minutes_until = if next.active_days.contains(today) && next.window.start() > now {
        start - current
    } else {
        // Demain : fin de journée + début de la fenêtre
        (24 * 60 - current) + start
    };

    Some(format_minutes(minutes_until))
}

fn format_minutes(total: u32) -> String {
    let hours = total / 60;
    let minutes = total % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Le fuseau est-il en horaires d'ouverture à `instant` ?
/// Sans entrée configurée pour le fuseau, on considère la région ouverte.
/// Le week-end, l'absence d'horaires de week-end signifie fermé.
pub fn is_business_hours(
    table: &[RegionalBusinessHours],
    timezone: &Timezone,
    instant: DateTime<Utc>,
) -> bool {
    let Some(hours) = table.iter().find(|bh| &bh.timezone == timezone) else {
        return true;
    };

    let weekday = local_weekday(timezone, instant);
    let now = local_clock_time(timezone, instant);

    if matches!(weekday, Weekday::Sat | Weekday::Sun) {
        return hours
            .weekend_hours
            .map(|w| w.contains(now))
            .unwrap_or(false);
    }

    hours.weekday_hours.contains(now)
}

/// Bons disponibles à `instant` dans `timezone`.
/// Les bons non régionaux passent toujours ; les régionaux exigent le bon
/// fuseau et, quand une plage est configurée, l'heure locale dedans.
pub fn available_regional_vouchers<'a>(
    vouchers: &'a [RegionalVoucher],
    timezone: &Timezone,
    instant: DateTime<Utc>,
) -> Vec<&'a RegionalVoucher> {
    let now = local_clock_time(timezone, instant);

    vouchers
        .iter()
        .filter(|v| {
            if !v.is_regional {
                return true;
            }
            if !v.timezones.contains(timezone) {
                return false;
            }
            match v.availability {
                Some(window) => window.contains(now),
                None => true,
            }
        })
        .collect()
}

/// Formatage relatif d'un instant passé ("Just now", "5 minutes ago", ...)
pub fn relative_time(instant: DateTime<Utc>, reference: DateTime<Utc>) -> String {
    let seconds = (reference - instant).num_seconds().max(0);

    if seconds < 60 {
        "Just now".to_string()
    } else if seconds < 3600 {
        let minutes = seconds / 60;
        format!("{} minute{} ago", minutes, plural(minutes))
    } else if seconds < 86_400 {
        let hours = seconds / 3600;
        format!("{} hour{} ago", hours, plural(hours))
    } else {
        let days = seconds / 86_400;
        format!("{} day{} ago", days, plural(days))
    }
}

fn plural(n: i64) -> &'static str {
    if n != 1 {
        "s"
    } else {
        ""
    }
}
