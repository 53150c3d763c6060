// crates/promotions/src/domain/services/timezone_resolver.rs

use chrono::{DateTime, Offset, Utc, Weekday};
use chrono::{Datelike, Timelike};
use shared_kernel::domain::value_objects::{ClockTime, Timezone};
use shared_kernel::errors::Result;

use crate::domain::entities::TimezoneDescriptor;

/// Dérive la vue complète d'un fuseau à un instant donné.
/// Fonction pure : pour un même `(timezone, instant)` le résultat est
/// identique. À ré-invoquer à chaque besoin d'heure murale, jamais mis en
/// cache : l'offset d'un même identifiant IANA change aux transitions
/// d'heure d'été.
pub fn resolve(timezone: &Timezone, instant: DateTime<Utc>) -> TimezoneDescriptor {
    let local = instant.with_timezone(&timezone.to_tz());

    TimezoneDescriptor {
        timezone: timezone.clone(),
        utc_offset: format_utc_offset(local.offset().fix().local_minus_utc()),
        city_label: city_label(timezone.as_str()),
        region_label: region_label(timezone.as_str()),
        local_time_formatted: local.format("%-I:%M:%S %p").to_string(),
        local_date_formatted: local.format("%A, %B %-d, %Y").to_string(),
    }
}

/// Variante prenant l'identifiant brut ; échoue sur un identifiant IANA
/// inconnu (les appelants retombent alors sur le fuseau détecté)
pub fn resolve_id(timezone_id: &str, instant: DateTime<Utc>) -> Result<TimezoneDescriptor> {
    let timezone = Timezone::try_new(timezone_id)?;
    Ok(resolve(&timezone, instant))
}

/// Vue sélecteur : chaque fuseau de la liste résolu au même instant
pub fn resolve_all(timezones: &[Timezone], instant: DateTime<Utc>) -> Vec<TimezoneDescriptor> {
    timezones.iter().map(|tz| resolve(tz, instant)).collect()
}

/// Heure murale "HH:MM" de l'instant dans le fuseau
pub fn local_clock_time(timezone: &Timezone, instant: DateTime<Utc>) -> ClockTime {
    let local = instant.with_timezone(&timezone.to_tz());
    ClockTime::new_unchecked(local.hour() as u8, local.minute() as u8)
}

/// Jour de semaine local de l'instant dans le fuseau
pub fn local_weekday(timezone: &Timezone, instant: DateTime<Utc>) -> Weekday {
    instant.with_timezone(&timezone.to_tz()).weekday()
}

fn format_utc_offset(offset_seconds: i32) -> String {
    let sign = if offset_seconds >= 0 { '+' } else { '-' };
    let abs = offset_seconds.unsigned_abs();
    format!("{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
}

/// Dernier segment de l'identifiant, même pour les ids à trois segments
/// ("America/Argentina/Buenos_Aires" -> "Buenos Aires")
fn city_label(timezone_id: &str) -> String {
    match timezone_id.split_once('/') {
        Some((_, rest)) => rest.rsplit('/').next().unwrap_or(rest).replace('_', " "),
        None => timezone_id.to_string(),
    }
}

fn region_label(timezone_id: &str) -> String {
    timezone_id
        .split('/')
        .next()
        .unwrap_or("UTC")
        .to_string()
}
