// crates/promotions/src/domain/services/timezone_resolver_test.rs

#[cfg(test)]
mod tests {
    use chrono::{Offset, TimeZone, Utc, Weekday};
    use shared_kernel::domain::value_objects::Timezone;
    use shared_kernel::errors::DomainError;

    use crate::domain::services::timezone_resolver::{
        local_clock_time, local_weekday, resolve, resolve_all, resolve_id,
    };

    fn tz(id: &str) -> Timezone {
        Timezone::try_new(id).unwrap()
    }

    #[test]
    fn test_offset_in_winter_new_york() {
        // 16 janvier 2024, heure d'hiver : EST = UTC-5
        let instant = Utc.with_ymd_and_hms(2024, 1, 16, 23, 0, 0).unwrap();
        let descriptor = resolve(&tz("America/New_York"), instant);
        assert_eq!(descriptor.utc_offset, "-05:00");
    }

    #[test]
    fn test_offset_shifts_across_dst_for_same_identifier() {
        let zone = tz("America/New_York");
        let winter = Utc.with_ymd_and_hms(2024, 1, 16, 12, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2024, 7, 16, 12, 0, 0).unwrap();

        assert_eq!(resolve(&zone, winter).utc_offset, "-05:00");
        assert_eq!(resolve(&zone, summer).utc_offset, "-04:00");
    }

    #[test]
    fn test_half_hour_offset_is_formatted() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 16, 12, 0, 0).unwrap();
        let descriptor = resolve(&tz("Asia/Kolkata"), instant);
        assert_eq!(descriptor.utc_offset, "+05:30");
    }

    #[test]
    fn test_offset_round_trips_against_chrono_tz() {
        // Propriété : l'offset formaté se re-dérive depuis chrono-tz
        let instant = Utc.with_ymd_and_hms(2024, 7, 16, 12, 0, 0).unwrap();
        for id in ["Asia/Tokyo", "Europe/Paris", "Pacific/Auckland", "UTC"] {
            let zone = tz(id);
            let descriptor = resolve(&zone, instant);

            let seconds = instant
                .with_timezone(&zone.to_tz())
                .offset()
                .fix()
                .local_minus_utc();
            let sign = if seconds >= 0 { '+' } else { '-' };
            let abs = seconds.unsigned_abs();
            let expected = format!("{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60);

            assert_eq!(descriptor.utc_offset, expected, "offset mismatch for {id}");
        }
    }

    #[test]
    fn test_city_and_region_labels() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 16, 12, 0, 0).unwrap();

        let ny = resolve(&tz("America/New_York"), instant);
        assert_eq!(ny.city_label, "New York");
        assert_eq!(ny.region_label, "America");

        let utc = resolve(&Timezone::default(), instant);
        assert_eq!(utc.city_label, "UTC");
        assert_eq!(utc.region_label, "UTC");
    }

    #[test]
    fn test_city_label_takes_final_segment_of_nested_ids() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 16, 12, 0, 0).unwrap();
        let descriptor = resolve(&tz("America/Argentina/Buenos_Aires"), instant);
        assert_eq!(descriptor.city_label, "Buenos Aires");
        assert_eq!(descriptor.region_label, "America");
    }

    #[test]
    fn test_localized_time_and_date_formatting() {
        // 23:00 UTC = 18:00 EST, mardi 16 janvier
        let instant = Utc.with_ymd_and_hms(2024, 1, 16, 23, 0, 0).unwrap();
        let descriptor = resolve(&tz("America/New_York"), instant);
        assert_eq!(descriptor.local_time_formatted, "6:00:00 PM");
        assert_eq!(descriptor.local_date_formatted, "Tuesday, January 16, 2024");
    }

    #[test]
    fn test_local_clock_time_and_weekday() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 16, 23, 0, 0).unwrap();
        let zone = tz("America/New_York");
        assert_eq!(local_clock_time(&zone, instant).to_string(), "18:00");
        assert_eq!(local_weekday(&zone, instant), Weekday::Tue);

        // Le même instant est déjà mercredi à Tokyo
        assert_eq!(local_weekday(&tz("Asia/Tokyo"), instant), Weekday::Wed);
    }

    #[test]
    fn test_resolve_all_keeps_list_order_and_shares_the_instant() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 16, 12, 0, 0).unwrap();
        let zones = crate::domain::catalog::common_timezones();

        let descriptors = resolve_all(&zones, instant);

        assert_eq!(descriptors.len(), zones.len());
        for (zone, descriptor) in zones.iter().zip(&descriptors) {
            assert_eq!(&descriptor.timezone, zone);
        }
    }

    #[test]
    fn test_unknown_identifier_fails_with_invalid_timezone() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 16, 12, 0, 0).unwrap();
        let result = resolve_id("Not/A_Zone", instant);
        assert!(matches!(result, Err(DomainError::InvalidTimezone { .. })));
    }

    #[test]
    fn test_resolve_is_referentially_transparent() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 10, 6, 30, 0).unwrap();
        let zone = tz("Europe/Paris");
        assert_eq!(resolve(&zone, instant), resolve(&zone, instant));
    }
}
