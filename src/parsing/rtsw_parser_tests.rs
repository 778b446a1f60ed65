#[cfg(test)]
mod tests {
    use crate::parsing::rtsw_parser::{parse_mag_json, parse_wind_json};
    use chrono::{TimeZone, Utc};

    /// Test parsing a wind product body with extra fields
    #[test]
    fn test_parse_wind_json_basic() {
        let json = r#"[
            {
                "time_tag": "2024-05-10T17:35:00.000Z",
                "active": true,
                "source": "ACE",
                "proton_speed": 447.2,
                "proton_density": 4.1,
                "proton_temperature": 90000
            },
            {
                "time_tag": "2024-05-10T17:34:00.000Z",
                "active": true,
                "source": "ACE",
                "proton_speed": 451.8,
                "proton_density": 4.0,
                "proton_temperature": 91000
            }
        ]"#;

        let samples = parse_wind_json(json).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].value, Some(447.2));
        assert_eq!(samples[1].value, Some(451.8));
        assert!(samples[0].active);
    }

    /// Test parsing a magnetometer product body
    #[test]
    fn test_parse_mag_json_basic() {
        let json = r#"[
            {
                "time_tag": "2024-05-10T17:35:00.000Z",
                "active": true,
                "bx_gsm": 1.2,
                "by_gsm": -0.4,
                "bz_gsm": -6.3,
                "bt": 6.5
            }
        ]"#;

        let samples = parse_mag_json(json).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].value, Some(-6.3));
    }

    /// Test that the active flag accepts both bool and 0/1 encodings
    #[test]
    fn test_active_flag_bool_or_int() {
        let json = r#"[
            {"time_tag": "2024-05-10T17:35:00Z", "active": 1, "proton_speed": 400.0},
            {"time_tag": "2024-05-10T17:34:00Z", "active": 0, "proton_speed": 400.0},
            {"time_tag": "2024-05-10T17:33:00Z", "active": false, "proton_speed": 400.0}
        ]"#;

        let samples = parse_wind_json(json).unwrap();
        assert!(samples[0].active);
        assert!(!samples[1].active);
        assert!(!samples[2].active);
    }

    /// Test that an out-of-range integer flag is rejected
    #[test]
    fn test_active_flag_rejects_other_integers() {
        let json = r#"[
            {"time_tag": "2024-05-10T17:35:00Z", "active": 2, "proton_speed": 400.0}
        ]"#;

        assert!(parse_wind_json(json).is_err());
    }

    /// Test the accepted time_tag formats
    #[test]
    fn test_time_tag_formats() {
        let json = r#"[
            {"time_tag": "2024-05-10T17:35:00Z", "active": true, "proton_speed": 1.0},
            {"time_tag": "2024-05-10T17:34:00.000", "active": true, "proton_speed": 2.0},
            {"time_tag": "2024-05-10 17:33:00", "active": true, "proton_speed": 3.0}
        ]"#;

        let samples = parse_wind_json(json).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(
            samples[0].time_tag,
            Utc.with_ymd_and_hms(2024, 5, 10, 17, 35, 0).unwrap()
        );
        assert_eq!(
            samples[2].time_tag,
            Utc.with_ymd_and_hms(2024, 5, 10, 17, 33, 0).unwrap()
        );
    }

    /// Test that an unparseable time_tag is an error
    #[test]
    fn test_bad_time_tag_is_error() {
        let json = r#"[
            {"time_tag": "yesterday", "active": true, "proton_speed": 1.0}
        ]"#;

        let result = parse_wind_json(json);
        assert!(result.is_err());
        let error_msg = format!("{:#}", result.unwrap_err());
        assert!(
            error_msg.contains("time_tag"),
            "Error should mention the tag: {}",
            error_msg
        );
    }

    /// Test that a missing quantity becomes None rather than an error
    #[test]
    fn test_null_quantity_becomes_none() {
        let json = r#"[
            {"time_tag": "2024-05-10T17:35:00Z", "active": true, "proton_speed": null},
            {"time_tag": "2024-05-10T17:34:00Z", "active": true}
        ]"#;

        let samples = parse_wind_json(json).unwrap();
        assert_eq!(samples[0].value, None);
        assert_eq!(samples[1].value, None);
    }

    /// Test that samples come back newest first regardless of wire order
    #[test]
    fn test_samples_sorted_newest_first() {
        let json = r#"[
            {"time_tag": "2024-05-10T17:33:00Z", "active": true, "proton_speed": 3.0},
            {"time_tag": "2024-05-10T17:35:00Z", "active": true, "proton_speed": 1.0},
            {"time_tag": "2024-05-10T17:34:00Z", "active": true, "proton_speed": 2.0}
        ]"#;

        let samples = parse_wind_json(json).unwrap();
        let values: Vec<_> = samples.iter().map(|s| s.value.unwrap()).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    /// Test that a non-array body is rejected
    #[test]
    fn test_non_array_body_is_error() {
        let json = r#"{"error": "service unavailable"}"#;
        assert!(parse_wind_json(json).is_err());
        assert!(parse_mag_json(json).is_err());
    }

    /// Test an empty product body
    #[test]
    fn test_empty_array_parses() {
        let samples = parse_wind_json("[]").unwrap();
        assert!(samples.is_empty());
    }
}
