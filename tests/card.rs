#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use sojjo_airquality_card::*;

    fn configured(config: CardConfig) -> SojjoAirQualityCard {
        let mut card = SojjoAirQualityCard::new();
        card.set_config(Some(config)).unwrap();
        card
    }

    fn air_quality(view: Option<CardView>) -> AirQualityView {
        match view {
            Some(CardView::AirQuality(view)) => view,
            other => panic!("expected an air quality view, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_config_is_rejected() {
        let mut card = SojjoAirQualityCard::new();
        let err = card.set_config(None).unwrap_err();
        assert_eq!(
            err,
            CardError::InvalidConfiguration("Invalid configuration".to_string())
        );
        assert!(card.config().is_none());
    }

    #[test]
    fn test_config_is_stored_as_given() {
        let config = CardConfig::new("sensor.voc").with_name("Office");
        let card = configured(config.clone());
        assert_eq!(card.config(), Some(&config));

        // The stub of a new card is accepted too.
        configured(SojjoAirQualityCard::get_stub_config());
    }

    struct Dashboard(Rc<Cell<bool>>);

    impl Lovelace for Dashboard {
        fn set_edit_mode(&mut self, enabled: bool) {
            self.0.set(enabled);
        }
    }

    #[test]
    fn test_gui_flag_enters_edit_mode() {
        let edit_mode = Rc::new(Cell::new(false));
        let mut card = SojjoAirQualityCard::with_lovelace(Box::new(Dashboard(edit_mode.clone())));

        card.set_config(Some(CardConfig::new("sensor.voc"))).unwrap();
        assert!(!edit_mode.get());

        let config = CardConfig {
            test_gui: true,
            ..CardConfig::new("sensor.voc")
        };
        card.set_config(Some(config)).unwrap();
        assert!(edit_mode.get());
    }

    #[test]
    fn test_excellent_reading() {
        let hass = Hass::new().with_state(EntityState::new("sensor.voc", "100"));
        let view = air_quality(configured(CardConfig::new("sensor.voc")).render(&hass));

        assert_eq!(view.band, Some(VocBand::Excellent));
        assert_eq!(view.active_leaves(), 5);
        assert_eq!(view.message, "Excellent: Air Ok!");
        assert_eq!(view.value_text().as_deref(), Some("100 ppb"));
        assert_eq!(view.label, "SojjoAirQuality: sensor.voc");
        assert_eq!(view.header, None);
        assert_eq!(view.battery, None);
        assert!(!view.has_hold);
        assert!(!view.has_double_click);
    }

    #[test]
    fn test_hazardous_reading() {
        let hass = Hass::new().with_state(EntityState::new("sensor.voc", "6000"));
        let view = air_quality(configured(CardConfig::new("sensor.voc")).render(&hass));

        assert_eq!(view.band, Some(VocBand::Hazardous));
        assert_eq!(view.leaves, [LeafState::Dim; 5]);
        assert_eq!(view.message, "Danger: Leave the area!!!");
        assert_eq!(view.value_text().as_deref(), Some("6000 ppb"));
    }

    #[test]
    fn test_language_and_unit_follow_host() {
        let hass = Hass::new().with_language("fr").with_state(
            EntityState::new("sensor.voc", "412.5")
                .with_attribute("unit_of_measurement", serde_json::json!("µg/m³")),
        );
        let view = air_quality(configured(CardConfig::new("sensor.voc")).render(&hass));

        assert_eq!(view.band, Some(VocBand::Moderate));
        assert_eq!(view.message, "Moyen : Ventilation intensifiée recommandée");
        assert_eq!(view.value_text().as_deref(), Some("412.5 µg/m³"));
    }

    #[test]
    fn test_header_and_battery() {
        let hass = Hass::new()
            .with_state(EntityState::new("sensor.voc", "200"))
            .with_state(EntityState::new("sensor.voc_battery", "45"));
        let config = CardConfig::new("sensor.voc")
            .with_name("Bedroom")
            .with_battery_entity("sensor.voc_battery");
        let view = air_quality(configured(config).render(&hass));

        assert_eq!(view.header.as_deref(), Some("Bedroom"));
        assert_eq!(view.battery, Some(BatteryIcon::Battery40));
        assert_eq!(view.active_leaves(), 4);
    }

    #[test]
    fn test_unavailable_entity() {
        let hass = Hass::new().with_state(EntityState::new("sensor.voc", "unavailable"));

        let view = air_quality(configured(CardConfig::new("sensor.voc")).render(&hass));
        assert_eq!(view.band, None);
        assert_eq!(view.value, ValueDisplay::Unavailable);
        assert_eq!(view.active_leaves(), 0);
        assert_eq!(view.message, "No reading from sensor.voc");

        let view = air_quality(configured(CardConfig::new("sensor.other")).render(&hass));
        assert_eq!(view.message, "Entity not available: sensor.other");

        let view = air_quality(configured(CardConfig::new("not an entity")).render(&hass));
        assert_eq!(view.message, "Invalid entity id: not an entity");

        let view = air_quality(configured(CardConfig::default()).render(&hass));
        assert_eq!(view.message, "No entity defined");
        assert_eq!(view.label, "SojjoAirQuality: No Entity Defined");
    }

    // Editors write an empty string when a field is cleared.
    #[test]
    fn test_empty_entity_counts_as_unset() {
        let hass = Hass::new().with_state(EntityState::new("sensor.voc", "100"));
        let config = CardConfig::new("").with_battery_entity("");
        let card = configured(config);

        let view = air_quality(card.render(&hass));
        assert_eq!(view.label, "SojjoAirQuality: No Entity Defined");
        assert_eq!(view.message, "No entity defined");
        assert_eq!(view.value, ValueDisplay::Unavailable);
        assert_eq!(view.battery, None);

        let old = hass.clone();
        let changed = ChangedProps {
            config_changed: false,
            old_hass: Some(&old),
        };
        let updated = Hass::new().with_state(EntityState::new("sensor.voc", "900"));
        assert!(!card.should_update(&changed, &updated));
    }

    #[test]
    fn test_read_voc_errors() {
        let hass = Hass::new()
            .with_state(EntityState::new("sensor.voc", " 250 "))
            .with_state(EntityState::new("sensor.nan", "NaN"));

        let reading = read_voc(&hass, &CardConfig::new("sensor.voc")).unwrap();
        assert_eq!(reading.value, 250.0);
        assert_eq!(reading.band, VocBand::Good);
        assert_eq!(reading.unit, DEFAULT_VOC_UNIT);

        assert_eq!(
            read_voc(&hass, &CardConfig::new("sensor.nan")),
            Err(ReadingError::NotNumeric {
                entity_id: "sensor.nan".to_string(),
                state: "NaN".to_string()
            })
        );
        assert_eq!(
            read_voc(&hass, &CardConfig::default()),
            Err(ReadingError::EntityNotConfigured)
        );
        assert_eq!(
            read_voc(&hass, &CardConfig::new("Sensor.VOC")),
            Err(ReadingError::InvalidEntityId("Sensor.VOC".to_string()))
        );
    }

    #[test]
    fn test_warning_and_error_short_circuit() {
        // No entity state at all, the flags must not read it.
        let hass = Hass::new();

        let config = CardConfig {
            show_warning: true,
            ..CardConfig::new("sensor.voc")
        };
        assert_eq!(
            configured(config).render(&hass),
            Some(CardView::Warning("Show Warning".to_string()))
        );

        let config = CardConfig {
            show_error: true,
            ..CardConfig::new("sensor.voc")
        };
        let view = configured(config.clone()).render(&hass);
        assert_eq!(
            view,
            Some(CardView::Error(ErrorCard {
                error: "Show Error".to_string(),
                orig_config: config,
            }))
        );
    }

    #[test]
    fn test_render_needs_config() {
        assert_eq!(SojjoAirQualityCard::new().render(&Hass::new()), None);
    }

    #[test]
    fn test_should_update() {
        let voc = EntityState::new("sensor.voc", "100");
        let battery = EntityState::new("sensor.voc_battery", "80");
        let old = Hass::new().with_state(voc.clone()).with_state(battery.clone());

        let unconfigured = SojjoAirQualityCard::new();
        let changed = ChangedProps {
            config_changed: true,
            old_hass: None,
        };
        assert!(!unconfigured.should_update(&changed, &old));

        let card = configured(CardConfig::new("sensor.voc").with_battery_entity("sensor.voc_battery"));
        assert!(card.should_update(&changed, &old));
        // Neither the config nor the host state changed.
        assert!(!card.should_update(&ChangedProps::default(), &old));

        let unrelated = old
            .clone()
            .with_state(EntityState::new("sensor.kitchen_temperature", "21"));
        let changed = ChangedProps {
            config_changed: false,
            old_hass: Some(&old),
        };
        assert!(!card.should_update(&changed, &unrelated));

        let mut voc_update = voc.clone();
        voc_update.state = "200".to_string();
        assert!(card.should_update(&changed, &old.clone().with_state(voc_update)));

        let mut battery_update = battery.clone();
        battery_update.state = "70".to_string();
        assert!(card.should_update(&changed, &old.clone().with_state(battery_update)));

        let no_entity = configured(CardConfig::default());
        assert!(!no_entity.should_update(&changed, &old));
    }

    #[test]
    fn test_card_metadata() {
        assert_eq!(SojjoAirQualityCard::get_config_element(), EDITOR_TYPE);
        assert_eq!(SojjoAirQualityCard::new().get_card_size(), 3);
    }
}
