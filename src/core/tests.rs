#[cfg(test)]
mod tests {
    use crate::core::quote::{
        Budget, Field, FormPhase, Infrastructure, QuoteDraft, ServiceTier, Timeline,
        is_valid_email,
    };
    use crate::core::rain::{GLYPH_SIZE, GLYPHS, RESPAWN_SPAN, RainField, Tone};

    /// Deterministic uniform source for the rain simulations.
    struct Lcg(u64);

    impl Lcg {
        fn new(seed: u64) -> Self {
            Self(seed.max(1))
        }

        fn next(&mut self) -> f64 {
            self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (self.0 >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    fn valid_draft() -> QuoteDraft {
        QuoteDraft {
            name: "Jane Doe".to_string(),
            email: "jane@acme.com".to_string(),
            company: "Acme Corporation".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            service_type: "professional".to_string(),
            infrastructure: "cloud".to_string(),
            timeline: "month".to_string(),
            budget: "5k-15k".to_string(),
            requirements: "25 sensors across two regions, SOC2 reporting".to_string(),
            additional_info: String::new(),
        }
    }

    // ------------------------------------------------------------------
    // Rain field
    // ------------------------------------------------------------------

    #[test]
    fn test_column_count_floor() {
        assert_eq!(RainField::column_count(0.0), 0);
        assert_eq!(RainField::column_count(15.9), 0);
        assert_eq!(RainField::column_count(16.0), 1);
        assert_eq!(RainField::column_count(1920.0), 120);
        assert_eq!(RainField::column_count(1927.0), 120);
        assert_eq!(RainField::column_count(-100.0), 0);
        assert_eq!(RainField::column_count(f64::NAN), 0);
    }

    #[test]
    fn test_new_field_starts_above_viewport() {
        let mut rng = Lcg::new(7);
        let field = RainField::new(640.0, 480.0, &mut || rng.next());
        assert_eq!(field.columns(), 40);
        for column in 0..field.columns() {
            let drop = field.drop_at(column).unwrap();
            assert!(drop <= 0.0, "column {column} started at {drop}");
            assert!(drop >= -RESPAWN_SPAN);
        }
    }

    #[test]
    fn test_resize_recomputes_columns() {
        let mut rng = Lcg::new(3);
        let mut field = RainField::new(320.0, 240.0, &mut || rng.next());
        assert_eq!(field.columns(), 20);

        let kept = field.drop_at(5).unwrap();
        field.resize(640.0, 480.0, &mut || rng.next());
        assert_eq!(field.columns(), 40);
        assert_eq!(field.drop_at(5), Some(kept), "surviving column moved");

        field.resize(100.0, 480.0, &mut || rng.next());
        assert_eq!(field.columns(), 6);

        // Shrink-to-zero must not panic, and a later frame still works.
        field.resize(0.0, 0.0, &mut || rng.next());
        assert_eq!(field.columns(), 0);
        assert!(field.advance(&mut || rng.next()).is_empty());
    }

    #[test]
    fn test_advance_emits_one_cell_per_column() {
        let mut rng = Lcg::new(11);
        let mut field = RainField::new(480.0, 320.0, &mut || rng.next());
        let cells = field.advance(&mut || rng.next());
        assert_eq!(cells.len(), field.columns());
        let glyphs: Vec<char> = GLYPHS.chars().collect();
        for (column, cell) in cells.iter().enumerate() {
            assert!(glyphs.contains(&cell.ch));
            assert!((cell.x - (column as f64 * GLYPH_SIZE + GLYPH_SIZE / 2.0)).abs() < 1e-9);
            assert!(cell.y.is_finite());
        }
    }

    #[test]
    fn test_drops_keep_falling() {
        let mut rng = Lcg::new(13);
        let mut field = RainField::new(160.0, 1_000_000.0, &mut || rng.next());
        let before: Vec<f64> = (0..field.columns())
            .map(|c| field.drop_at(c).unwrap())
            .collect();
        field.advance(&mut || rng.next());
        for (column, start) in before.iter().enumerate() {
            let after = field.drop_at(column).unwrap();
            assert!(after > *start, "column {column} did not advance");
            assert!(after - start >= 0.5 && after - start <= 1.0);
        }
    }

    /// Statistical form of the reset property: a drop past the bottom edge
    /// resets to a negative offset within a bounded number of frames. With a
    /// 2.5% per-frame reset chance the odds of surviving 2000 frames are
    /// below 1e-21.
    #[test]
    fn test_offscreen_drop_eventually_resets() {
        let mut rng = Lcg::new(42);
        for seed in 0..20u64 {
            let mut rng_seeded = Lcg::new(seed * 977 + 5);
            let mut field = RainField::new(16.0, 100.0, &mut || rng_seeded.next());
            // Fast-forward until the single column has left the viewport.
            let mut frames = 0;
            while field.drop_at(0).unwrap() * GLYPH_SIZE <= field.height() {
                field.advance(&mut || rng.next());
                frames += 1;
                assert!(frames < 10_000, "drop never reached the bottom edge");
            }

            let mut reset = false;
            for _ in 0..2_000 {
                field.advance(&mut || rng.next());
                if field.drop_at(0).unwrap() < 0.0 {
                    reset = true;
                    break;
                }
            }
            assert!(reset, "drop was never recycled (seed {seed})");
        }
    }

    #[test]
    fn test_tone_distribution_is_mostly_dim() {
        let mut rng = Lcg::new(99);
        let mut dim = 0usize;
        let mut accent = 0usize;
        let mut alert = 0usize;
        for _ in 0..20_000 {
            match Tone::pick(&mut || rng.next()) {
                Tone::Dim { opacity } => {
                    assert!((0.1..0.4).contains(&opacity));
                    dim += 1;
                }
                Tone::Accent => accent += 1,
                Tone::Alert => alert += 1,
            }
        }
        assert!(dim > accent && dim > alert, "dim must dominate the palette");
        assert!(alert > 0 && accent > 0, "accents never appeared");
        assert!(alert < 1_000 && accent < 2_500, "accents too frequent");
    }

    // ------------------------------------------------------------------
    // Quote validation
    // ------------------------------------------------------------------

    #[test]
    fn test_valid_draft_produces_request() {
        let request = valid_draft().validate().expect("draft should validate");
        assert_eq!(request.name, "Jane Doe");
        assert_eq!(request.service_type, ServiceTier::Professional);
        assert_eq!(request.infrastructure, Infrastructure::Cloud);
        assert_eq!(request.timeline, Timeline::Month);
        assert_eq!(request.budget, Budget::From5kTo15k);
        assert_eq!(request.phone.as_deref(), Some("+1 (555) 123-4567"));
        assert_eq!(request.additional_info, None);
    }

    #[test]
    fn test_missing_required_fields_each_get_an_error() {
        let draft = QuoteDraft::default();
        let errors = draft.validate().expect_err("empty draft must fail");
        assert_eq!(errors.count(), 8);
        assert_eq!(errors.get(Field::Name).unwrap(), "Name is required");
        assert_eq!(errors.get(Field::Email).unwrap(), "Email is required");
        assert_eq!(errors.get(Field::Company).unwrap(), "Company is required");
        assert!(errors.get(Field::ServiceType).is_some());
        assert!(errors.get(Field::Infrastructure).is_some());
        assert!(errors.get(Field::Timeline).is_some());
        assert!(errors.get(Field::Budget).is_some());
        assert!(errors.get(Field::Requirements).is_some());
    }

    #[test]
    fn test_single_missing_field_yields_single_error() {
        let mut draft = valid_draft();
        draft.company = "   ".to_string();
        let errors = draft.validate().expect_err("blank company must fail");
        assert_eq!(errors.count(), 1);
        assert_eq!(errors.get(Field::Company).unwrap(), "Company is required");
    }

    #[test]
    fn test_bad_email_yields_only_email_error() {
        let mut draft = valid_draft();
        draft.email = "not-an-email".to_string();
        let errors = draft.validate().expect_err("bad email must fail");
        assert_eq!(errors.count(), 1);
        assert_eq!(errors.get(Field::Email).unwrap(), "Invalid email address");
    }

    #[test]
    fn test_email_syntax() {
        assert!(is_valid_email("jane@acme.com"));
        assert!(is_valid_email("first.last+tag@sub.acme-corp.io"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("@acme.com"));
        assert!(!is_valid_email("jane@acme"));
        assert!(!is_valid_email("jane@acme.c"));
        assert!(!is_valid_email("jane@acme.c0m"));
        assert!(!is_valid_email("jane@@acme.com"));
        assert!(!is_valid_email("ja ne@acme.com"));
    }

    #[test]
    fn test_unknown_select_value_is_rejected() {
        let mut draft = valid_draft();
        draft.budget = "one-meeellion".to_string();
        let errors = draft.validate().expect_err("unknown budget must fail");
        assert_eq!(errors.count(), 1);
        assert_eq!(errors.get(Field::Budget).unwrap(), "Budget range is required");
    }

    #[test]
    fn test_optional_fields_are_trimmed_to_none() {
        let mut draft = valid_draft();
        draft.phone = "  ".to_string();
        draft.additional_info = " prefers morning calls ".to_string();
        let request = draft.validate().expect("draft should validate");
        assert_eq!(request.phone, None);
        assert_eq!(request.additional_info.as_deref(), Some("prefers morning calls"));
    }

    #[test]
    fn test_request_wire_format() {
        let request = valid_draft().validate().expect("draft should validate");
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["service_type"], "professional");
        assert_eq!(json["infrastructure"], "cloud");
        assert_eq!(json["timeline"], "month");
        assert_eq!(json["budget"], "5k-15k");
        assert!(json.get("additional_info").is_none());
    }

    #[test]
    fn test_field_errors_wire_format_roundtrip() {
        let errors = QuoteDraft::default().validate().expect_err("must fail");
        let json = serde_json::to_string(&errors).expect("serialize");
        let parsed: crate::core::quote::FieldErrors =
            serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, errors);
    }

    #[test]
    fn test_select_options_cover_every_variant() {
        for (value, _) in ServiceTier::options() {
            assert!(ServiceTier::parse(&value).is_some(), "{value}");
        }
        for (value, _) in Infrastructure::options() {
            assert!(Infrastructure::parse(&value).is_some(), "{value}");
        }
        for (value, _) in Timeline::options() {
            assert!(Timeline::parse(&value).is_some(), "{value}");
        }
        for (value, _) in Budget::options() {
            assert!(Budget::parse(&value).is_some(), "{value}");
        }
    }

    // ------------------------------------------------------------------
    // Form phase
    // ------------------------------------------------------------------

    #[test]
    fn test_only_editing_phase_may_submit() {
        assert!(FormPhase::Editing.can_submit());
        assert!(!FormPhase::Submitting.can_submit());
        assert!(!FormPhase::Submitted.can_submit());
    }

    #[test]
    fn test_initial_phase_is_editing() {
        assert_eq!(FormPhase::default(), FormPhase::Editing);
    }
}
