mod common;

mod tests {
    use myrtio_ring_composer::animation::HEARTBEAT_LEVELS;
    use myrtio_ring_composer::color::{BLACK, BLUE, GREEN, PURPLE, RED, green, red, wheel};
    use myrtio_ring_composer::{
        AnimationEngine, ConfigError, DripConfig, FrameBuffer, Mode, NoClock, RingConfig,
        TimeOfDay,
    };
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use crate::common::{RecordingDriver, engine, frames, last_frame, lit};

    fn always_drip() -> RingConfig {
        RingConfig {
            drip: DripConfig {
                chance: 1.0,
                ..DripConfig::default()
            },
            ..RingConfig::default()
        }
    }

    #[test]
    fn test_engine_starts_off_without_drawing() {
        let mut engine = engine::<12>(&RingConfig::default());
        assert_eq!(engine.mode(), Mode::Off);
        engine.tick();
        assert!(frames(&engine).is_empty());
    }

    #[test]
    fn test_heartbeat_cycles_levels() {
        let mut engine = engine::<12>(&RingConfig::default());
        engine.set_mode(Mode::Heartbeat);

        for level in HEARTBEAT_LEVELS {
            engine.tick();
            assert!(last_frame(&engine).iter().all(|&c| c == red(level)));
        }
        assert_eq!(engine.heartbeat().index(), 0);
        assert_eq!(frames(&engine).len(), 10);
    }

    #[test]
    fn test_heartbeat_resumes_after_switch() {
        let mut engine = engine::<12>(&RingConfig::default());
        engine.set_mode(Mode::Heartbeat);
        engine.tick();
        engine.tick();
        engine.tick();

        engine.set_mode(Mode::Rainbow);
        engine.tick();
        engine.set_mode(Mode::Heartbeat);
        assert_eq!(engine.heartbeat().index(), 3);

        engine.tick();
        assert!(last_frame(&engine).iter().all(|&c| c == red(80)));
    }

    #[test]
    fn test_rainbow_spreads_wheel_over_ring() {
        let mut engine = engine::<12>(&RingConfig::default());
        engine.set_mode(Mode::Rainbow);
        engine.tick();

        let frame = last_frame(&engine);
        for (pos, &color) in frame.iter().enumerate() {
            let expected = u8::try_from(pos * 256 / 12).unwrap();
            assert_eq!(color, wheel(expected));
        }

        engine.tick();
        assert_eq!(last_frame(&engine)[0], wheel(1));
    }

    #[test]
    fn test_rainbow_phase_wraps_after_256_ticks() {
        let mut engine = engine::<12>(&RingConfig::default());
        engine.set_mode(Mode::Rainbow);
        let start = engine.rainbow().phase();

        for _ in 0..256 {
            engine.tick();
        }
        assert_eq!(engine.rainbow().phase(), start);
    }

    #[test]
    fn test_stars_light_one_pixel_per_tick() {
        let mut engine = engine::<24>(&RingConfig::for_bottom_start(24));
        engine.set_mode(Mode::Stars);

        for _ in 0..50 {
            engine.tick();
            let (pos, color) = engine.stars().last().unwrap();
            assert!(pos < 24);

            let physical = engine.mapper().map(pos);
            let frame = last_frame(&engine);
            assert_eq!(frame[physical], color);
            assert!(
                frame
                    .iter()
                    .enumerate()
                    .all(|(i, &c)| i == physical || c == BLACK)
            );
        }
    }

    #[test]
    fn test_drip_seeds_center_on_empty_buffer() {
        let config = RingConfig {
            drip: DripConfig {
                center: 5,
                ..always_drip().drip
            },
            ..always_drip()
        };
        let mut engine = engine::<16>(&config);
        engine.set_mode(Mode::MatrixDripGreen);
        engine.tick();

        let levels = engine.drip().levels();
        assert!((180..=255).contains(&levels[5]));
        for (pos, &level) in levels.iter().enumerate() {
            if pos != 5 {
                assert_eq!(level, 0);
            }
        }
        assert_eq!(last_frame(&engine)[5], green(levels[5]));
    }

    #[test]
    fn test_drip_moves_outward_one_step_per_tick() {
        let mut engine = engine::<8>(&always_drip());
        engine.set_mode(Mode::MatrixDripGreen);
        engine.tick();
        let seed = engine.drip().level(0);

        engine.tick();
        // Path for center 0 on 8 LEDs: 0, 1, 7, 2, 6, 3, 5, 4
        assert_eq!(engine.drip().level(1), seed - 5);
        engine.tick();
        assert_eq!(engine.drip().level(7), seed - 10);
    }

    #[test]
    fn test_drip_entry_clears_buffer_and_strip() {
        let mut engine = engine::<8>(&always_drip());
        engine.set_mode(Mode::MatrixDripGreen);
        engine.tick();
        engine.tick();
        assert_ne!(engine.drip().level(0), 0);

        engine.set_mode(Mode::MatrixDripGreen);
        assert!(engine.drip().levels().iter().all(|&l| l == 0));
        assert!(last_frame(&engine).iter().all(|&c| c == BLACK));
    }

    #[test]
    fn test_drip_fades_and_clamps_at_zero() {
        let config = RingConfig {
            drip: DripConfig {
                chance: 0.0,
                ..DripConfig::default()
            },
            ..RingConfig::default()
        };
        let mut engine = engine::<8>(&config);
        engine.set_mode(Mode::MatrixDripGreen);
        assert_eq!(engine.path().as_slice(), &[0, 1, 7, 2, 6, 3, 5, 4]);
        assert_eq!(engine.config().drip.fade, 5);

        engine.drip_mut().set_level(1, 100);
        engine.drip_mut().set_level(2, 3);
        engine.tick();

        assert_eq!(engine.drip().level(7), 95);
        assert_eq!(engine.drip().level(6), 0);
        assert_eq!(engine.drip().level(0), 0);
        assert_eq!(last_frame(&engine)[7], green(95));
    }

    #[test]
    fn test_chase_red_green_alternates() {
        let mut engine = engine::<12>(&RingConfig::default());
        engine.set_mode(Mode::ChaseRedGreen);

        for (pos, color) in [(0, RED), (1, GREEN), (2, RED), (3, GREEN)] {
            engine.tick();
            assert_eq!(lit(&engine), vec![pos]);
            assert_eq!(last_frame(&engine)[pos], color);
        }
    }

    #[test]
    fn test_chase_wraps_and_respects_offset() {
        let mut engine = engine::<6>(&RingConfig {
            offset: 3,
            ..RingConfig::default()
        });
        engine.set_mode(Mode::ChaseRedGreen);

        engine.tick();
        assert_eq!(lit(&engine), vec![3]);
        for _ in 0..5 {
            engine.tick();
        }
        assert_eq!(engine.chase().forward(), 0);
    }

    #[test]
    fn test_chase_purple_green_full_cycle() {
        let mut engine = engine::<6>(&RingConfig::default());
        engine.set_mode(Mode::ChasePurpleGreen);
        assert_eq!(engine.chase().forward(), 0);
        assert_eq!(engine.chase().backward(), 5);

        engine.tick();
        assert_eq!(last_frame(&engine)[0], PURPLE);
        assert_eq!(last_frame(&engine)[5], GREEN);

        for _ in 1..6 {
            engine.tick();
            let frame = last_frame(&engine);
            assert!(frame.iter().all(|&c| c == BLACK || c == PURPLE || c == GREEN));
        }
        assert_eq!(engine.chase().forward(), 0);
        assert_eq!(engine.chase().backward(), 5);
    }

    #[test]
    fn test_switch_to_off_blanks_and_stays_dark() {
        let mut engine = engine::<12>(&RingConfig::default());
        engine.set_mode(Mode::Rainbow);
        engine.tick();
        engine.tick();

        engine.set_mode(Mode::Off);
        let count = frames(&engine).len();
        assert!(last_frame(&engine).iter().all(|&c| c == BLACK));

        for _ in 0..20 {
            engine.tick();
        }
        assert_eq!(frames(&engine).len(), count);
    }

    #[test]
    fn test_solid_color_renders_on_entry_only() {
        let mut engine = engine::<12>(&RingConfig::default());
        engine.set_mode(Mode::SolidColor(BLUE));
        assert_eq!(frames(&engine).len(), 1);
        assert!(last_frame(&engine).iter().all(|&c| c == BLUE));

        engine.tick();
        assert_eq!(frames(&engine).len(), 1);
    }

    #[test]
    fn test_clock_updates_on_tenth_tick() {
        let mut engine = engine::<60>(&RingConfig::default());
        engine.clock_mut().time = TimeOfDay::new(15, 30, 15);
        engine.set_mode(Mode::Clock);

        for _ in 0..9 {
            engine.tick();
        }
        assert!(frames(&engine).is_empty());

        engine.tick();
        assert_eq!(frames(&engine).len(), 1);
        let frame = last_frame(&engine);
        assert_eq!(frame[17], RED);
        assert_eq!(frame[30], GREEN);
        assert_eq!(frame[15], BLUE);
        assert_eq!(lit(&engine), vec![15, 17, 30]);
    }

    #[test]
    fn test_clock_counter_restarts_on_entry() {
        let mut engine = engine::<60>(&RingConfig::default());
        engine.clock_mut().time = TimeOfDay::new(1, 0, 0);
        engine.set_mode(Mode::Clock);
        for _ in 0..5 {
            engine.tick();
        }
        engine.set_mode(Mode::Clock);
        assert_eq!(engine.clock_face().ticks(), 0);

        for _ in 0..9 {
            engine.tick();
        }
        assert!(frames(&engine).is_empty());
        engine.tick();
        assert_eq!(frames(&engine).len(), 1);
    }

    #[test]
    fn test_clock_freezes_without_time() {
        let mut engine = engine::<60>(&RingConfig::default());
        engine.set_mode(Mode::Clock);
        for _ in 0..30 {
            engine.tick();
        }
        assert!(frames(&engine).is_empty());
        assert_eq!(engine.clock_face().hands(), None);
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let new = |config: &RingConfig| {
            AnimationEngine::<_, _, _, 8>::new(
                FrameBuffer::<_, 8>::new(RecordingDriver::default()),
                NoClock,
                SmallRng::seed_from_u64(1),
                config,
            )
            .err()
        };

        let mut config = RingConfig::default();
        config.drip.center = 8;
        assert_eq!(
            new(&config),
            Some(ConfigError::CenterOutOfRange { center: 8, len: 8 })
        );

        let mut config = RingConfig::default();
        config.drip.chance = 1.5;
        assert_eq!(new(&config), Some(ConfigError::InvalidDripChance));

        let mut config = RingConfig::default();
        config.drip.seed_min = 200;
        config.drip.seed_max = 100;
        assert_eq!(
            new(&config),
            Some(ConfigError::InvalidSeedRange { min: 200, max: 100 })
        );

        let config = RingConfig {
            clock_divider: 0,
            ..RingConfig::default()
        };
        assert_eq!(new(&config), Some(ConfigError::ZeroClockDivider));
    }

    #[test]
    fn test_empty_ring_is_rejected() {
        let engine = AnimationEngine::<_, _, _, 0>::new(
            FrameBuffer::<_, 0>::new(RecordingDriver::default()),
            NoClock,
            SmallRng::seed_from_u64(1),
            &RingConfig::default(),
        );
        assert_eq!(engine.err(), Some(ConfigError::EmptyRing));
    }
}
