//! Unit tests for hunt-core primitives.

#[cfg(test)]
mod cell {
    use crate::Cell;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Cell::new(0, 0);
        let b = Cell::new(4, -3);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(b.manhattan(a), 7);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(Cell::new(0, 9) < Cell::new(1, 0));
        assert!(Cell::new(2, 1) < Cell::new(2, 2));
    }

    #[test]
    fn neighbours_are_adjacent() {
        let c = Cell::new(3, 3);
        for n in c.orthogonal_neighbours() {
            assert!(c.is_adjacent(n), "{n} should be adjacent to {c}");
        }
        assert!(!c.is_adjacent(Cell::new(4, 4)), "diagonals are not adjacent");
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(2, 5).to_string(), "(2, 5)");
        assert_eq!(Cell::from((1, 1)), Cell::new(1, 1));
    }
}

#[cfg(test)]
mod time {
    use std::time::Duration;

    use crate::{SimulationClock, Tick, TickTime, TimeSource, WallTime};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(4).to_string(), "T4");
    }

    #[test]
    fn tick_time_accumulates() {
        let mut src = TickTime::from_rate(10);
        assert_eq!(src.elapsed(), Duration::ZERO);
        src.on_tick();
        src.on_tick();
        assert_eq!(src.elapsed(), Duration::from_millis(200));
    }

    #[test]
    fn expiry_is_strict() {
        // 1 s limit at 100 ms per tick: exactly 10 ticks is not yet expired.
        let mut clock = SimulationClock::new(TickTime::from_rate(10), Duration::from_secs(1));
        for _ in 0..10 {
            clock.advance();
        }
        assert_eq!(clock.current_tick(), Tick(10));
        assert!(!clock.is_expired());
        assert_eq!(clock.remaining(), Duration::ZERO);

        clock.advance();
        assert!(clock.is_expired());
    }

    #[test]
    fn restart_discards_elapsed_time() {
        let mut wall = WallTime::start();
        std::thread::sleep(Duration::from_millis(20));
        wall.restart();
        assert!(wall.elapsed() < Duration::from_millis(20));

        let mut ticks = TickTime::from_rate(10);
        ticks.on_tick();
        ticks.restart();
        assert_eq!(ticks.elapsed(), Duration::ZERO);
    }

    #[test]
    fn wall_time_starts_unexpired() {
        let clock = SimulationClock::new(WallTime::start(), Duration::from_secs(60));
        assert!(!clock.is_expired());
        assert!(clock.remaining() > Duration::from_secs(59));
    }
}

#[cfg(test)]
mod rng {
    use crate::{RandomSource, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.gen_below(1000), r2.gen_below(1000));
        }
    }

    #[test]
    fn gen_below_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            assert!(rng.gen_below(7) < 7);
        }
    }

    #[test]
    fn gen_step_covers_all_offsets() {
        let mut rng = SimRng::new(9);
        let mut seen = [false; 3];
        for _ in 0..300 {
            let s = rng.gen_step();
            assert!((-1..=1).contains(&s));
            seen[(s + 1) as usize] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn entropy_seeds_vary() {
        let seeds: Vec<u64> = (0..4).map(|_| SimRng::entropy_seed()).collect();
        assert!(seeds.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let xs: Vec<u32> = (0..8).map(|_| a.gen_below(u32::MAX)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.gen_below(u32::MAX)).collect();
        assert_ne!(xs, ys);
    }
}

#[cfg(test)]
mod config {
    use crate::{GameConfig, HuntError, MAX_CELLS};

    #[test]
    fn defaults_are_valid() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.total_cells(), 1_200);
        assert_eq!(cfg.tick_interval().as_millis(), 100);
    }

    #[test]
    fn zero_dimension_rejected() {
        let cfg = GameConfig { rows: 0, ..GameConfig::default() };
        assert!(matches!(cfg.validate(), Err(HuntError::ZeroDimension { .. })));
    }

    #[test]
    fn too_many_goals_rejected() {
        // 2x2 grid: agent + 3 goals fits, agent + 4 does not.
        let fits = GameConfig { rows: 2, cols: 2, goal_count: 3, ..GameConfig::default() };
        assert!(fits.validate().is_ok());
        let over = GameConfig { goal_count: 4, ..fits };
        assert!(matches!(over.validate(), Err(HuntError::GridTooSmall { cells: 4, goals: 4 })));
    }

    #[test]
    fn probability_out_of_range_rejected() {
        let cfg = GameConfig { move_probability: 1.5, ..GameConfig::default() };
        assert!(matches!(cfg.validate(), Err(HuntError::Config(_))));
    }

    #[test]
    fn oversized_grid_rejected() {
        let cfg = GameConfig { rows: 100_000, cols: 100_000, ..GameConfig::default() };
        assert!(matches!(
            cfg.validate(),
            Err(HuntError::GridTooLarge { cells: 10_000_000_000, max: MAX_CELLS })
        ));
        let edge = GameConfig { rows: 2_048, cols: 2_048, ..GameConfig::default() };
        assert_eq!(edge.total_cells(), MAX_CELLS);
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn zero_tick_rate_rejected() {
        let cfg = GameConfig { tick_rate_hz: 0, ..GameConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
