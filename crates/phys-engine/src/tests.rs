//! Unit tests for phys-engine.

#[cfg(test)]
mod judging {
    use crate::{judge_samples, Turn};

    #[test]
    fn straight_wins_all_ties() {
        assert_eq!(judge_samples(2.0, 2.0, 2.0), Turn::Straight);
        assert_eq!(judge_samples(2.0, 2.0, 1.0), Turn::Straight);
        assert_eq!(judge_samples(1.0, 2.0, 2.0), Turn::Straight);
        assert_eq!(judge_samples(0.0, 0.0, 0.0), Turn::Straight);
    }

    #[test]
    fn strongest_side_wins() {
        assert_eq!(judge_samples(5.0, 1.0, 2.0), Turn::Left);
        assert_eq!(judge_samples(1.0, 2.0, 5.0), Turn::Right);
        assert_eq!(judge_samples(3.0, 2.9, 0.0), Turn::Left);
    }

    #[test]
    fn side_tie_resolves_left() {
        assert_eq!(judge_samples(3.0, 1.0, 3.0), Turn::Left);
    }
}

#[cfg(test)]
mod steering {
    use std::f32::consts::{FRAC_PI_4, TAU};

    use phys_core::ParameterSet;
    use phys_field::TrailField;

    use crate::SteerContext;

    fn steer_params() -> ParameterSet {
        ParameterSet {
            sensor_angle:      90.0,
            sensor_distance:   4.0,
            rotation_angle:    45.0,
            center_attraction: 0.0,
            ..Default::default()
        }
    }

    /// Deposit a 3x3 blob so sensor positions a fraction of a cell off the
    /// nominal point still read it.
    fn blob(field: &mut TrailField, cx: f32, cy: f32, v: f32) {
        for dy in -1..=1 {
            for dx in -1..=1 {
                field.deposit(cx + dx as f32, cy + dy as f32, v);
            }
        }
    }

    #[test]
    fn blank_field_keeps_heading_exactly() {
        let field = TrailField::new(64, 64);
        let ctx = SteerContext::new(&steer_params(), &field);
        assert_eq!(ctx.steer(32.0, 32.0, 1.234), 1.234);
    }

    #[test]
    fn all_sensors_off_grid_keep_heading() {
        let mut field = TrailField::new(64, 64);
        blob(&mut field, 32.0, 32.0, 10.0);
        let ctx = SteerContext::new(&steer_params(), &field);
        // From the corner, heading away from the grid, every sensor falls
        // outside the field and reads zero: a three-way tie, so straight.
        let heading = std::f32::consts::PI + FRAC_PI_4;
        let h = ctx.steer(1.0, 1.0, heading);
        assert!(h.is_finite());
        assert_eq!(h, heading);
    }

    #[test]
    fn turns_left_toward_deposit() {
        let mut field = TrailField::new(64, 64);
        // Heading 0 points +x; the left sensor sits 90 degrees
        // counter-clockwise, at (32, 36).
        blob(&mut field, 32.0, 36.0, 10.0);
        let ctx = SteerContext::new(&steer_params(), &field);
        let h = ctx.steer(32.0, 32.0, 0.0);
        assert!((h - FRAC_PI_4).abs() < 1e-4, "got {h}");
    }

    #[test]
    fn turns_right_toward_deposit() {
        let mut field = TrailField::new(64, 64);
        blob(&mut field, 32.0, 28.0, 10.0);
        let ctx = SteerContext::new(&steer_params(), &field);
        let h = ctx.steer(32.0, 32.0, 0.0);
        assert!((h - (TAU - FRAC_PI_4)).abs() < 1e-4, "got {h}");
    }

    #[test]
    fn ahead_deposit_keeps_heading() {
        let mut field = TrailField::new(64, 64);
        blob(&mut field, 36.0, 32.0, 10.0);
        let ctx = SteerContext::new(&steer_params(), &field);
        assert_eq!(ctx.steer(32.0, 32.0, 0.0), 0.0);
    }

    #[test]
    fn equal_sides_turn_left() {
        let mut field = TrailField::new(64, 64);
        blob(&mut field, 32.0, 36.0, 10.0);
        blob(&mut field, 32.0, 28.0, 10.0);
        let ctx = SteerContext::new(&steer_params(), &field);
        let h = ctx.steer(32.0, 32.0, 0.0);
        assert!((h - FRAC_PI_4).abs() < 1e-4, "got {h}");
    }

    #[test]
    fn attraction_bends_toward_center() {
        let field = TrailField::new(64, 64);
        let params = ParameterSet {
            center_attraction: 1.0,
            ..steer_params()
        };
        let ctx = SteerContext::new(&params, &field);
        // Due south of centre, heading +x: pull (0, -1) blends with (1, 0)
        // into a heading of -45 degrees.
        let h = ctx.steer(32.0, 48.0, 0.0);
        assert!((h - (TAU - FRAC_PI_4)).abs() < 1e-4, "got {h}");
    }

    #[test]
    fn opposing_pull_cancels_to_no_turn() {
        let field = TrailField::new(64, 64);
        let params = ParameterSet {
            center_attraction: 1.0,
            ..steer_params()
        };
        let ctx = SteerContext::new(&params, &field);
        // Heading exactly away from centre with weight 1.0: the blend is the
        // zero vector, so the heading must survive untouched.
        assert_eq!(ctx.steer(48.0, 32.0, 0.0), 0.0);
    }

    #[test]
    fn standing_on_center_keeps_heading() {
        let field = TrailField::new(64, 64);
        let params = ParameterSet {
            center_attraction: 1.0,
            ..steer_params()
        };
        let ctx = SteerContext::new(&params, &field);
        assert_eq!(ctx.steer(32.0, 32.0, 2.5), 2.5);
    }
}

#[cfg(test)]
mod engine {
    use std::f32::consts::TAU;

    use phys_core::{CoreError, ParameterSet};

    use crate::SimulationEngine;

    fn small_params() -> ParameterSet {
        ParameterSet {
            grid_width:  32,
            grid_height: 32,
            particles_population_factor: 0.05,
            spawn_radius: 10.0,
            ..Default::default()
        }
    }

    #[test]
    fn new_spawns_population() {
        let engine = SimulationEngine::new(small_params()).unwrap();
        // round(0.05 * 32 * 32)
        assert_eq!(engine.agent_count(), 51);
        assert_eq!(engine.steps, 0);
        assert_eq!(engine.field.total(), 0.0);
        assert_eq!(engine.occupancy.total_count(), 51);
    }

    #[test]
    fn rejects_invalid_params() {
        let params = ParameterSet {
            grid_width: 4,
            ..small_params()
        };
        let err = SimulationEngine::new(params).unwrap_err();
        let CoreError::InvalidParameter { name, .. } = err;
        assert_eq!(name, "grid_width");
    }

    #[test]
    fn step_deposits_trail() {
        let mut engine = SimulationEngine::new(small_params()).unwrap();
        engine.step();
        assert_eq!(engine.steps, 1);
        assert!(engine.field.total() > 0.0);
    }

    #[test]
    fn zero_decay_keeps_only_fresh_deposits() {
        let params = ParameterSet {
            decay_factor: 0.0,
            deposit_value: 5.0,
            collision_enabled: false,
            ..small_params()
        };
        let mut engine = SimulationEngine::new(params).unwrap();
        engine.run_steps(3);

        // Whatever survived is exactly this step's deposits: every non-zero
        // cell holds at least one deposit, and the grand total cannot exceed
        // one deposit per agent.
        let count = engine.agent_count() as f64;
        assert!(engine.field.total() > 0.0);
        assert!(engine.field.total() <= 5.0 * count);
        for &c in engine.field.cells() {
            assert!(c == 0.0 || c >= 5.0, "cell holds stale trail: {c}");
        }
    }

    #[test]
    fn full_retention_accumulates() {
        let params = ParameterSet {
            decay_factor: 1.0,
            ..small_params()
        };
        let mut engine = SimulationEngine::new(params).unwrap();
        engine.step();
        let after_one = engine.field.total();
        engine.step();
        assert!(engine.field.total() > after_one);
    }

    #[test]
    fn trail_values_stay_bounded() {
        let params = ParameterSet {
            decay_factor: 1.0,
            deposit_value: 300.0,
            ..small_params()
        };
        let mut engine = SimulationEngine::new(params).unwrap();
        engine.run_steps(5);
        assert!(engine.field.max_value() <= 255.0);
        assert_eq!(engine.field.max_value(), 255.0);
    }

    #[test]
    fn positions_and_headings_stay_in_domain() {
        let params = ParameterSet {
            move_distance: 5.0,
            ..small_params()
        };
        let mut engine = SimulationEngine::new(params).unwrap();
        engine.run_steps(20);
        for i in 0..engine.pool.count {
            assert!((0.0..32.0).contains(&engine.pool.x[i]), "x = {}", engine.pool.x[i]);
            assert!((0.0..32.0).contains(&engine.pool.y[i]), "y = {}", engine.pool.y[i]);
            let h = engine.pool.heading[i];
            assert!((0.0..TAU).contains(&h), "heading = {h}");
        }
    }

    #[test]
    fn reset_restores_initial_spawn() {
        let params = small_params();
        let mut engine = SimulationEngine::new(params.clone()).unwrap();
        let fresh = SimulationEngine::new(params.clone()).unwrap();

        engine.run_steps(5);
        engine.reset(params).unwrap();

        assert_eq!(engine.steps, 0);
        assert_eq!(engine.field.total(), 0.0);
        assert_eq!(engine.pool.x, fresh.pool.x);
        assert_eq!(engine.pool.y, fresh.pool.y);
        assert_eq!(engine.pool.heading, fresh.pool.heading);
    }

    #[test]
    fn failed_reset_leaves_engine_untouched() {
        let mut engine = SimulationEngine::new(small_params()).unwrap();
        engine.run_steps(3);
        let total_before = engine.field.total();

        let bad = ParameterSet {
            grid_width: 4,
            ..small_params()
        };
        assert!(engine.reset(bad).is_err());

        assert_eq!(engine.steps, 3);
        assert_eq!(engine.agent_count(), 51);
        assert_eq!(engine.field.total(), total_before);
    }

    #[test]
    fn occupancy_tracks_positions() {
        let mut engine = SimulationEngine::new(small_params()).unwrap();
        engine.run_steps(10);

        assert_eq!(engine.occupancy.total_count(), engine.pool.count as u64);
        for i in 0..engine.pool.count {
            let (x, y) = (engine.pool.x[i], engine.pool.y[i]);
            assert!(engine.occupancy.count_at(x, y) >= 1, "agent {i} untracked");
        }
    }
}

#[cfg(test)]
mod determinism {
    use phys_core::ParameterSet;

    use crate::SimulationEngine;

    fn params(seed: u64, collisions: bool) -> ParameterSet {
        ParameterSet {
            grid_width:  32,
            grid_height: 32,
            particles_population_factor: 0.1,
            spawn_radius: 8.0,
            collision_enabled: collisions,
            seed,
            ..Default::default()
        }
    }

    #[test]
    fn identical_runs_are_bit_identical() {
        let mut a = SimulationEngine::new(params(42, false)).unwrap();
        let mut b = SimulationEngine::new(params(42, false)).unwrap();
        a.run_steps(10);
        b.run_steps(10);

        assert_eq!(a.pool.x, b.pool.x);
        assert_eq!(a.pool.y, b.pool.y);
        assert_eq!(a.pool.heading, b.pool.heading);
        assert_eq!(a.field.cells(), b.field.cells());
    }

    #[test]
    fn identical_runs_with_collisions_are_bit_identical() {
        let mut a = SimulationEngine::new(params(42, true)).unwrap();
        let mut b = SimulationEngine::new(params(42, true)).unwrap();
        a.run_steps(10);
        b.run_steps(10);

        assert_eq!(a.pool.x, b.pool.x);
        assert_eq!(a.pool.y, b.pool.y);
        assert_eq!(a.pool.heading, b.pool.heading);
        assert_eq!(a.field.cells(), b.field.cells());
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimulationEngine::new(params(1, false)).unwrap();
        let mut b = SimulationEngine::new(params(2, false)).unwrap();
        a.run_steps(3);
        b.run_steps(3);
        assert_ne!(a.pool.x, b.pool.x);
    }
}

#[cfg(test)]
mod collision {
    use std::f32::consts::FRAC_PI_2;

    use phys_core::ParameterSet;

    use crate::SimulationEngine;

    /// Engine with `n` agents on an 8x8 grid, no steering influences, and a
    /// blank trail: headings only change through collision rebounds.
    fn bare_engine(n: u32, collisions: bool) -> SimulationEngine {
        let params = ParameterSet {
            grid_width:  8,
            grid_height: 8,
            particles_population_factor: n as f32 / 64.0,
            spawn_radius: 0.0,
            move_distance: 1.0,
            deposit_value: 0.0,
            decay_factor: 1.0,
            center_attraction: 0.0,
            collision_enabled: collisions,
            ..Default::default()
        };
        SimulationEngine::new(params).unwrap()
    }

    /// Overwrite spawn positions/headings and bring occupancy back in step.
    fn place(engine: &mut SimulationEngine, agents: &[(f32, f32, f32)]) {
        assert_eq!(agents.len(), engine.pool.count);
        for (i, &(x, y, h)) in agents.iter().enumerate() {
            engine.pool.x[i] = x;
            engine.pool.y[i] = y;
            engine.pool.heading[i] = h;
        }
        engine.occupancy.clear();
        for i in 0..engine.pool.count {
            engine.occupancy.occupy(engine.pool.x[i], engine.pool.y[i]);
        }
    }

    #[test]
    fn blocked_agent_stays_and_rebounds() {
        let mut engine = bare_engine(2, true);
        // Agent 0 walks east into agent 1's cell; agent 1 walks north out
        // of it, but moves second.
        place(&mut engine, &[(2.5, 2.5, 0.0), (3.5, 2.5, FRAC_PI_2)]);
        engine.step();

        // Agent 0 stayed and drew a new heading.
        assert_eq!(engine.pool.x[0], 2.5);
        assert_eq!(engine.pool.y[0], 2.5);
        assert_ne!(engine.pool.heading[0], 0.0);

        // Agent 1 moved north unhindered.
        assert!((engine.pool.y[1] - 3.5).abs() < 1e-4, "y = {}", engine.pool.y[1]);

        assert_eq!(engine.occupancy.count_at(2.5, 2.5), 1);
        assert_eq!(engine.occupancy.count_at(3.5, 2.5), 0);
        assert_eq!(engine.occupancy.count_at(3.5, 3.5), 1);
    }

    #[test]
    fn sub_cell_moves_are_never_blocked() {
        let mut engine = bare_engine(1, true);
        let params = ParameterSet {
            move_distance: 0.5,
            ..engine.params.clone()
        };
        engine.reset(params).unwrap();
        place(&mut engine, &[(2.2, 2.2, 0.0)]);
        engine.step();

        // The agent's own occupancy must not block it inside its cell.
        assert!((engine.pool.x[0] - 2.7).abs() < 1e-5, "x = {}", engine.pool.x[0]);
        assert_eq!(engine.pool.heading[0], 0.0);
    }

    #[test]
    fn stacking_is_legal_without_collisions() {
        let mut engine = bare_engine(2, false);
        // Both agents converge on cell (3, 2) from opposite sides.
        place(&mut engine, &[(2.5, 2.5, 0.0), (4.5, 2.5, std::f32::consts::PI)]);
        engine.step();

        assert_eq!(engine.occupancy.count_at(3.5, 2.5), 2);
    }

    #[test]
    fn collisions_break_the_stack() {
        let mut engine = bare_engine(2, true);
        place(&mut engine, &[(2.5, 2.5, 0.0), (4.5, 2.5, std::f32::consts::PI)]);
        engine.step();

        // Agent 0 claims the middle cell first; agent 1 bounces off it.
        assert_eq!(engine.occupancy.count_at(3.5, 2.5), 1);
        assert_eq!(engine.pool.x[1], 4.5);
        assert_ne!(engine.pool.heading[1], std::f32::consts::PI);
    }

    #[test]
    fn freed_cell_can_be_entered_same_step() {
        let mut engine = bare_engine(2, true);
        // Agent 0 vacates (3, 2) before agent 1 asks for it.
        place(&mut engine, &[(3.5, 2.5, 0.0), (2.5, 2.5, 0.0)]);
        engine.step();

        assert_eq!(engine.pool.x[0], 4.5);
        assert_eq!(engine.pool.x[1], 3.5);
        assert_eq!(engine.pool.heading[1], 0.0, "no rebound should have happened");
    }
}
