use countdown::generator::replay_steps;
use countdown::{
    PuzzleGenerator, PuzzleState, StepRecord, TextRenderer, arithmetic_operators,
    convert_steps_to_equation, render,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn solved(values: &[i64], seed: u64) -> Option<(PuzzleGenerator<i64>, i64, Vec<StepRecord<i64>>)> {
    let mut generator = PuzzleGenerator::new(
        values.to_vec(),
        Vec::<i64>::new(),
        arithmetic_operators(),
        values.len(),
        values.len(),
        |_: &i64| true,
        StdRng::seed_from_u64(seed),
    )
    .ok()?;

    for value in values {
        generator.choose(value).ok()?;
    }
    if generator.randomize_goal().ok()? != PuzzleState::Evaluating {
        return None;
    }
    let goal = *generator.goal().ok()?;
    let steps = generator.steps().ok()?.to_vec();
    Some((generator, goal, steps))
}

fn sorted(mut values: Vec<i64>) -> Vec<i64> {
    values.sort_unstable();
    values
}

proptest! {
    #[test]
    fn generated_solution_is_accepted(
        values in prop::collection::vec(1_i64..=100, 2..=6),
        seed in any::<u64>(),
    ) {
        let solved = solved(&values, seed);
        prop_assert!(solved.is_some());
        if let Some((generator, goal, steps)) = solved {
            prop_assert_eq!(steps.len(), values.len() - 1);
            prop_assert_eq!(generator.is_valid_solution(&steps), Ok(true));
            prop_assert_eq!(replay_steps(&values, &steps), Some(goal));
            prop_assert_eq!(generator.found_valid_solution(), Ok(true));
        }
    }

    #[test]
    fn steps_rebuild_into_one_expression(
        values in prop::collection::vec(1_i64..=50, 2..=6),
        seed in any::<u64>(),
    ) {
        if let Some((_, goal, steps)) = solved(&values, seed) {
            let root = convert_steps_to_equation(&steps);
            prop_assert!(root.is_ok());
            if let Ok(root) = root {
                prop_assert_eq!(*root.result(), goal);
                prop_assert_eq!(root.evaluate(), Some(goal));
                prop_assert_eq!(sorted(root.literals()), sorted(values.clone()));

                let text = render(&TextRenderer, &root);
                prop_assert_eq!(text.matches('(').count(), text.matches(')').count());
            }
        }
    }

    #[test]
    fn dropping_a_step_is_rejected(
        values in prop::collection::vec(1_i64..=50, 3..=6),
        seed in any::<u64>(),
    ) {
        if let Some((generator, _, steps)) = solved(&values, seed) {
            let truncated = &steps[..steps.len() - 1];
            prop_assert_eq!(generator.is_valid_solution(truncated), Ok(false));
        }
    }
}
