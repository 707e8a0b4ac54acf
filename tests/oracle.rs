use otter_world::{
    config::Config,
    context::Context,
    oracle::{Constraint, Oracle},
    structures::{atom::Atom, literal::CLiteral, name::PropositionName},
};

fn atoms(oracle: &mut impl Oracle, names: &[&str]) -> Vec<CLiteral> {
    names
        .iter()
        .map(|name| {
            let atom = oracle
                .proposition(PropositionName::Atomic(name.to_string()))
                .unwrap();
            CLiteral::new(atom, true)
        })
        .collect()
}

mod cardinality {
    use super::*;

    #[test]
    fn at_most_bounds_every_model() {
        for bound in 0..5 {
            let mut oracle = Context::default();
            let literals = atoms(&mut oracle, &["a", "b", "c", "d", "e", "f"]);
            oracle.at_most(bound, &literals).unwrap();

            // Lean true, so each model is as large as the bound allows.
            let model = oracle.solve(false).unwrap().unwrap();
            let count = literals.iter().filter(|l| model.holds(**l)).count();
            assert_eq!(count, bound);

            for literal in literals.iter().take(bound) {
                oracle.force(*literal).unwrap();
            }
            assert!(oracle.solve(false).unwrap().is_some());

            oracle.force(literals[bound]).unwrap();
            assert_eq!(oracle.solve(false), Ok(None));
            oracle.reset_decisions();
        }
    }

    #[test]
    fn pigeons() {
        // Three pigeons, two holes.
        let mut oracle = Context::default();
        let mut holes: Vec<Vec<CLiteral>> = vec![Vec::default(), Vec::default()];

        for pigeon in 0..3 {
            let names = [format!("p{pigeon}h0"), format!("p{pigeon}h1")];
            let names = names.iter().map(String::as_str).collect::<Vec<_>>();
            let choices = atoms(&mut oracle, &names);
            oracle.assert(Constraint::Clause(choices.clone())).unwrap();
            for (hole, choice) in choices.into_iter().enumerate() {
                holes[hole].push(choice);
            }
        }

        for hole in &holes {
            oracle.at_most(1, hole).unwrap();
        }

        assert_eq!(oracle.solve(false), Ok(None));
    }

    #[test]
    fn unique_with_rules() {
        let mut oracle = Context::default();
        let colours = atoms(&mut oracle, &["red", "green", "blue"]);
        let warm = atoms(&mut oracle, &["warm"])[0];

        oracle.unique(&colours).unwrap();
        oracle
            .assert(Constraint::Rule { head: warm.atom(), body: vec![colours[0]] })
            .unwrap();

        oracle.force(warm).unwrap();
        let model = oracle.solve(false).unwrap().unwrap();
        assert!(model.holds(colours[0]));
        assert!(!model.holds(colours[1]));
        assert!(!model.holds(colours[2]));
    }
}

mod decisions {
    use super::*;

    fn chain(oracle: &mut impl Oracle) -> Vec<CLiteral> {
        let literals = atoms(oracle, &["a", "b", "c", "d", "e", "f", "g", "h"]);
        for pair in literals.windows(2) {
            oracle
                .assert(Constraint::Clause(vec![pair[0].negate(), pair[1].negate()]))
                .unwrap();
        }
        literals
    }

    #[test]
    fn random_decisions_give_models() {
        for seed in 0..32 {
            let mut config = Config::default();
            config.seed.value = seed;
            config.polarity_lean.value = 0.5;
            config.random_decision_bias.value = 0.5;

            let mut oracle = Context::from_config(config);
            let literals = chain(&mut oracle);
            let model = oracle.solve(false).unwrap().unwrap();

            for pair in literals.windows(2) {
                assert!(!(model.holds(pair[0]) && model.holds(pair[1])));
            }
        }
    }

    #[test]
    fn optimized_models_are_minimal() {
        let mut oracle = Context::default();
        let literals = chain(&mut oracle);
        oracle.assert(Constraint::Clause(vec![literals[3], literals[5]])).unwrap();

        let model = oracle.solve(true).unwrap().unwrap();
        let true_atoms = model.true_atoms().collect::<Vec<Atom>>();
        assert_eq!(true_atoms.len(), 1);
    }

    #[test]
    fn same_seed_same_model() {
        let solve = |seed: u64| {
            let mut config = Config::default();
            config.seed.value = seed;
            config.polarity_lean.value = 0.5;
            let mut oracle = Context::from_config(config);
            chain(&mut oracle);
            oracle.solve(false).unwrap().unwrap()
        };

        assert_eq!(solve(7), solve(7));
    }
}
