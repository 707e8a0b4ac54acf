use otter_world::{
    config::Config,
    context::Context,
    kb::{
        predicate::{PredicateId, Signature},
        taxonomy::SortId,
        KnowledgeBase,
    },
    oracle::{Constraint, Oracle},
    structures::literal::CLiteral,
    syntax::Grammar,
    types::err::{self, ErrorKind},
    world::World,
};

struct Family {
    kb: KnowledgeBase,
    person: SortId,
    family: SortId,
}

fn family() -> Family {
    let mut kb = KnowledgeBase::new("entity");
    let person = kb.register_sort("person", "entity", &[]).unwrap();
    let family = kb.register_sort("family", "person", &[]).unwrap();
    kb.register_sort("parent", "family", &["mother", "father"]).unwrap();
    kb.register_sort("sibling", "family", &["brother", "sister"]).unwrap();
    kb.register_sort("rock", "entity", &["granite"]).unwrap();
    Family { kb, person, family }
}

fn unary(kb: &mut KnowledgeBase, name: &str, sort: SortId) -> PredicateId {
    kb.define_predicate(name, Signature::Unary(sort)).unwrap()
}

mod compilation {
    use super::*;

    #[test]
    fn sort_mismatch() {
        let Family { mut kb, person, .. } = family();
        let mut oracle = Context::default();
        let loves = unary(&mut kb, "loves", person);

        for (entity, expected) in [("granite", "person")] {
            assert_eq!(
                kb.call_unary(&mut oracle, loves, entity),
                Err(ErrorKind::Kb(err::KbError::SortMismatch {
                    predicate: "loves".to_string(),
                    argument: entity.to_string(),
                    expected: expected.to_string(),
                }))
            );
        }

        let parent = kb.taxonomy.sort_named("parent").unwrap();
        let strict = unary(&mut kb, "reveres", parent);
        assert!(kb.call_unary(&mut oracle, strict, "brother").is_err());
        assert!(kb.call_unary(&mut oracle, strict, "father").is_ok());
    }

    #[test]
    fn idempotence() {
        let Family { mut kb, person, .. } = family();
        let mut oracle = Context::default();
        let exists = unary(&mut kb, "exists", person);
        let likes = unary(&mut kb, "likes", person);
        let loves = unary(&mut kb, "loves", person);
        let hates = unary(&mut kb, "hates", person);
        kb.add_generalization(loves, likes).unwrap();
        kb.add_strong_generalization(loves, exists).unwrap();
        kb.mutually_exclusive(loves, hates).unwrap();

        let first = kb.call_unary(&mut oracle, loves, "mother").unwrap();
        let count = oracle.constraint_count();
        let atoms = kb.predicate(likes).domain.len();

        for _ in 0..3 {
            assert_eq!(kb.call_unary(&mut oracle, loves, "mother"), Ok(first));
            assert_eq!(oracle.constraint_count(), count);
            assert_eq!(kb.predicate(likes).domain.len(), atoms);
        }
    }

    #[test]
    fn strong_generalization() {
        let Family { mut kb, person, .. } = family();
        let mut oracle = Context::default();
        let exists = unary(&mut kb, "exists", person);
        let dead = unary(&mut kb, "dead", person);
        kb.add_strong_generalization(dead, exists).unwrap();

        let dead_mother = kb.call_unary(&mut oracle, dead, "mother").unwrap();
        oracle
            .assert(Constraint::Clause(vec![CLiteral::new(dead_mother, true)]))
            .unwrap();

        let mother_exists = kb
            .predicate(exists)
            .domain
            .iter()
            .map(|(_, atom)| atom)
            .next()
            .unwrap();
        assert_eq!(oracle.fixed_value(mother_exists), Ok(Some(true)));
    }

    #[test]
    fn strong_generalization_without_specialization() {
        let Family { mut kb, person, .. } = family();
        let mut oracle = Context::default();
        let exists = unary(&mut kb, "exists", person);
        let living = unary(&mut kb, "living", person);
        let dead = unary(&mut kb, "dead", person);
        kb.add_strong_generalization(living, exists).unwrap();
        kb.add_strong_generalization(dead, exists).unwrap();
        kb.mutually_exclusive(living, dead).unwrap();

        let living_father = kb.call_unary(&mut oracle, living, "father").unwrap();
        let father_exists = kb.call_unary(&mut oracle, exists, "father").unwrap();
        let dead_father = kb.call_unary(&mut oracle, dead, "father").unwrap();

        oracle.force(CLiteral::new(living_father, false)).unwrap();
        oracle.force(CLiteral::new(dead_father, false)).unwrap();
        let model = oracle.solve(false).unwrap().unwrap();
        assert_eq!(model.value_of(father_exists), Some(false));
    }

    #[test]
    fn mutual_exclusion() {
        let Family { mut kb, person, .. } = family();
        let mut oracle = Context::default();
        let loves = unary(&mut kb, "loves", person);
        let hates = unary(&mut kb, "hates", person);
        kb.mutually_exclusive(loves, hates).unwrap();

        let loves_brother = kb.call_unary(&mut oracle, loves, "brother").unwrap();
        oracle
            .assert(Constraint::Clause(vec![CLiteral::new(loves_brother, true)]))
            .unwrap();

        let mut world = World::new(kb, Grammar::default(), oracle, false);
        let hates_brother = world.call("hates", &["brother"]).unwrap();
        assert!(!world.probe(&[&[CLiteral::new(hates_brother, true)]]).unwrap());
        assert!(world.probe(&[&[CLiteral::new(hates_brother, false)]]).unwrap());
    }

    #[test]
    fn existential_retroactivity() {
        let Family { mut kb, person, family } = family();
        let mut oracle = Context::default();
        let likes = unary(&mut kb, "likes", person);

        let likes_mother = kb.call_unary(&mut oracle, likes, "mother").unwrap();
        oracle
            .assert(Constraint::Clause(vec![CLiteral::new(likes_mother, true)]))
            .unwrap();

        let someone = kb.existential(&mut oracle, likes, family).unwrap();
        assert_eq!(oracle.fixed_value(someone), Ok(Some(true)));
    }

    #[test]
    fn existential_forwards() {
        let Family { mut kb, person, family } = family();
        let mut oracle = Context::default();
        let likes = unary(&mut kb, "likes", person);

        let someone = kb.existential(&mut oracle, likes, family).unwrap();
        let likes_sister = kb.call_unary(&mut oracle, likes, "sister").unwrap();
        oracle
            .assert(Constraint::Clause(vec![CLiteral::new(likes_sister, true)]))
            .unwrap();

        assert_eq!(oracle.fixed_value(someone), Ok(Some(true)));
    }
}

mod worlds {
    use super::*;

    #[test]
    fn round_trip() {
        let mut kb = KnowledgeBase::new("entity");
        let person = kb.register_sort("person", "entity", &[]).unwrap();
        kb.register_sort("family", "person", &[]).unwrap();
        kb.register_sort("parent", "family", &["mother", "father"]).unwrap();
        let exists = unary(&mut kb, "exists", person);
        let loving = unary(&mut kb, "loving", person);
        kb.add_strong_generalization(loving, exists).unwrap();

        let mut world = World::new(kb, Grammar::default(), Context::default(), false);
        world.call("loving", &["mother"]).unwrap();
        let mother_exists = world.call("exists", &["mother"]).unwrap();

        let snapshot = world.commit(&[]).unwrap();
        assert!(snapshot.holds(CLiteral::new(mother_exists, true)));
        assert!(world
            .summary()
            .unwrap()
            .lines()
            .any(|line| line.contains("mother")));
    }

    #[test]
    fn probes_leave_the_summary() {
        let mut world = World::from_config(Config::default()).unwrap();
        let dead = world.literal("mother is dead").unwrap();
        let alive = world.literal("father is alive").unwrap();

        world.commit(&[dead]).unwrap();
        let summary = world.summary().unwrap().to_string();

        for _ in 0..4 {
            world.probe(&[&[dead.negate()], &[alive]]).unwrap();
            world.probe(&[&[alive.negate()]]).unwrap();
            assert_eq!(world.summary(), Ok(summary.as_str()));
        }
    }

    #[test]
    fn unsatisfiable_probe() {
        let Family { mut kb, person, .. } = family();
        let a = unary(&mut kb, "a", person);
        let b = unary(&mut kb, "b", person);
        kb.mutually_exclusive(a, b).unwrap();

        let mut world = World::new(kb, Grammar::default(), Context::default(), false);
        let a_x = CLiteral::new(world.call("a", &["x"]).unwrap(), true);
        let b_x = CLiteral::new(world.call("b", &["x"]).unwrap(), true);

        assert_eq!(world.probe(&[&[a_x], &[b_x]]), Ok(false));
        assert_eq!(world.probe(&[&[a_x]]), Ok(true));
    }

    #[test]
    fn extensions() {
        let mut world = World::from_config(Config::default()).unwrap();
        let dead = world.literal("mother is dead").unwrap();
        let alive = world.literal("father is alive").unwrap();
        let person = world.kb.taxonomy.sort_named("person").unwrap();

        assert!(world.extension("dead", Signature::Unary(person)).is_empty());

        world.commit(&[dead, alive]).unwrap();
        let dead = world
            .extension("dead", Signature::Unary(person))
            .into_iter()
            .map(|arguments| arguments.subject().to_string())
            .collect::<Vec<_>>();
        assert_eq!(dead, vec!["mother".to_string()]);
    }
}
