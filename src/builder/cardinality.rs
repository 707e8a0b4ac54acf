//! Bounds on the number of true literals in a collection.
//!
//! A bound of one is encoded pairwise: for each pair of literals, the clause stating not both hold.
//!
//! Larger bounds are encoded with a sequential counter.
//! For literals *x₁*, …, *xₘ* and bound *k*, auxiliary atoms *sᵢⱼ* state at least *j* of *x₁*, …, *xᵢ* hold, and the clauses:
//! - *xᵢ* → *sᵢ₁*
//! - *sᵢ₋₁ⱼ* → *sᵢⱼ*
//! - *xᵢ* ∧ *sᵢ₋₁ⱼ₋₁* → *sᵢⱼ*
//! - *xᵢ* → ¬*sᵢ₋₁ₖ*
//!
//! ensure the count never exceeds *k*.

use crate::{
    context::GenericContext,
    structures::{clause::CClause, literal::CLiteral},
    types::err::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Adds the constraint that at most `bound` of the literals hold.
    pub fn add_at_most(&mut self, bound: usize, literals: &[CLiteral]) -> Result<(), err::OracleError> {
        let mut literals = literals.to_vec();
        literals.sort_unstable();
        literals.dedup();

        if literals.len() <= bound {
            return Ok(());
        }

        match bound {
            0 => {
                for literal in literals {
                    self.add_clause(literal.negate())?;
                }
            }

            1 => {
                for (index, a) in literals.iter().enumerate() {
                    for b in &literals[index + 1..] {
                        self.add_clause(vec![a.negate(), b.negate()])?;
                    }
                }
            }

            _ => self.sequential_counter(bound, &literals)?,
        }

        Ok(())
    }

    fn sequential_counter(&mut self, bound: usize, literals: &[CLiteral]) -> Result<(), err::OracleError> {
        let mut previous: Vec<CLiteral> = Vec::with_capacity(bound);

        for (index, x) in literals.iter().enumerate() {
            let last = index + 1 == literals.len();

            // The final literal only needs to respect the bound.
            if last {
                if let Some(full) = previous.last() {
                    self.add_clause(vec![x.negate(), full.negate()])?;
                }
                break;
            }

            let mut registers = Vec::with_capacity(bound);
            for _ in 0..bound {
                registers.push(CLiteral::new(self.fresh_atom(None)?, true));
            }

            self.add_clause(vec![x.negate(), registers[0]])?;

            match index {
                0 => {
                    for register in &registers[1..] {
                        self.add_clause(register.negate())?;
                    }
                }

                _ => {
                    for j in 0..bound {
                        self.add_clause(vec![previous[j].negate(), registers[j]])?;
                        if j > 0 {
                            let carry: CClause = vec![x.negate(), previous[j - 1].negate(), registers[j]];
                            self.add_clause(carry)?;
                        }
                    }
                    self.add_clause(vec![x.negate(), previous[bound - 1].negate()])?;
                }
            }

            previous = registers;
        }

        Ok(())
    }
}

#[cfg(test)]
mod cardinality_tests {
    use crate::{
        context::Context,
        oracle::Oracle,
        structures::{atom::Atom, literal::CLiteral},
    };

    fn atoms(context: &mut Context, count: usize) -> Vec<Atom> {
        (0..count).map(|_| context.fresh_atom(None).unwrap()).collect()
    }

    #[test]
    fn at_most_two_of_four() {
        let mut context = Context::default();
        let xs = atoms(&mut context, 4);
        let literals = xs.iter().map(|x| CLiteral::new(*x, true)).collect::<Vec<_>>();
        context.add_at_most(2, &literals).unwrap();

        // With every decision true, the bound is what keeps the model small.
        let model = context.solve(false).unwrap().unwrap();
        let true_count = xs.iter().filter(|x| model.value_of(**x) == Some(true)).count();
        assert_eq!(true_count, 2);

        for x in &xs[..3] {
            context.force(CLiteral::new(*x, true)).unwrap();
        }
        assert_eq!(context.solve(false), Ok(None));
    }

    #[test]
    fn at_most_one() {
        let mut context = Context::default();
        let xs = atoms(&mut context, 3);
        let literals = xs.iter().map(|x| CLiteral::new(*x, true)).collect::<Vec<_>>();
        context.add_at_most(1, &literals).unwrap();

        context.force(literals[1]).unwrap();
        let model = context.solve(false).unwrap().unwrap();
        assert_eq!(model.value_of(xs[0]), Some(false));
        assert_eq!(model.value_of(xs[1]), Some(true));
        assert_eq!(model.value_of(xs[2]), Some(false));
    }
}
