/*!
Tools for building a context.

# Clauses

Clauses are added with [add_clause](GenericContext::add_clause).
Each clause is put in canonical form before being stored, and a tautology or a clause identical to some stored clause is noted rather than stored.

```rust
# use otter_world::context::Context;
# use otter_world::db::clause::ClauseOk;
# use otter_world::structures::literal::CLiteral;
let mut the_context = Context::default();
let p = the_context.fresh_atom(None).unwrap();
let q = the_context.fresh_atom(None).unwrap();

let clause = vec![CLiteral::new(q, true), CLiteral::new(p, false)];
let reordered = vec![CLiteral::new(p, false), CLiteral::new(q, true)];

assert!(matches!(the_context.add_clause(clause), Ok(ClauseOk::Added(_))));
assert_eq!(the_context.add_clause(reordered), Ok(ClauseOk::Duplicate));
```

# Rules

Rules are added with [add_rule](GenericContext::add_rule).
See [db::rule](crate::db::rule) for the interpretation of a rule.

# Cardinality

Bounds on the number of true literals are added with [add_at_most](GenericContext::add_at_most).
*/

mod cardinality;

use crate::{
    context::GenericContext,
    db::clause::ClauseOk,
    structures::{
        atom::Atom,
        clause::{preprocess_clause, CClause, Clause, PreprocessingOk},
        literal::CLiteral,
        name::PropositionName,
    },
    types::err::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A fresh atom, with the given name if any.
    ///
    /// If the name is already in use, the atom with the name is returned.
    pub fn fresh_atom(&mut self, name: Option<PropositionName>) -> Result<Atom, err::OracleError> {
        if let Some(atom) = name.as_ref().and_then(|name| self.atom_db.atom_named(name)) {
            return Ok(atom);
        }
        let atom = self.atom_db.fresh_atom(name)?;
        self.note_input();
        Ok(atom)
    }

    /// Adds a clause to the context.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, err::OracleError> {
        let mut clause = clause.canonical();

        if let Some(unknown) = clause.iter().find(|l| !self.atom_db.contains(l.atom())) {
            return Err(err::OracleError::UnknownAtom(unknown.atom()));
        }

        if preprocess_clause(&mut clause) == PreprocessingOk::Tautology {
            return Ok(ClauseOk::Tautology);
        }

        let result = self.clause_db.store(clause);
        if matches!(result, ClauseOk::Added(_)) {
            self.note_input();
        }
        Ok(result)
    }

    /// Adds the rule: `head` if every literal of `body`.
    ///
    /// Returns [Duplicate](ClauseOk::Duplicate) if the rule has been added before, [Tautology](ClauseOk::Tautology) if the body can never hold, and otherwise the result of storing the clause from the body to the head.
    pub fn add_rule(&mut self, head: Atom, body: CClause) -> Result<ClauseOk, err::OracleError> {
        if body.is_empty() {
            return Err(err::OracleError::EmptyBody(head));
        }
        if !self.atom_db.contains(head) {
            return Err(err::OracleError::UnknownAtom(head));
        }
        if let Some(unknown) = body.iter().find(|l| !self.atom_db.contains(l.atom())) {
            return Err(err::OracleError::UnknownAtom(unknown.atom()));
        }

        let mut body = body;
        if preprocess_clause(&mut body) == PreprocessingOk::Tautology {
            return Ok(ClauseOk::Tautology);
        }

        if self.rule_db.contains(head, &body) {
            return Ok(ClauseOk::Duplicate);
        }

        let support = self.support(&body)?;

        // The support implies the head.
        let result = self.add_clause(vec![support.negate(), CLiteral::new(head, true)])?;

        self.rule_db.record(head, body, support);
        self.note_input();
        Ok(result)
    }

    /// Declares an atom to be the head of rules, so the atom holds only if some body of a rule for the atom holds.
    pub fn add_head(&mut self, head: Atom) -> Result<(), err::OracleError> {
        if !self.atom_db.contains(head) {
            return Err(err::OracleError::UnknownAtom(head));
        }
        self.rule_db.declare_head(head);
        self.note_input();
        Ok(())
    }

    /// A literal equivalent to the conjunction of the body.
    fn support(&mut self, body: &CClause) -> Result<CLiteral, err::OracleError> {
        if let [literal] = body.as_slice() {
            return Ok(*literal);
        }

        if let Some(atom) = self.rule_db.definition(body) {
            return Ok(CLiteral::new(atom, true));
        }

        let aux = CLiteral::new(self.fresh_atom(None)?, true);

        // aux → b, for each literal b of the body.
        for literal in body {
            self.add_clause(vec![aux.negate(), *literal])?;
        }

        // The body → aux.
        let mut sufficient = body.iter().map(|literal| literal.negate()).collect::<CClause>();
        sufficient.push(aux);
        self.add_clause(sufficient)?;

        self.rule_db.define(body.clone(), aux.atom());
        Ok(aux)
    }
}
