/*!
Reading a questionnaire.

A questionnaire is read line by line, with each line one of:
- A comment, beginning `//`, or a blank line, which is skipped.
- `Q: <text>`, beginning a question.
- `A: <text>`, beginning an answer to the most recent question.
- An indented, comma-separated, list of phrases, each an implication of the most recent answer (or of the question, if no answer has been read).
- `<head> <= <body>`, a rule: the head holds if every phrase of the comma-separated body holds.
- `<head> <- <body>`, an implication: if every phrase of the body holds, the head holds.
- `contradiction: <phrases>`, asserting not every phrase holds.
- `unique: <phrases>`, asserting exactly one phrase holds.
- `mutually exclusive: <phrases>`, asserting at most one phrase holds.

Commands are matched without regard to case.
Rules, implications, and the constraints of the final three commands are asserted to the world as they are read.

Each phrase is read and resolved by the [world](crate::world::World), so reading a questionnaire compiles every predicate the questionnaire mentions.

Any error is reported as a [Line](crate::types::err::ParseError::Line) error, with the 1-based number of the line.

```rust
# use otter_world::config::Config;
# use otter_world::questionnaire::Questionnaire;
# use otter_world::world::World;
let mut world = World::from_config(Config::default()).unwrap();
let text = "
// Family
Q: How is your mother?
A: She is well.
    mother is alive
A: She passed away.
    mother is dead
";
let questionnaire = Questionnaire::parse(&mut world, text).unwrap();
assert_eq!(questionnaire.questions.len(), 1);
assert_eq!(questionnaire.questions[0].answers.len(), 2);
```
*/

use std::io::{BufRead, Read};

use crate::{
    misc::log::targets::{self},
    oracle::{Constraint, Oracle},
    structures::{atom::Atom, literal::CLiteral},
    types::err::{self, ErrorKind},
    world::World,
};

/// Some text, with implications.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quip {
    pub text: String,

    pub implications: Vec<CLiteral>,
}

/// A question, with implications of its own and a list of answers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub text: String,

    /// Implications of the question, which hold whichever answer is chosen.
    pub implications: Vec<CLiteral>,

    pub answers: Vec<Quip>,
}

/// The questions of a questionnaire, in order.
#[derive(Clone, Debug, Default)]
pub struct Questionnaire {
    pub questions: Vec<Question>,
}

/// The state of a read.
#[derive(Default)]
struct Reader {
    questions: Vec<Question>,

    question: Option<Question>,

    answer: Option<Quip>,
}

impl Reader {
    fn finish_answer(&mut self) {
        if let (Some(question), Some(answer)) = (self.question.as_mut(), self.answer.take()) {
            question.answers.push(answer);
        }
    }

    fn finish_question(&mut self) {
        self.finish_answer();
        if let Some(question) = self.question.take() {
            log::trace!(target: targets::QUESTIONNAIRE, "Question \"{}\" with {} answer(s)", question.text, question.answers.len());
            self.questions.push(question);
        }
    }

    fn implications(&mut self) -> Result<&mut Vec<CLiteral>, err::ParseError> {
        match (&mut self.answer, &mut self.question) {
            (Some(answer), _) => Ok(&mut answer.implications),
            (None, Some(question)) => Ok(&mut question.implications),
            (None, None) => Err(err::ParseError::Orphan),
        }
    }
}

/// The remainder of the line, trimmed, if the line begins with the command.
fn command<'l>(prefix: &str, line: &'l str) -> Option<&'l str> {
    match line.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Some(line[prefix.len()..].trim()),
        _ => None,
    }
}

impl Questionnaire {
    /// Reads a questionnaire from a string.
    pub fn parse<O: Oracle>(world: &mut World<O>, text: &str) -> Result<Self, err::ParseError> {
        let mut reader = Reader::default();

        for (index, line) in text.lines().enumerate() {
            if let Err(e) = Self::read_line(world, &mut reader, line) {
                return Err(err::ParseError::Line {
                    line: index + 1,
                    reason: Box::new(e),
                });
            }
        }

        reader.finish_question();
        Ok(Questionnaire { questions: reader.questions })
    }

    /// Reads a questionnaire from some reader.
    pub fn read<O: Oracle>(world: &mut World<O>, mut reader: impl BufRead) -> Result<Self, err::ParseError> {
        let mut text = String::default();
        reader.read_to_string(&mut text)?;
        Self::parse(world, &text)
    }

    fn read_line<O: Oracle>(world: &mut World<O>, reader: &mut Reader, line: &str) -> Result<(), ErrorKind> {
        if line.trim().is_empty() || line.starts_with("//") {
            return Ok(());
        }

        if let Some(text) = command("Q:", line) {
            reader.finish_question();
            reader.question = Some(Question {
                text: text.to_string(),
                implications: Vec::default(),
                answers: Vec::default(),
            });
        } else if let Some(text) = command("A:", line) {
            if reader.question.is_none() {
                return Err(err::ParseError::Orphan.into());
            }
            reader.finish_answer();
            reader.answer = Some(Quip {
                text: text.to_string(),
                implications: Vec::default(),
            });
        } else if line.starts_with(char::is_whitespace) {
            let literals = literals(world, line)?;
            reader.implications()?.extend(literals);
        } else if let Some((head, body)) = line.split_once("<=") {
            let head = head_atom(world, head)?;
            let body = literals(world, body)?;
            world.oracle_mut().assert(Constraint::Rule { head, body })?;
        } else if let Some((head, body)) = line.split_once("<-") {
            let head = CLiteral::new(head_atom(world, head)?, true);
            let constraint = match literals(world, body)?.as_slice() {
                [body] => Constraint::Implication { body: *body, head },
                body => {
                    let mut clause = body.iter().map(CLiteral::negate).collect::<Vec<_>>();
                    clause.push(head);
                    Constraint::Clause(clause)
                }
            };
            world.oracle_mut().assert(constraint)?;
        } else if let Some(list) = command("contradiction:", line) {
            let clause = literals(world, list)?.iter().map(CLiteral::negate).collect();
            world.oracle_mut().assert(Constraint::Clause(clause))?;
        } else if let Some(list) = command("unique:", line) {
            let literals = literals(world, list)?;
            world.oracle_mut().unique(&literals)?;
        } else if let Some(list) = command("mutually exclusive:", line) {
            let literals = literals(world, list)?;
            world.oracle_mut().at_most(1, &literals)?;
        } else {
            return Err(err::ParseError::Syntax(line.trim().to_string()).into());
        }

        Ok(())
    }
}

/// The literals of a comma-separated list of phrases.
fn literals<O: Oracle>(world: &mut World<O>, list: &str) -> Result<Vec<CLiteral>, ErrorKind> {
    list.split(',').map(|phrase| world.literal(phrase)).collect()
}

/// The atom of the head of a rule or implication.
fn head_atom<O: Oracle>(world: &mut World<O>, head: &str) -> Result<Atom, ErrorKind> {
    let literal = world.literal(head)?;
    match literal.polarity() {
        true => Ok(literal.atom()),
        false => Err(err::ParseError::NegatedHead(head.trim().to_string()).into()),
    }
}

#[cfg(test)]
mod questionnaire_tests {
    use super::*;
    use crate::config::Config;

    fn world() -> World {
        World::from_config(Config::default()).unwrap()
    }

    #[test]
    fn questions_and_answers() {
        let mut world = world();
        let text = "Q: Who do you miss?
    mother is brave
a: My mother.
    mother is dead, loves mother
A: Nobody.

q: Any siblings?
A: A brother.
    brother
";
        // No syntax rule reads `_ is brave`.
        assert!(matches!(
            Questionnaire::parse(&mut world, text),
            Err(err::ParseError::Line { line: 2, .. })
        ));

        let text = text.replace("mother is brave", "parent");
        let questionnaire = Questionnaire::parse(&mut world, &text).unwrap();

        assert_eq!(questionnaire.questions.len(), 2);
        let first = &questionnaire.questions[0];
        assert_eq!(first.text, "Who do you miss?");
        assert_eq!(first.implications.len(), 1);
        assert_eq!(first.answers.len(), 2);
        assert_eq!(first.answers[0].implications.len(), 2);
        assert!(first.answers[1].implications.is_empty());
        assert_eq!(questionnaire.questions[1].answers[0].text, "A brother.");
    }

    #[test]
    fn orphans() {
        let mut world = world();
        assert_eq!(
            Questionnaire::parse(&mut world, "  mother is dead").map(|_| ()),
            Err(err::ParseError::Line {
                line: 1,
                reason: Box::new(ErrorKind::Parse(err::ParseError::Orphan))
            })
        );
        assert!(Questionnaire::parse(&mut world, "// none\nA: Yes.").is_err());
    }

    #[test]
    fn negated_head() {
        let mut world = world();
        assert_eq!(
            Questionnaire::parse(&mut world, "!happy <= mother is dead").map(|_| ()),
            Err(err::ParseError::Line {
                line: 1,
                reason: Box::new(ErrorKind::Parse(err::ParseError::NegatedHead("!happy".to_string())))
            })
        );
    }

    #[test]
    fn constraints() {
        let mut world = world();
        let text = "grieving <= mother is dead, loves mother
lonely <- grieving
unique: cat, dog
contradiction: lonely, cat
";
        Questionnaire::parse(&mut world, text).unwrap();

        let dead = world.literal("mother is dead").unwrap();
        let loves = world.literal("loves mother").unwrap();
        let cat = world.literal("cat").unwrap();
        let dog = world.literal("dog").unwrap();

        assert!(world.probe(&[&[dead, loves, dog]]).unwrap());
        assert!(!world.probe(&[&[dead, loves, cat]]).unwrap());
        assert!(!world.probe(&[&[cat, dog]]).unwrap());
        assert!(!world.probe(&[&[cat.negate(), dog.negate()]]).unwrap());
    }

    #[test]
    fn unknown_command() {
        let mut world = world();
        assert!(matches!(
            Questionnaire::parse(&mut world, "Q: Fine?\nperhaps: yes"),
            Err(err::ParseError::Line { line: 2, .. })
        ));
    }
}
