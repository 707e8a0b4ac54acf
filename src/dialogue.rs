/*!
A dialogue through a questionnaire.

Questions are posed in order.
Before a question is posed, each answer is [probed](crate::world::World::probe) together with the implications accumulated so far and the implications of the question, and only the consistent answers are offered.
A question with fewer consistent answers than the configured [minimum](crate::config::Config::min_options) is skipped.

On an answer, the implications of the question and the answer are accumulated, and the next question is found.
When no question remains, the world is [committed](crate::world::World::commit) to the accumulated implications.

```rust
# use otter_world::config::Config;
# use otter_world::dialogue::Dialogue;
# use otter_world::questionnaire::Questionnaire;
# use otter_world::world::World;
let mut world = World::from_config(Config::default()).unwrap();
let text = "
Q: How is your mother?
A: She is well.
    mother is alive
A: She passed away.
    mother is dead
";
let questionnaire = Questionnaire::parse(&mut world, text).unwrap();

let mut dialogue = Dialogue::new(questionnaire, 2);
dialogue.next_question(&mut world).unwrap();
assert_eq!(dialogue.options().count(), 2);

dialogue.answer(&mut world, 1).unwrap();
assert!(dialogue.is_finished());
assert!(world.summary().unwrap().contains("dead"));
```
*/

use crate::{
    misc::log::targets::{self},
    oracle::Oracle,
    questionnaire::{Question, Questionnaire, Quip},
    structures::literal::CLiteral,
    types::err::{self, ErrorKind},
    world::World,
};

/// The state of a dialogue.
pub struct Dialogue {
    questionnaire: Questionnaire,

    /// The index of the next question to consider.
    next: usize,

    /// The index of the question posed, if any.
    current: Option<usize>,

    /// Indices of the answers offered to the current question.
    offered: Vec<usize>,

    implications: Vec<CLiteral>,

    min_options: usize,

    finished: bool,
}

impl Dialogue {
    /// A dialogue through the questionnaire, posing only questions with at least `min_options` consistent answers.
    pub fn new(questionnaire: Questionnaire, min_options: usize) -> Self {
        Dialogue {
            questionnaire,
            next: 0,
            current: None,
            offered: Vec::default(),
            implications: Vec::default(),
            min_options: std::cmp::max(min_options, 1),
            finished: false,
        }
    }

    /// The question posed, if any.
    pub fn current(&self) -> Option<&Question> {
        self.current.map(|index| &self.questionnaire.questions[index])
    }

    /// The answers offered to the question posed, in order.
    pub fn options(&self) -> impl Iterator<Item = &Quip> {
        let question = self.current();
        self.offered
            .iter()
            .filter_map(move |index| question.and_then(|question| question.answers.get(*index)))
    }

    /// The implications accumulated so far.
    pub fn implications(&self) -> &[CLiteral] {
        &self.implications
    }

    /// Whether the dialogue has committed the world.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Poses the next question with enough consistent answers, or commits the world if there is no such question.
    ///
    /// Returns true if a question was posed.
    pub fn next_question<O: Oracle>(&mut self, world: &mut World<O>) -> Result<bool, ErrorKind> {
        self.current = None;
        self.offered.clear();

        while self.next < self.questionnaire.questions.len() {
            let index = self.next;
            self.next += 1;

            let question = &self.questionnaire.questions[index];
            let mut offered = Vec::default();

            for (answer_index, answer) in question.answers.iter().enumerate() {
                let sets: [&[CLiteral]; 3] = [&self.implications, &question.implications, &answer.implications];
                if world.probe(&sets)? {
                    offered.push(answer_index);
                }
            }

            log::info!(target: targets::DIALOGUE, "\"{}\": {} of {} answer(s) consistent", question.text, offered.len(), question.answers.len());

            if offered.len() >= self.min_options {
                self.current = Some(index);
                self.offered = offered;
                return Ok(true);
            }
        }

        world.commit(&self.implications)?;
        self.finished = true;
        log::info!(target: targets::DIALOGUE, "Committed to {} implication(s)", self.implications.len());
        Ok(false)
    }

    /// Chooses the offered answer at the given index, then moves to the next question.
    ///
    /// Returns true if a question was posed, and false if the world was committed.
    /// If no question is posed, nothing happens and false is returned.
    ///
    /// An index outside of the offered answers is an error, and the current question remains.
    pub fn answer<O: Oracle>(&mut self, world: &mut World<O>, choice: usize) -> Result<bool, ErrorKind> {
        let Some(question) = self.current else {
            return Ok(false);
        };
        let Some(answer) = self.offered.get(choice).copied() else {
            return Err(err::DialogueError::NoSuchAnswer(choice).into());
        };

        let question = &self.questionnaire.questions[question];
        let chosen = question
            .implications
            .iter()
            .chain(question.answers[answer].implications.iter())
            .copied()
            .collect::<Vec<_>>();

        for implication in chosen {
            if !self.implications.contains(&implication) {
                self.implications.push(implication);
            }
        }

        self.next_question(world)
    }

    /// Runs the dialogue to completion, choosing answers with `choose` from the question and the offered answers.
    pub fn run<O: Oracle>(
        &mut self,
        world: &mut World<O>,
        mut choose: impl FnMut(&Question, &[&Quip]) -> usize,
    ) -> Result<(), ErrorKind> {
        let mut posed = self.next_question(world)?;
        while posed {
            let choice = match self.current() {
                Some(question) => choose(question, &self.options().collect::<Vec<_>>()),
                None => break,
            };
            posed = self.answer(world, choice)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod dialogue_tests {
    use super::*;
    use crate::config::Config;

    const FAMILY: &str = "Q: How is your mother?
A: She is well.
    mother is alive
A: She passed away.
    mother is dead

Q: Do you speak with her?
A: Every day.
    mother is alive, loves mother
A: Only at her grave.
    mother is dead
";

    #[test]
    fn inconsistent_answers_are_not_offered() {
        let mut world = World::from_config(Config::default()).unwrap();
        let questionnaire = Questionnaire::parse(&mut world, FAMILY).unwrap();
        let mut dialogue = Dialogue::new(questionnaire, 1);

        assert!(dialogue.next_question(&mut world).unwrap());
        assert!(dialogue.answer(&mut world, 1).unwrap());

        let options = dialogue.options().map(|quip| quip.text.as_str()).collect::<Vec<_>>();
        assert_eq!(options, vec!["Only at her grave."]);

        assert!(!dialogue.answer(&mut world, 0).unwrap());
        assert!(dialogue.is_finished());
        assert_eq!(dialogue.implications().len(), 1);
    }

    #[test]
    fn questions_with_too_few_options_are_skipped() {
        let mut world = World::from_config(Config::default()).unwrap();
        let questionnaire = Questionnaire::parse(&mut world, FAMILY).unwrap();
        let mut dialogue = Dialogue::new(questionnaire, 2);

        dialogue.run(&mut world, |_, _| 0).unwrap();

        assert!(dialogue.is_finished());
        assert!(world.is_committed());
        let alive = world.literal("mother is alive").unwrap();
        assert!(world.snapshot().is_some_and(|snapshot| snapshot.holds(alive)));
    }

    #[test]
    fn out_of_range_answers() {
        let mut world = World::from_config(Config::default()).unwrap();
        let questionnaire = Questionnaire::parse(&mut world, FAMILY).unwrap();
        let mut dialogue = Dialogue::new(questionnaire, 2);

        assert!(dialogue.next_question(&mut world).unwrap());
        assert_eq!(
            dialogue.answer(&mut world, 7),
            Err(ErrorKind::Dialogue(err::DialogueError::NoSuchAnswer(7)))
        );
        assert_eq!(dialogue.current().map(|q| q.text.as_str()), Some("How is your mother?"));
        assert!(dialogue.implications().is_empty());
    }

    #[test]
    fn run_stops_on_an_answer_never_offered() {
        let mut world = World::from_config(Config::default()).unwrap();
        let questionnaire = Questionnaire::parse(&mut world, FAMILY).unwrap();
        let mut dialogue = Dialogue::new(questionnaire, 2);

        let mut asked = 0;
        let result = dialogue.run(&mut world, |_, options| {
            asked += 1;
            options.len() + 92
        });

        assert_eq!(result, Err(ErrorKind::Dialogue(err::DialogueError::NoSuchAnswer(94))));
        assert_eq!(asked, 1);
        assert!(!dialogue.is_finished());
        assert!(!world.is_committed());
    }
}
