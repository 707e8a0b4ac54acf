//! Display of a dialogue on a terminal.

use std::io::{stdin, stdout, Write};

use crossterm::{
    style::{Print, PrintStyledContent, Stylize},
    QueueableCommand,
};

use otter_world::questionnaire::{Question, Quip};

/// Writes the question and the offered answers, numbered from 1.
pub(super) fn show_question(question: &Question, options: &[&Quip]) -> std::io::Result<()> {
    let mut stdout = stdout();

    stdout.queue(Print("\n"))?;
    stdout.queue(PrintStyledContent(question.text.as_str().bold()))?;
    stdout.queue(Print("\n"))?;

    for (index, option) in options.iter().enumerate() {
        stdout.queue(PrintStyledContent(format!("{:>3}: ", index + 1).dim()))?;
        stdout.queue(Print(format!("{}\n", option.text)))?;
    }

    stdout.flush()
}

/// Reads a choice from the terminal, as an index into the options.
///
/// Returns `None` on the end of input.
pub(super) fn read_choice(count: usize) -> std::io::Result<Option<usize>> {
    let mut stdout = stdout();

    loop {
        stdout.queue(PrintStyledContent("> ".cyan()))?;
        stdout.flush()?;

        let mut line = String::default();
        if stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim().parse::<usize>() {
            Ok(choice) if 0 < choice && choice <= count => return Ok(Some(choice - 1)),
            _ => {
                stdout.queue(PrintStyledContent(format!("Choose an answer from 1 to {count}.\n").yellow()))?;
            }
        }
    }
}

/// Writes the summary of a committed world.
pub(super) fn show_summary(summary: &str) -> std::io::Result<()> {
    let mut stdout = stdout();

    stdout.queue(Print("\n"))?;
    stdout.queue(PrintStyledContent("A possible you:".bold().green()))?;
    stdout.queue(Print(format!("\n{summary}\n")))?;

    stdout.flush()
}
