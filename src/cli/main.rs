#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use clap::Parser;

use otter_world::{dialogue::Dialogue, world::World};

mod args;
mod read;
mod terminal;

use args::Args;
use read::read_questionnaire;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Args>();
        std::process::exit(0);
    }

    let config = match args.config() {
        Ok(config) => config,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };
    let min_options = config.min_options.value;

    let mut world = match World::from_config(config) {
        Ok(world) => world,
        Err(e) => {
            println!("Failed to build the ontology: {e}");
            std::process::exit(1);
        }
    };

    let questionnaire = match read_questionnaire(args.path.as_deref(), &mut world) {
        Ok(questionnaire) => questionnaire,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };

    let mut dialogue = Dialogue::new(questionnaire, min_options);

    let result = match args.first {
        true => dialogue.run(&mut world, |_, _| 0),
        false => interactive(&mut dialogue, &mut world),
    };

    if let Err(e) = result {
        println!("Dialogue error: {e}");
        std::process::exit(2);
    }

    let Some(snapshot) = world.snapshot() else {
        std::process::exit(0);
    };

    match args.json {
        true => match serde_json::to_string_pretty(snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                println!("Failed to write the world: {e}");
                std::process::exit(2);
            }
        },

        false => {
            if let Err(e) = terminal::show_summary(&snapshot.summary) {
                println!("{e}");
                std::process::exit(2);
            }
        }
    }
}

/// Asks each question on the terminal, until the dialogue finishes or input ends.
fn interactive(dialogue: &mut Dialogue, world: &mut World) -> Result<(), otter_world::types::err::ErrorKind> {
    let mut posed = dialogue.next_question(world)?;

    'dialogue: while posed {
        let Some(question) = dialogue.current() else {
            break 'dialogue;
        };
        let options = dialogue.options().collect::<Vec<_>>();

        if terminal::show_question(question, &options).is_err() {
            break 'dialogue;
        }

        match terminal::read_choice(options.len()) {
            Ok(Some(choice)) => posed = dialogue.answer(world, choice)?,
            _ => break 'dialogue,
        }
    }

    Ok(())
}
