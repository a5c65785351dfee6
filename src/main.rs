use std::thread;

use anyhow::Context;
use clap::Parser;
use rand::Rng;

use maze_carve::generators::{new_generator, Generator, GeneratorKind};
use maze_carve::settings::Settings;

pub struct State {
    pub settings: Settings,
    pub generator_kind: GeneratorKind,
    pub maze_generator: Box<dyn Generator>,
    pub seed: u64,
    pub steps: usize,
}

impl State {
    fn new(settings: Settings) -> anyhow::Result<Self> {
        let seed = settings
            .seed
            .unwrap_or_else(|| rand::thread_rng().gen());
        let maze_generator = new_generator(
            settings.kind,
            settings.rows,
            settings.columns,
            settings.bias,
            seed,
        )
        .with_context(|| {
            format!(
                "could not set up {} over {}x{}",
                settings.kind, settings.rows, settings.columns
            )
        })?;

        Ok(Self {
            generator_kind: settings.kind,
            settings,
            maze_generator,
            seed,
            steps: 0,
        })
    }

    // returns true once the maze is finished
    fn update(&mut self) -> anyhow::Result<bool> {
        let result = self
            .maze_generator
            .step()
            .with_context(|| format!("{} failed at step {}", self.generator_kind, self.steps))?;
        self.steps += 1;

        if let Some(cell) = result.current {
            log::trace!("step {} at cell {}", self.steps, cell);
        }

        Ok(result.completed)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut state = State::new(Settings::parse())?;
    log::info!(
        "generating {}x{} maze with {} (seed {})",
        state.settings.rows,
        state.settings.columns,
        state.generator_kind,
        state.seed
    );

    // the core never sleeps, pacing is up to us
    while !state.update()? {
        if !state.settings.step_delay.is_zero() {
            thread::sleep(state.settings.step_delay);
        }
    }

    let grid = state.maze_generator.grid();
    log::info!(
        "finished after {} steps, {} walls removed",
        state.steps,
        grid.passage_count()
    );
    print!("{}", grid);

    Ok(())
}
