use crossterm::event::{self, Event};
use jump_runner::build_info::version_line;
use jump_runner::cli::{help_text, parse_args, CliCommand, CliOptions};
use jump_runner::core::driver::{Driver, FrameClock};
use jump_runner::core::config::Tuning;
use jump_runner::input::{map_key, map_mouse, HostInput};
use jump_runner::ui::{restore_terminal, setup_terminal, TerminalSink};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::backend::CrosstermBackend;
use std::fs::File;
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Instant;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run with --help for usage.");
            std::process::exit(2);
        }
    };

    match options.command {
        CliCommand::Help => {
            println!("{}", help_text());
            return Ok(());
        }
        CliCommand::Version => {
            println!("{}", version_line());
            return Ok(());
        }
        CliCommand::PrintConfig => {
            let (tuning, source) = Tuning::resolve(options.config.as_deref())?;
            eprintln!("# tuning from {}", source);
            println!("{}", tuning.to_json()?);
            return Ok(());
        }
        CliCommand::Play => {}
    }

    if let Some(path) = &options.log_file {
        init_logging(path)?;
    }

    play(&options)
}

/// Logs go to a file only; the terminal belongs to the game.
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn play(options: &CliOptions) -> io::Result<()> {
    let (tuning, source) = Tuning::resolve(options.config.as_deref())?;
    let seed = options.seed.unwrap_or_else(rand::random);
    log::info!("Starting session: seed {}, tuning from {}", seed, source);

    let mut driver = Driver::new(tuning, ChaCha8Rng::seed_from_u64(seed));

    let terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            // Setup can fail halfway, after raw mode is already on
            if let Err(restore_err) = restore_terminal(&mut io::stdout()) {
                log::warn!("Terminal restore failed: {}", restore_err);
            }
            return Err(e);
        }
    };
    let mut sink = TerminalSink::new(terminal, seed);

    let result = run_loop(&mut driver, &mut sink);

    drop(sink);
    let restored = restore_terminal(&mut io::stdout());

    let state = driver.state();
    log::info!(
        "Exiting after {} ticks with score {}",
        state.tick_count,
        state.display_score()
    );
    if let Err(e) = &result {
        log::error!("Game loop failed: {}", e);
    }
    result.and(restored)
}

fn run_loop(
    driver: &mut Driver<ChaCha8Rng>,
    sink: &mut TerminalSink<CrosstermBackend<Stdout>>,
) -> io::Result<()> {
    let mut clock = FrameClock::new();
    let mut last_frame = Instant::now();

    driver.redraw(sink)?;

    loop {
        let timeout = if driver.is_scheduled() {
            clock.until_next_frame()
        } else {
            // Idle until input arrives; nothing animates while stopped
            std::time::Duration::from_millis(250)
        };

        if event::poll(timeout)? {
            let input = match event::read()? {
                Event::Key(key) => map_key(&key),
                Event::Mouse(mouse) => map_mouse(&mouse, &sink.pointer_targets()),
                Event::Resize(_, _) => {
                    driver.redraw(sink)?;
                    HostInput::Other
                }
                _ => HostInput::Other,
            };

            match input {
                HostInput::Quit => return Ok(()),
                HostInput::Command(command) => {
                    if driver.dispatch(command) {
                        // Re-armed: start timing the fresh session from now
                        clock.reset();
                        last_frame = Instant::now();
                        driver.redraw(sink)?;
                    }
                }
                HostInput::Other => {}
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last_frame);
        last_frame = now;

        if driver.is_scheduled() {
            let due = clock.due_frames(elapsed);
            driver.run_frames(due, sink)?;
        } else {
            clock.reset();
        }
    }
}
