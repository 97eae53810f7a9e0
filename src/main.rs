use anyhow::{Context, Result};
use log::{debug, info, warn};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::{GameLoop, Tick};
use engine::input::{Action, InputManager};
use game::quiz::QuizEvent;
use game::{bpjs_questions, GameConfig, LevelData, TickEvents, World};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = GameConfig::default();
    info!("Starting {}...", config.screen.title);

    let level = LevelData::default_level(config.screen.width, config.screen.height);
    let mut world = match quiz_seed()? {
        Some(seed) => {
            info!("Quiz order seeded with {}", seed);
            World::with_seed(config, &level, bpjs_questions(), seed)?
        }
        None => World::new(config, &level, bpjs_questions())?,
    };
    let screen = world.config().screen.clone();
    let size = world.level().size();
    info!(
        "Level is {}x{}, falling below y = {} respawns",
        size.x,
        size.y,
        world.level().kill_plane_y()
    );

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(&screen.title)
        .with_inner_size(winit::dpi::LogicalSize::new(screen.width, screen.height))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut input = InputManager::new(screen.width, screen.height);
    let mut game_loop = GameLoop::new();
    let mut last_title = String::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                if input.process_keyboard_event(&event) == Some(Action::Pause) {
                    game_loop.toggle_pause();
                }
            }
            Event::WindowEvent {
                event: WindowEvent::MouseInput { state, button, .. },
                ..
            } => input.process_mouse_button(button, state),
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => {
                // Game coordinates are logical pixels
                let position = position.to_logical::<f64>(window.scale_factor());
                input.process_cursor_moved(position.x, position.y);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => input.reset(),
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                // Nothing is drawn yet; the quiz header goes to the title bar
                let snapshot = world.snapshot(game_loop.current_tick());
                let mut title = if snapshot.quiz.visible {
                    format!(
                        "{} - {} - {}",
                        screen.title,
                        snapshot.quiz.counter_label(),
                        snapshot.quiz.score_label()
                    )
                } else {
                    screen.title.clone()
                };
                if game_loop.is_paused() {
                    title.push_str(" (paused)");
                }
                if title != last_title {
                    window.set_title(&title);
                    last_title = title;
                }
            }
            Event::AboutToWait => {
                for _ in 0..game_loop.begin_frame() {
                    let tick = game_loop.next_tick();
                    let events = world.update(&input.frame_input(), tick);
                    input.update();
                    log_events(&events, &world, tick);
                    if events.quit_requested {
                        info!("Quit requested, shutting down...");
                        elwt.exit();
                        return;
                    }
                }
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// Optional fixed quiz order from `ADVENTURE_SEED`
fn quiz_seed() -> Result<Option<u64>> {
    match std::env::var("ADVENTURE_SEED") {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("ADVENTURE_SEED must be an integer, got {:?}", value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => {
            warn!("Ignoring ADVENTURE_SEED: {}", e);
            Ok(None)
        }
    }
}

fn log_events(events: &TickEvents, world: &World, tick: Tick) {
    if events.jumped {
        debug!("[{}] Jump ({:?})", tick, world.player().jump_state());
    }
    if events.bumped_head {
        debug!("[{}] Bumped head", tick);
    }
    if events.landed {
        debug!("[{}] Landed", tick);
    }
    if events.respawned {
        debug!("[{}] Respawned at spawn", tick);
    }
    for event in &events.quiz {
        match event {
            QuizEvent::Answered(outcome) => info!("[{}] {}", tick, outcome.message()),
            QuizEvent::Opened => info!("[{}] Talking to {}", tick, world.npc().name()),
            QuizEvent::Closed => debug!("[{}] Quiz closed", tick),
        }
    }
}
