use std::time::Instant;

use bites_model::{Game, GameConfig, GameEvent, Input, Map};
use ggez::{
    audio,
    conf::{WindowMode, WindowSetup},
    event::{self, EventHandler},
    input::keyboard::{self, KeyCode, KeyMods},
    timer, Context, GameResult,
};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod assets;
use assets::Assets;

mod error;
use error::AppError;

mod view;
use view::View;

const TICKS_PER_SECOND: u32 = 60;
const CONFIG_FILE: &str = "config.json";

struct App {
    game: Game,
    view: View,
    // Dropping the source stops the music.
    _music: audio::Source,
}

impl App {
    fn setup(&mut self, ctx: &mut Context) -> GameResult {
        self.view.setup(ctx)
    }
}

fn held_keys(ctx: &Context) -> Input {
    let held = |keys: &[KeyCode]| keys.iter().any(|key| keyboard::is_key_pressed(ctx, *key));

    Input {
        up: held(&[KeyCode::Up, KeyCode::W]),
        down: held(&[KeyCode::Down, KeyCode::S]),
        left: held(&[KeyCode::Left, KeyCode::A]),
        right: held(&[KeyCode::Right, KeyCode::D]),
        restart: held(&[KeyCode::R]),
    }
}

fn log_event(event: GameEvent) {
    match event {
        GameEvent::BiteEaten {
            bite,
            first_time,
            points,
        } => debug!("{:?} eaten (new: {}) for {} points", bite, first_time, points),
        GameEvent::EnemySpawned { position, enemies } => {
            debug!("Enemy {} joined at {:?}", enemies, position)
        }
        GameEvent::Won { score } => info!("Won with a score of {}", score),
        GameEvent::Lost { score } => info!("Lost with a score of {}", score),
        GameEvent::Reset => info!("Restarted"),
    }
}

impl EventHandler for App {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while timer::check_update_time(ctx, TICKS_PER_SECOND) {
            let input = held_keys(ctx);
            self.game.update(&input, Instant::now(), log_event);
        }

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        self.view.draw(ctx, &mut self.game)
    }

    fn key_down_event(
        &mut self,
        ctx: &mut Context,
        keycode: KeyCode,
        _keymods: KeyMods,
        _repeat: bool,
    ) {
        if keycode == KeyCode::Escape {
            event::quit(ctx);
        }
    }
}

fn load_config(dir: &std::path::Path) -> Result<GameConfig, AppError> {
    match assets::read_text(dir, CONFIG_FILE)? {
        Some(json) => {
            info!("Using {}", CONFIG_FILE);
            Ok(GameConfig::from_json(&json)?)
        }
        None => Ok(GameConfig::default()),
    }
}

fn load_map(dir: &std::path::Path, config: &GameConfig) -> Result<Map, AppError> {
    match &config.map {
        Some(name) => {
            let text = assets::require_text(dir, &format!("maps/{}.txt", name))?;
            info!("Using map {}", name);
            Ok(Map::parse(&text, config.tile_size)?)
        }
        None => Ok(Map::reference(config.tile_size)),
    }
}

fn run() -> Result<(), AppError> {
    let resources = assets::resource_dir();
    let config = load_config(&resources)?;
    let map = load_map(&resources, &config)?;

    let (mut ctx, mut event_loop) = ggez::ContextBuilder::new("8bites", "louisdewardt")
        .window_setup(WindowSetup::default().title("8bites"))
        .window_mode(
            WindowMode::default().dimensions(map.pixel_width() as f32, map.pixel_height() as f32),
        )
        .add_resource_path(resources)
        .build()?;

    let assets = Assets::load(&mut ctx)?;
    let music = Assets::start_music(&mut ctx)?;
    let game = Game::new(config, map, Instant::now())?;

    let mut app = App {
        game,
        view: View::new(assets),
        _music: music,
    };
    app.setup(&mut ctx)?;

    info!("Starting");
    event::run(&mut ctx, &mut event_loop, &mut app)?;

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
