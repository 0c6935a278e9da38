use std::time::{Duration, Instant};

use bites_model::{
    Entity, Game, GameConfig, GameEvent, GameStatus, Input, Map, Outcome, Sprite, SpriteId, Tile,
};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

fn new_game(seed: u64) -> (Game, Instant) {
    let now = Instant::now();
    let game = Game::with_rng(
        GameConfig::default(),
        Map::reference(32),
        StdRng::seed_from_u64(seed),
        now,
    )
    .unwrap();
    (game, now)
}

/// Puts the player in the top left corner, the bite in the top right and every enemy, standing
/// still, in the bottom right.
fn separate(game: &mut Game) {
    let data = game.data_mut();
    data.player.sprite_mut().x = 32;
    data.player.sprite_mut().y = 32;
    data.bite.x = 18 * 32;
    data.bite.y = 32;
    for enemy in data.enemies.iter_mut() {
        let sprite = enemy.sprite_mut();
        sprite.x = 18 * 32;
        sprite.y = 13 * 32;
        sprite.set_velocity((0, 0));
    }
}

fn eat(game: &mut Game, bite: SpriteId, now: Instant) -> Vec<GameEvent> {
    separate(game);
    let data = game.data_mut();
    data.bite = Sprite::new(bite, 32, 32).at(data.player.position());

    let mut events = Vec::new();
    game.update(&Input::default(), now, |e| events.push(e));
    events
}

fn tick(game: &mut Game, now: Instant) -> Vec<GameEvent> {
    let mut events = Vec::new();
    game.update(&Input::default(), now, |e| events.push(e));
    events
}

#[test]
fn eating_every_kind_wins_in_any_order() {
    for seed in 0..5 {
        let (mut game, now) = new_game(seed);
        let mut order = SpriteId::BITES.to_vec();
        order.shuffle(&mut StdRng::seed_from_u64(seed + 100));

        for (i, bite) in order.iter().enumerate() {
            assert_eq!(game.status(), GameStatus::Playing, "ended after {} bites", i);
            eat(&mut game, *bite, now);
            assert_eq!(game.eaten().len(), i + 1);
        }
        assert_eq!(game.eaten(), order.as_slice());

        // The win is noticed at the start of the next tick.
        separate(&mut game);
        let events = tick(&mut game, now);
        assert_eq!(game.status(), GameStatus::Ended(Outcome::Win));
        assert_eq!(game.title().text(), "YOU WIN!");
        assert_eq!(
            events,
            vec![GameEvent::Won {
                score: game.player().points()
            }]
        );
    }
}

#[test]
fn repeats_never_count_towards_the_win() {
    let (mut game, now) = new_game(9);

    for bite in &SpriteId::BITES[..7] {
        eat(&mut game, *bite, now);
        eat(&mut game, *bite, now);
    }

    separate(&mut game);
    tick(&mut game, now);
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.eaten().len(), 7);
    assert_eq!(game.enemies().len(), 8);
}

#[test]
fn score_follows_enemy_count() {
    let (mut game, now) = new_game(10);

    eat(&mut game, SpriteId::Cheese, now);
    assert_eq!(game.player().points(), 600);

    let before = game.enemies().len() as u32;
    eat(&mut game, SpriteId::Cheese, now);
    assert_eq!(game.enemies().len() as u32, before + 1);
    assert_eq!(game.player().points(), 600 + 100 * before);

    let enemies = game.enemies().len() as u32;
    eat(&mut game, SpriteId::Pizza, now);
    assert_eq!(
        game.player().points(),
        600 + 100 * before + 500 + 100 * enemies
    );
}

#[test]
fn losing_happens_on_first_contact() {
    let (mut game, now) = new_game(11);
    separate(&mut game);

    // Enemy two tiles right of the player walking towards it one pixel a tick.
    {
        let enemy = game.data_mut().enemies[0].sprite_mut();
        enemy.x = 96;
        enemy.y = 32;
    }

    let mut ticks = 0;
    while game.status() == GameStatus::Playing {
        {
            let enemy = game.data_mut().enemies[0].sprite_mut();
            enemy.set_velocity((-1, 0));
            // keep the enemy between tiles so it never changes its mind
            if enemy.x % 32 == 0 {
                enemy.x -= 1;
            }
        }
        let contact = game.player().collides_with(game.enemies()[0].sprite());
        let events = tick(&mut game, now + Duration::from_millis(ticks));

        if contact {
            assert_eq!(events, vec![GameEvent::Lost { score: 0 }]);
        } else {
            assert!(events.is_empty());
        }
        ticks += 1;
        assert!(ticks < 100);
    }

    assert_eq!(game.status(), GameStatus::Ended(Outcome::Lose));
    assert_eq!(game.title().text(), "GAME OVER!");
}

#[test]
fn restart_gives_a_fresh_game() {
    let (mut game, now) = new_game(12);
    eat(&mut game, SpriteId::Banana, now);
    eat(&mut game, SpriteId::Banana, now);
    game.data_mut().status = GameStatus::Ended(Outcome::Lose);

    let later = now + Duration::from_secs(30);
    let restart = Input {
        restart: true,
        ..Input::default()
    };
    let mut events = Vec::new();
    game.update(&restart, later, |e| events.push(e));

    assert_eq!(events, vec![GameEvent::Reset]);
    assert_eq!(game.status(), GameStatus::Playing);
    assert!(game.eaten().is_empty());
    assert_eq!(game.enemies().len(), 1);
    assert_eq!(game.player().points(), 0);
    assert!(game.title().is_visible());
    assert_eq!(game.title().text(), "8 BITES TO WIN!");

    let pristine = Map::reference(32);
    for x in 0..pristine.width() {
        for y in 0..pristine.height() {
            assert_eq!(game.map().tile_at(x, y), pristine.tile_at(x, y));
        }
    }

    let (x, y) = game.player().position();
    assert_eq!(game.map().tile_at(x / 32, y / 32), Tile::Floor);
}

#[test]
fn walls_stop_the_player() {
    let (mut game, now) = new_game(13);
    separate(&mut game);

    // Tile (0, 1) is a wall so heading left from (32, 32) goes nowhere.
    let left = Input {
        left: true,
        ..Input::default()
    };
    for i in 0..10 {
        game.update(&left, now + Duration::from_millis(i), |_| {});
        assert_eq!(game.player().position(), (32, 32));
    }
    assert_eq!(game.player().sprite().velocity(), (-2, 0));
}

#[test]
fn the_player_runs_down_a_corridor() {
    let (mut game, now) = new_game(14);
    separate(&mut game);

    let right = Input {
        right: true,
        ..Input::default()
    };
    for i in 0..16 {
        game.update(&right, now + Duration::from_millis(i), |_| {});
    }

    let (x, y) = game.player().position();
    assert_eq!((x, y), (64, 32));
}
