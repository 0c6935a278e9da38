use ggez::{
    graphics::{self, spritebatch::SpriteBatch, DrawParam, Scale, Text, TextFragment},
    Context, GameResult,
};

use bites_model::{Entity, Game, Sprite, Tile, Title};

use crate::assets::{frame_rect, Assets};

const SCORE_SIZE: f32 = 16.0;
const TITLE_SIZE: f32 = 24.0;
const TITLE_PADDING: f32 = 10.0;

pub struct View {
    assets: Assets,
    floor_batch: SpriteBatch,
    wall_batch: SpriteBatch,
}

impl View {
    pub fn new(assets: Assets) -> View {
        View {
            floor_batch: SpriteBatch::new(assets.floor.clone()),
            wall_batch: SpriteBatch::new(assets.wall.clone()),
            assets,
        }
    }

    pub fn setup(&mut self, ctx: &mut Context) -> GameResult {
        graphics::set_default_filter(ctx, graphics::FilterMode::Nearest);
        graphics::set_window_title(ctx, "8bites");

        Ok(())
    }

    fn text(&self, text: String, size: f32) -> Text {
        Text::new(
            TextFragment::new(text)
                .font(self.assets.font)
                .scale(Scale::uniform(size)),
        )
    }

    fn draw_map(&mut self, ctx: &mut Context, game: &Game) -> GameResult {
        let map = game.map();
        let tile_size = map.tile_size() as f32;

        for (x, y, tile) in map.tiles().cells() {
            let param = DrawParam::new().dest([x as f32 * tile_size, y as f32 * tile_size]);
            match tile {
                Tile::Floor => self.floor_batch.add(param),
                Tile::Wall => self.wall_batch.add(param),
            };
        }

        graphics::draw(ctx, &self.floor_batch, DrawParam::new())?;
        graphics::draw(ctx, &self.wall_batch, DrawParam::new())?;
        self.floor_batch.clear();
        self.wall_batch.clear();

        Ok(())
    }

    /// Draws one frame of the sprite's sheet at the given pixel position.
    fn draw_frame(
        &self,
        ctx: &mut Context,
        sprite: &Sprite,
        frame: (i32, i32),
        (x, y): (i32, i32),
    ) -> GameResult {
        let image = self.assets.sheet(sprite.id());
        let param = DrawParam::new()
            .src(frame_rect(image, frame, sprite.width(), sprite.height()))
            .dest([x as f32, y as f32]);

        graphics::draw(ctx, image, param)
    }

    fn draw_sprite(&self, ctx: &mut Context, sprite: &Sprite) -> GameResult {
        self.draw_frame(ctx, sprite, sprite.frame_origin(), sprite.position())
    }

    fn draw_score(&self, ctx: &mut Context, game: &mut Game) -> GameResult {
        let points = game.player_mut().displayed_points();
        let text = self.text(format!("Score: {:010}", points), SCORE_SIZE);
        let height = game.map().pixel_height() as f32;

        graphics::draw(
            ctx,
            &text,
            DrawParam::new()
                .dest([32.0, height - 24.0])
                .color(graphics::WHITE),
        )
    }

    /// The banner is centred on the whole text, then drawn word by word so unrevealed words leave
    /// a gap at the end rather than shifting everything.
    fn draw_title(&self, ctx: &mut Context, title: &Title, screen: (f32, f32)) -> GameResult {
        let full = self.text(title.text().to_string(), TITLE_SIZE);
        let (width, height) = full.dimensions(ctx);
        let (width, height) = (width as f32, height as f32);
        let x = screen.0 / 2.0 - width / 2.0;
        let y = screen.1 / 2.0 - height / 2.0;

        let background = graphics::Mesh::new_rectangle(
            ctx,
            graphics::DrawMode::fill(),
            graphics::Rect::new(
                x - TITLE_PADDING,
                y - TITLE_PADDING,
                width + TITLE_PADDING * 2.0,
                height + TITLE_PADDING * 2.0,
            ),
            graphics::Color::new(0.86, 0.86, 0.88, 0.6),
        )?;
        graphics::draw(ctx, &background, DrawParam::new())?;

        let (shake_x, shake_y) = title.shake();
        let mut cursor = x + shake_x as f32;
        for word in title.visible_words() {
            let text = self.text(format!("{} ", word), TITLE_SIZE);
            graphics::draw(
                ctx,
                &text,
                DrawParam::new()
                    .dest([cursor, y + shake_y as f32])
                    .color(graphics::BLACK),
            )?;
            cursor += text.width(ctx) as f32;
        }

        Ok(())
    }

    pub fn draw(&mut self, ctx: &mut Context, game: &mut Game) -> GameResult {
        graphics::clear(ctx, graphics::BLACK);

        self.draw_map(ctx, game)?;
        self.draw_sprite(ctx, game.bite())?;
        self.draw_sprite(ctx, game.player().sprite())?;
        for enemy in game.enemies() {
            self.draw_sprite(ctx, enemy.sprite())?;
        }

        let tile_size = game.map().tile_size();
        for (i, id) in game.eaten().iter().enumerate() {
            let icon = Sprite::new(*id, tile_size, tile_size);
            self.draw_frame(ctx, &icon, icon.first_frame_origin(), (i as i32 * tile_size, 0))?;
        }

        self.draw_score(ctx, game)?;

        if game.title().is_visible() {
            let screen = (
                game.map().pixel_width() as f32,
                game.map().pixel_height() as f32,
            );
            self.draw_title(ctx, game.title(), screen)?;
        }

        graphics::present(ctx)
    }
}
