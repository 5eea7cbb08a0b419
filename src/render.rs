/// Scene rendering
///
/// Draw order follows creation order in the scene: scrolling background,
/// jet, rocks, bullets, then HUD text on top. The optional hitbox overlay is
/// drawn after the sprites so it is never hidden.
use crate::assets::Textures;
use crate::entities::{Bullet, Jet, Rock};
use crate::hud::{Label, TEXT_COLOR};
use crate::physics::Body;
use crate::scene::ShooterScene;
use crate::text::draw_label;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const BACKDROP: Color = Color::RGB(0, 0, 0);
const HITBOX_COLOR: Color = Color::RGB(0xFF, 0x00, 0xFF);
const PAUSE_DIM: Color = Color::RGBA(0, 0, 0, 128);

/// Something in the scene that draws a texture at its body
pub enum Renderable<'a> {
    Jet(&'a Jet),
    Rock(&'a Rock),
    Bullet(&'a Bullet),
}

impl<'a> Renderable<'a> {
    fn body(&self) -> &Body {
        match self {
            Renderable::Jet(jet) => &jet.body,
            Renderable::Rock(rock) => &rock.body,
            Renderable::Bullet(bullet) => &bullet.body,
        }
    }

    fn render(&self, canvas: &mut Canvas<Window>, textures: &Textures) -> Result<(), String> {
        let body = self.body();
        let dest = sprite_dest(body);
        match self {
            Renderable::Jet(_) => canvas.copy(&textures.jet, None, dest),
            // Rotation is visual only
            Renderable::Rock(_) => canvas.copy_ex(
                &textures.rock,
                None,
                dest,
                body.angle as f64,
                None,
                false,
                false,
            ),
            Renderable::Bullet(_) => canvas.copy(&textures.bullet, None, dest),
        }
    }
}

/// Screen rectangle of a sprite's full displayed frame, centred on its body
pub fn sprite_dest(body: &Body) -> Rect {
    let (width, height) = body.display_size();
    Rect::new(
        (body.x - width / 2.0).round() as i32,
        (body.y - height / 2.0).round() as i32,
        (width.round() as u32).max(1),
        (height.round() as u32).max(1),
    )
}

/// Top-left corners of the background tiles needed to cover the view.
///
/// `offset` is the tile scroll position; decreasing it moves the pattern down.
pub fn tile_origins(offset: f32, tile: (u32, u32), view: (u32, u32)) -> Vec<(i32, i32)> {
    let (tile_w, tile_h) = (tile.0.max(1) as i32, tile.1.max(1) as i32);
    let (view_w, view_h) = (view.0 as i32, view.1 as i32);
    let shift = (-offset.round() as i32).rem_euclid(tile_h);

    let mut origins = Vec::new();
    let mut y = shift - tile_h;
    while y < view_h {
        let mut x = 0;
        while x < view_w {
            origins.push((x, y));
            x += tile_w;
        }
        y += tile_h;
    }
    origins
}

fn render_background(
    canvas: &mut Canvas<Window>,
    textures: &Textures,
    offset: f32,
) -> Result<(), String> {
    let query = textures.background.query();
    let view = canvas.logical_size();
    for (x, y) in tile_origins(offset, (query.width, query.height), view) {
        canvas.copy(
            &textures.background,
            None,
            Rect::new(x, y, query.width, query.height),
        )?;
    }
    Ok(())
}

fn render_hitboxes(canvas: &mut Canvas<Window>, renderables: &[Renderable]) -> Result<(), String> {
    canvas.set_draw_color(HITBOX_COLOR);
    for renderable in renderables {
        let hitbox = renderable.body().body_box();
        canvas.draw_rect(Rect::new(
            hitbox.left.round() as i32,
            hitbox.top.round() as i32,
            (hitbox.width.round() as u32).max(1),
            (hitbox.height.round() as u32).max(1),
        ))?;
    }
    Ok(())
}

fn render_pause_overlay(canvas: &mut Canvas<Window>) -> Result<(), String> {
    let (width, height) = canvas.logical_size();
    canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
    canvas.set_draw_color(PAUSE_DIM);
    canvas.fill_rect(Rect::new(0, 0, width, height))?;
    canvas.set_blend_mode(sdl2::render::BlendMode::None);

    let mut label = Label::new("PAUSED", width as i32 / 2, height as i32 / 2, 48);
    label.color = TEXT_COLOR;
    label.centered = true;
    draw_label(canvas, &label)
}

/// Draws one frame of the scene. The caller presents the canvas.
pub fn render_scene(
    canvas: &mut Canvas<Window>,
    textures: &Textures,
    scene: &ShooterScene,
    show_hitboxes: bool,
) -> Result<(), String> {
    canvas.set_draw_color(BACKDROP);
    canvas.clear();

    render_background(canvas, textures, scene.background_offset())?;

    let mut renderables = Vec::with_capacity(1 + scene.rocks().len() + scene.bullets().len());
    if scene.jet().visible {
        renderables.push(Renderable::Jet(scene.jet()));
    }
    renderables.extend(scene.rocks().iter().map(Renderable::Rock));
    renderables.extend(scene.bullets().iter().map(Renderable::Bullet));

    for renderable in &renderables {
        renderable.render(canvas, textures)?;
    }

    if show_hitboxes {
        render_hitboxes(canvas, &renderables)?;
    }

    draw_label(canvas, scene.timer_label())?;
    if scene.status().is_visible() {
        draw_label(canvas, &scene.status().label)?;
    }

    if scene.is_paused() {
        render_pause_overlay(canvas)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_dest_is_centred_and_scaled() {
        let mut body = Body::new(100.0, 200.0, 16, 32);
        assert_eq!(sprite_dest(&body), Rect::new(92, 184, 16, 32));

        body.scale = 0.5;
        assert_eq!(sprite_dest(&body), Rect::new(96, 192, 8, 16));
    }

    #[test]
    fn test_tiles_cover_view_without_scroll() {
        let origins = tile_origins(0.0, (300, 400), (500, 888));
        // Rows at -400, 0, 400, 800 with two columns each
        assert_eq!(origins.len(), 8);
        assert_eq!(origins[0], (0, -400));
        assert_eq!(origins[1], (300, -400));
        assert_eq!(*origins.last().unwrap(), (300, 800));
    }

    #[test]
    fn test_negative_offset_scrolls_down() {
        let origins = tile_origins(-10.0, (500, 400), (500, 888));
        assert_eq!(origins[0], (0, -390));
        assert_eq!(origins[1], (0, 10));
    }

    #[test]
    fn test_offset_wraps_at_tile_height() {
        assert_eq!(
            tile_origins(-400.0, (500, 400), (500, 888)),
            tile_origins(0.0, (500, 400), (500, 888))
        );
    }
}
