//! Jet, rocks and bullets
//!
//! Each entity wraps a physics [`Body`] and adds the little state the scene
//! needs on top of it. Rocks and bullets are never removed mid-frame: a hit
//! marks them destroyed, which takes them out of overlap checks and rendering,
//! and the scene sweeps them at the end of the frame.

use crate::collision::Collidable;
use crate::config::{BulletConfig, JetConfig};
use crate::physics::{Body, WorldBounds};
use sdl2::rect::Rect;

/// How far past the canvas edge a rock or bullet may travel before it is culled
pub const CULL_MARGIN: f32 = 200.0;

/// Frame sizes of the sprite images, in pixels.
///
/// The renderer fills this in from the loaded textures so hitboxes match the
/// art. The defaults match the shipped assets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteMetrics {
    pub jet: (u32, u32),
    pub rock: (u32, u32),
    pub bullet: (u32, u32),
}

impl Default for SpriteMetrics {
    fn default() -> Self {
        SpriteMetrics {
            jet: (182, 100),
            rock: (64, 64),
            bullet: (16, 32),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Jet {
    pub body: Body,
    pub active: bool,
    pub visible: bool,
}

impl Jet {
    pub fn new(config: &JetConfig, frame: (u32, u32)) -> Self {
        let mut body = Body::new(config.x, config.y, frame.0, frame.1);
        body.collide_world_bounds = true;
        body.allow_gravity = false;
        body.set_hitbox(config.hitbox);

        Jet {
            body,
            active: true,
            visible: true,
        }
    }

    /// Takes the jet out of play: hidden, inactive, no horizontal motion.
    pub fn disable(&mut self) {
        self.active = false;
        self.visible = false;
        self.body.velocity_x = 0.0;
    }

    pub fn muzzle(&self, offset: f32) -> (f32, f32) {
        (self.body.x, self.body.y - offset)
    }
}

impl Collidable for Jet {
    fn get_bounds(&self) -> Rect {
        self.body.get_bounds()
    }
}

/// Launch parameters for one rock, rolled when the spawn fires
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RockLaunch {
    pub x: f32,
    pub y: f32,
    pub fall_speed: f32,
    pub drift_x: f32,
    pub spin: f32,
    pub hp: i32,
}

#[derive(Debug, Clone)]
pub struct Rock {
    pub body: Body,
    pub hp: i32,
    destroyed: bool,
}

impl Rock {
    pub fn spawn(launch: RockLaunch, frame: (u32, u32)) -> Self {
        let mut body = Body::new(launch.x, launch.y, frame.0, frame.1);
        body.set_velocity(launch.drift_x, launch.fall_speed);
        body.angular_velocity = launch.spin;

        Rock {
            body,
            hp: launch.hp,
            destroyed: false,
        }
    }

    /// Takes one point of damage. Returns true if this hit destroyed the rock.
    pub fn hit(&mut self) -> bool {
        if self.destroyed {
            return false;
        }
        self.hp -= 1;
        if self.hp <= 0 {
            self.destroyed = true;
        }
        self.destroyed
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn is_offscreen(&self, world: &WorldBounds) -> bool {
        let body = self.body.body_box();
        body.top > world.height + CULL_MARGIN
            || body.right() < -CULL_MARGIN
            || body.left > world.width + CULL_MARGIN
    }
}

impl Collidable for Rock {
    fn get_bounds(&self) -> Rect {
        self.body.get_bounds()
    }

    fn is_collidable(&self) -> bool {
        !self.destroyed
    }
}

#[derive(Debug, Clone)]
pub struct Bullet {
    pub body: Body,
    destroyed: bool,
}

impl Bullet {
    pub fn fire(x: f32, y: f32, config: &BulletConfig, frame: (u32, u32)) -> Self {
        let mut body = Body::new(x, y, frame.0, frame.1);
        body.velocity_y = -config.speed;
        body.scale = config.scale;
        body.allow_gravity = false;

        Bullet {
            body,
            destroyed: false,
        }
    }

    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn is_offscreen(&self) -> bool {
        self.body.body_box().bottom() < -CULL_MARGIN
    }
}

impl Collidable for Bullet {
    fn get_bounds(&self) -> Rect {
        self.body.get_bounds()
    }

    fn is_collidable(&self) -> bool {
        !self.destroyed
    }
}
