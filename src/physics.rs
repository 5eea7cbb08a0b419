//! Arcade-style physics bodies
//!
//! Bodies are axis-aligned boxes with linear and angular velocity. Rotation is
//! visual only and never changes the hitbox. Integration is semi-implicit
//! Euler: gravity updates the velocity first, then the velocity moves the body.
//!
//! Positions are sprite centres. The hitbox defaults to the full sprite frame
//! (times the sprite scale) and can be narrowed with [`Body::set_hitbox`].

use crate::collision::Collidable;
use crate::config::HitboxConfig;
use sdl2::rect::Rect;

/// Axis-aligned region bodies may be clamped to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: u32, height: u32) -> Self {
        WorldBounds {
            width: width as f32,
            height: height as f32,
        }
    }
}

/// Hitbox corners in world space, before rounding to pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl BodyBox {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    /// Degrees, clockwise
    pub angle: f32,
    /// Degrees per second
    pub angular_velocity: f32,
    pub allow_gravity: bool,
    pub collide_world_bounds: bool,
    pub scale: f32,
    frame_width: f32,
    frame_height: f32,
    hitbox: Option<HitboxConfig>,
}

impl Body {
    /// Creates a body for a sprite frame of the given size, centred at (x, y).
    ///
    /// Gravity is on by default, world-bound collision is off.
    pub fn new(x: f32, y: f32, frame_width: u32, frame_height: u32) -> Self {
        Body {
            x,
            y,
            velocity_x: 0.0,
            velocity_y: 0.0,
            angle: 0.0,
            angular_velocity: 0.0,
            allow_gravity: true,
            collide_world_bounds: false,
            scale: 1.0,
            frame_width: frame_width as f32,
            frame_height: frame_height as f32,
            hitbox: None,
        }
    }

    /// Narrows the hitbox. Size and offset are in unscaled frame pixels.
    pub fn set_hitbox(&mut self, hitbox: HitboxConfig) {
        self.hitbox = Some(hitbox);
    }

    pub fn set_velocity(&mut self, velocity_x: f32, velocity_y: f32) {
        self.velocity_x = velocity_x;
        self.velocity_y = velocity_y;
    }

    /// Stops all motion and switches gravity off so the body stays put.
    pub fn freeze(&mut self) {
        self.velocity_x = 0.0;
        self.velocity_y = 0.0;
        self.angular_velocity = 0.0;
        self.allow_gravity = false;
    }

    /// Displayed size of the sprite (frame size times scale)
    pub fn display_size(&self) -> (f32, f32) {
        (self.frame_width * self.scale, self.frame_height * self.scale)
    }

    pub fn body_box(&self) -> BodyBox {
        let (display_width, display_height) = self.display_size();
        let frame_left = self.x - display_width / 2.0;
        let frame_top = self.y - display_height / 2.0;

        match self.hitbox {
            Some(hitbox) => BodyBox {
                left: frame_left + hitbox.offset_x * self.scale,
                top: frame_top + hitbox.offset_y * self.scale,
                width: hitbox.width * self.scale,
                height: hitbox.height * self.scale,
            },
            None => BodyBox {
                left: frame_left,
                top: frame_top,
                width: display_width,
                height: display_height,
            },
        }
    }

    pub fn integrate(&mut self, dt: f32, gravity_y: f32) {
        if self.allow_gravity {
            self.velocity_y += gravity_y * dt;
        }
        self.x += self.velocity_x * dt;
        self.y += self.velocity_y * dt;
        self.angle = (self.angle + self.angular_velocity * dt) % 360.0;
    }

    /// Pushes the hitbox back inside `world`. Bounce is zero, so the velocity
    /// component on a blocked axis is cleared.
    pub fn clamp_to_world(&mut self, world: &WorldBounds) {
        let body = self.body_box();

        if body.left < 0.0 {
            self.x -= body.left;
            self.velocity_x = 0.0;
        } else if body.right() > world.width {
            self.x -= body.right() - world.width;
            self.velocity_x = 0.0;
        }

        if body.top < 0.0 {
            self.y -= body.top;
            self.velocity_y = 0.0;
        } else if body.bottom() > world.height {
            self.y -= body.bottom() - world.height;
            self.velocity_y = 0.0;
        }
    }

    /// Advances one physics step: integrate, then clamp if the body collides
    /// with the world bounds.
    pub fn step(&mut self, dt: f32, gravity_y: f32, world: &WorldBounds) {
        self.integrate(dt, gravity_y);
        if self.collide_world_bounds {
            self.clamp_to_world(world);
        }
    }
}

impl Collidable for Body {
    fn get_bounds(&self) -> Rect {
        let body = self.body_box();
        Rect::new(
            body.left.round() as i32,
            body.top.round() as i32,
            body.width.round().max(1.0) as u32,
            body.height.round().max(1.0) as u32,
        )
    }
}
