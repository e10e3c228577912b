//! Render adapter seam.
//!
//! The engine never draws. A host implements [`Canvas`] for its graphics
//! backend and hands the world a [`SpriteSheet`] holding one sprite per
//! kind; [`World::render`](crate::World::render) then paints every agent
//! with the sprite for its current kind. Sprites are owned by the caller
//! and live as long as the run, not in process-wide state.

use triad_core::{Kind, Position};

/// A drawing surface supplied by the host.
pub trait Canvas {
    /// Backend-specific sprite handle (texture, image, glyph, ...).
    type Sprite;

    /// Clear the surface before a frame is painted.
    fn clear(&mut self);

    /// Draw `sprite` with its top-left corner at `position`, scaled to a
    /// `size × size` square.
    fn blit(&mut self, sprite: &Self::Sprite, position: Position, size: f64);
}

/// One sprite per [`Kind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteSheet<S> {
    sprites: [S; 3],
}

impl<S> SpriteSheet<S> {
    /// Build a sheet from the sprite for each kind.
    pub fn new(rock: S, paper: S, scissors: S) -> Self {
        Self {
            sprites: [rock, paper, scissors],
        }
    }

    /// Sprite for `kind`.
    pub fn get(&self, kind: Kind) -> &S {
        &self.sprites[kind.index()]
    }

    /// Transform every sprite, e.g. to load or scale images once per run.
    pub fn map<T, F: FnMut(Kind, S) -> T>(self, mut f: F) -> SpriteSheet<T> {
        let [rock, paper, scissors] = self.sprites;
        SpriteSheet::new(
            f(Kind::Rock, rock),
            f(Kind::Paper, paper),
            f(Kind::Scissors, scissors),
        )
    }
}

impl<S: Clone> SpriteSheet<S> {
    /// Use the same sprite for every kind.
    pub fn uniform(sprite: S) -> Self {
        Self::new(sprite.clone(), sprite.clone(), sprite)
    }
}
