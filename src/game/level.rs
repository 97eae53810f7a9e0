// Level layout and the static terrain built from it

use glam::Vec2;
use log::info;

use super::entity::{Positioned, Renderable, SpriteFrame, TickContext, Updatable};
use crate::core::Aabb;
use crate::engine::physics::{PhysicsError, StaticCollider, StaticColliderSet, TerrainKind};

/// Side length of a terrain block in pixels
pub const TILE_SIZE: f32 = 32.0;

/// How far below the level a body may fall before it is respawned
const KILL_MARGIN: f32 = 200.0;

/// Errors raised while building a level
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("Tile size must be positive and finite, got {0}")]
    InvalidTileSize(f32),

    #[error("Level dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },

    #[error("Invalid terrain: {0}")]
    Physics(#[from] PhysicsError),
}

/// One square block of terrain, by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub x: f32,
    pub y: f32,
    pub kind: TerrainKind,
}

impl Tile {
    pub fn new(x: f32, y: f32, kind: TerrainKind) -> Self {
        Self { x, y, kind }
    }
}

/// Raw level description, validated by [`Level::build`]
#[derive(Debug, Clone, PartialEq)]
pub struct LevelData {
    pub tile_size: f32,
    /// Tiles in collider iteration order
    pub tiles: Vec<Tile>,
    /// Bottom-center of the player at spawn
    pub player_spawn: Vec2,
    /// Bottom-center of the quiz NPC
    pub npc_spawn: Vec2,
    pub width: f32,
    pub height: f32,
}

impl LevelData {
    /// Ground row at y = 700 with three small platforms above it
    pub fn default_level(width: f32, height: f32) -> Self {
        let ground_y = height - 100.0;
        let ground_blocks = (width / TILE_SIZE) as usize + 1;

        let mut tiles: Vec<Tile> = (0..ground_blocks)
            .map(|i| Tile::new(i as f32 * TILE_SIZE, ground_y, TerrainKind::Ground))
            .collect();

        let platforms = [
            (width / 4.0, height - 200.0),
            (width / 2.0, height - 300.0),
            (width * 3.0 / 4.0, height - 200.0),
        ];
        for (x, y) in platforms {
            tiles.extend(
                (0..3).map(|i| Tile::new(x + i as f32 * TILE_SIZE, y, TerrainKind::Platform)),
            );
        }

        // The NPC stands on the middle platform
        let (middle_x, middle_y) = platforms[1];
        Self {
            tile_size: TILE_SIZE,
            tiles,
            player_spawn: Vec2::new(width / 2.0, ground_y),
            npc_spawn: Vec2::new(middle_x + TILE_SIZE * 1.5, middle_y),
            width,
            height,
        }
    }
}

/// A terrain block as a drawable entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block(pub StaticCollider);

impl Positioned for Block {
    fn bounds(&self) -> Aabb {
        self.0.bounds
    }
}

/// Terrain never moves
impl Updatable for Block {
    type Output = ();

    fn update(&mut self, _ctx: &TickContext<'_>) {}
}

impl Renderable for Block {
    fn sprite(&self) -> SpriteFrame {
        SpriteFrame::still(self.0.bounds, self.0.kind.name())
    }
}

/// A built level: solid terrain plus spawn points
#[derive(Debug, Clone)]
pub struct Level {
    colliders: StaticColliderSet,
    player_spawn: Vec2,
    npc_spawn: Vec2,
    width: f32,
    height: f32,
    kill_plane_y: f32,
}

impl Level {
    pub fn build(data: &LevelData) -> Result<Self, LevelError> {
        if !(data.tile_size.is_finite() && data.tile_size > 0.0) {
            return Err(LevelError::InvalidTileSize(data.tile_size));
        }
        if !(data.width > 0.0 && data.height > 0.0) {
            return Err(LevelError::InvalidDimensions {
                width: data.width,
                height: data.height,
            });
        }

        let colliders = data
            .tiles
            .iter()
            .map(|tile| {
                StaticCollider::new(
                    Aabb::new(tile.x, tile.y, data.tile_size, data.tile_size),
                    tile.kind,
                )
            })
            .collect();
        let colliders = StaticColliderSet::new(colliders)?;

        let floor = colliders
            .lowest_bottom()
            .map_or(data.height, |bottom| bottom.max(data.height));
        info!(
            "Level built: {} blocks, {}x{}",
            colliders.len(),
            data.width,
            data.height
        );

        Ok(Self {
            colliders,
            player_spawn: data.player_spawn,
            npc_spawn: data.npc_spawn,
            width: data.width,
            height: data.height,
            kill_plane_y: floor + KILL_MARGIN,
        })
    }

    pub fn colliders(&self) -> &StaticColliderSet {
        &self.colliders
    }

    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        self.colliders.iter().copied().map(Block)
    }

    pub fn player_spawn(&self) -> Vec2 {
        self.player_spawn
    }

    pub fn npc_spawn(&self) -> Vec2 {
        self.npc_spawn
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Anything whose top passes below this line has fallen out of the level
    pub fn kill_plane_y(&self) -> f32 {
        self.kill_plane_y
    }

    pub fn is_out_of_bounds(&self, bounds: &Aabb) -> bool {
        bounds.top() > self.kill_plane_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn default_data() -> LevelData {
        LevelData::default_level(1200.0, 800.0)
    }

    #[test]
    fn test_default_layout() {
        let data = default_data();
        let ground = data
            .tiles
            .iter()
            .filter(|t| t.kind == TerrainKind::Ground)
            .count();
        let platforms = data
            .tiles
            .iter()
            .filter(|t| t.kind == TerrainKind::Platform)
            .count();
        assert_eq!(ground, 38);
        assert_eq!(platforms, 9);
        assert!(data
            .tiles
            .iter()
            .filter(|t| t.kind == TerrainKind::Ground)
            .all(|t| t.y == 700.0));
        assert_eq!(data.player_spawn, Vec2::new(600.0, 700.0));
        assert_eq!(data.npc_spawn, Vec2::new(648.0, 500.0));
    }

    #[test]
    fn test_build_default_level() {
        let level = Level::build(&default_data()).unwrap();
        assert_eq!(level.colliders().len(), 47);
        assert_eq!(level.blocks().count(), 47);
        assert_relative_eq!(level.kill_plane_y(), 1000.0);
        assert_eq!(level.size(), Vec2::new(1200.0, 800.0));
    }

    #[test]
    fn test_block_sprites_name_terrain() {
        let level = Level::build(&default_data()).unwrap();
        let first = level.blocks().next().unwrap();
        assert_eq!(first.sprite().animation, "ground");
        let last = level.blocks().last().unwrap();
        assert_eq!(last.sprite().animation, "platform");
        assert_relative_eq!(last.bounds().width, TILE_SIZE);
    }

    #[test]
    fn test_blocks_stay_put_on_update() {
        let level = Level::build(&default_data()).unwrap();
        let physics = crate::engine::physics::PhysicsConfig::default();
        let ctx = TickContext {
            tick: 10,
            dt: 1.0,
            colliders: level.colliders(),
            physics: &physics,
        };
        for mut block in level.blocks() {
            let before = block.bounds();
            block.update(&ctx);
            assert_eq!(block.bounds(), before);
        }
    }

    #[test]
    fn test_empty_level_is_valid() {
        let data = LevelData {
            tiles: Vec::new(),
            ..default_data()
        };
        let level = Level::build(&data).unwrap();
        assert_eq!(level.colliders().len(), 0);
        assert_relative_eq!(level.kill_plane_y(), 1000.0);
    }

    #[test]
    fn test_rejects_bad_tile_size() {
        for size in [0.0, -32.0, f32::NAN] {
            let data = LevelData {
                tile_size: size,
                ..default_data()
            };
            assert!(matches!(
                Level::build(&data),
                Err(LevelError::InvalidTileSize(_))
            ));
        }
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let data = LevelData {
            width: 0.0,
            ..default_data()
        };
        let err = Level::build(&data).unwrap_err();
        assert_eq!(err.to_string(), "Level dimensions must be positive, got 0x800");
    }

    #[test]
    fn test_rejects_non_finite_tile() {
        let mut data = default_data();
        data.tiles.push(Tile::new(f32::INFINITY, 0.0, TerrainKind::Platform));
        assert!(matches!(Level::build(&data), Err(LevelError::Physics(_))));
    }

    #[test]
    fn test_out_of_bounds() {
        let level = Level::build(&default_data()).unwrap();
        assert!(!level.is_out_of_bounds(&Aabb::new(0.0, 636.0, 64.0, 64.0)));
        assert!(level.is_out_of_bounds(&Aabb::new(0.0, 1001.0, 64.0, 64.0)));
    }
}
