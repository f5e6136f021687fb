//! Message and glyph colors

use crate::core::types::Rgb;

pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);
pub const BLACK: Rgb = Rgb(0x0, 0x0, 0x0);

pub const PLAYER_ATK: Rgb = Rgb(0xE0, 0xE0, 0xE0);
pub const ENEMY_ATK: Rgb = Rgb(0xFF, 0xC0, 0xC0);
pub const DEATH: Rgb = Rgb(191, 0, 0);

pub const STATUS_EFFECT_APPLIED: Rgb = Rgb(0x3F, 0xFF, 0x3F);
pub const HEALTH_RECOVERED: Rgb = Rgb(0x0, 0xFF, 0x0);
pub const IMPOSSIBLE: Rgb = Rgb(0x80, 0x80, 0x80);
pub const NEEDS_WARNING: Rgb = Rgb(0xFF, 0xA0, 0x30);

// Entity glyph colors
pub const PLAYER: Rgb = WHITE;
pub const HUMAN: Rgb = Rgb(0x33, 0x99, 0xE6);
pub const ORC: Rgb = Rgb(63, 127, 63);
pub const TROLL: Rgb = Rgb(0, 127, 0);
pub const HEALTH_POTION: Rgb = Rgb(127, 0, 255);
pub const CONFUSION_SCROLL: Rgb = Rgb(207, 63, 255);
pub const FIREBALL_SCROLL: Rgb = Rgb(255, 0, 0);
pub const LIGHTNING_SCROLL: Rgb = Rgb(255, 255, 0);
pub const APPLE: Rgb = Rgb(220, 30, 30);
pub const TREE: Rgb = Rgb(30, 140, 30);
