pub mod super_hero;
