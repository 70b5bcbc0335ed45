use crate::models::super_hero::SuperHero;

pub const SUPER_HERO_PHOTO: &str = "https://i.annihil.us/u/prod/marvel/i/mg/c/60/55b6a28ef24fa.jpg";

#[derive(Default, Clone)]
pub struct SuperHeroFactoryOptions<'a> {
    pub name: Option<&'a str>,
    pub photo: Option<&'a str>,
    pub is_avenger: Option<bool>,
    pub description: Option<&'a str>,
}

pub fn super_hero_factory(options: SuperHeroFactoryOptions) -> SuperHero {
    let name = options.name.unwrap_or("SuperHero - 0");
    let description = options
        .description
        .map(str::to_string)
        .unwrap_or_else(|| format!("Description {name}"));

    SuperHero::new(
        name,
        options.photo.unwrap_or(SUPER_HERO_PHOTO),
        options.is_avenger.unwrap_or(false),
        description,
    )
}

/// Builds `count` heroes named "SuperHero - 0".."SuperHero - {count-1}".
pub fn super_heroes_factory(count: usize, avengers: bool) -> Vec<SuperHero> {
    (0..count)
        .map(|i| {
            let name = format!("SuperHero - {i}");
            let description = format!("Description Super Hero - {i}");
            super_hero_factory(SuperHeroFactoryOptions {
                name: Some(name.as_str()),
                is_avenger: Some(avengers),
                description: Some(description.as_str()),
                ..Default::default()
            })
        })
        .collect()
}
