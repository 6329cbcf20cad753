use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use log::info;
use moo2_core::{BodyType, CoreError, Game, Planet};
use moo2_render::{JsonStyle, SectionSelection, render_json_selected, render_text};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum BodyTypeArg {
    Asteroid,
    GasGiant,
    Planet,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(value_name = "SAVE.GAM")]
    path: PathBuf,
    #[arg(long)]
    players: bool,
    #[arg(long)]
    stars: bool,
    #[arg(long)]
    planets: bool,
    #[arg(long)]
    json: bool,
    /// Star to edit, by name.
    #[arg(long, value_name = "NAME")]
    star: Option<String>,
    /// Planet to edit, by planet number.
    #[arg(long, value_name = "N")]
    planet: Option<usize>,
    /// Create a planet at this orbit (0-4) of --star.
    #[arg(long = "make-planet", value_name = "ORBIT", requires = "star")]
    make_planet: Option<usize>,
    #[arg(
        long = "body-type",
        value_enum,
        default_value = "planet",
        requires = "make_planet"
    )]
    body_type: BodyTypeArg,
    #[arg(long = "set-x", requires = "star")]
    set_x: Option<u16>,
    #[arg(long = "set-y", requires = "star")]
    set_y: Option<u16>,
    #[arg(long = "set-position", value_name = "ORBIT", requires = "planet")]
    set_position: Option<usize>,
    #[arg(long = "set-type", value_name = "LABEL|CODE", requires = "planet")]
    set_type: Option<String>,
    #[arg(long = "set-size", value_name = "LABEL|CODE", requires = "planet")]
    set_size: Option<String>,
    #[arg(long = "set-gravity", value_name = "LABEL|CODE", requires = "planet")]
    set_gravity: Option<String>,
    #[arg(long = "set-richness", value_name = "LABEL|CODE", requires = "planet")]
    set_richness: Option<String>,
    #[arg(long = "set-terraform", value_name = "LABEL|CODE", requires = "planet")]
    set_terraform: Option<String>,
    #[arg(long = "set-food", requires = "planet", allow_hyphen_values = true)]
    set_food: Option<i32>,
    #[arg(long = "set-scenery", requires = "planet", allow_hyphen_values = true)]
    set_scenery: Option<i32>,
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn sections(&self) -> SectionSelection {
        SectionSelection {
            players: self.players,
            stars: self.stars,
            planets: self.planets,
        }
    }

    fn has_star_edits(&self) -> bool {
        self.make_planet.is_some() || self.set_x.is_some() || self.set_y.is_some()
    }

    fn has_planet_edits(&self) -> bool {
        self.set_position.is_some()
            || self.set_type.is_some()
            || self.set_size.is_some()
            || self.set_gravity.is_some()
            || self.set_richness.is_some()
            || self.set_terraform.is_some()
            || self.set_food.is_some()
            || self.set_scenery.is_some()
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let has_edits = cli.has_star_edits() || cli.has_planet_edits();

    if has_edits && cli.output.is_none() {
        eprintln!("--make-planet and --set-* flags require --output <PATH>");
        process::exit(2);
    }
    if !has_edits && cli.output.is_some() {
        eprintln!("--output requires --make-planet or at least one --set-* flag");
        process::exit(2);
    }

    let bytes = fs::read(&cli.path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", cli.path.display());
        process::exit(1);
    });

    let mut game = Game::from_bytes(bytes).unwrap_or_else(|e| {
        eprintln!("Error loading save file: {}", cli.path.display());
        eprintln!("  {}", e);
        process::exit(1);
    });

    if cli.has_star_edits() {
        apply_star_edits(&mut game, &cli).unwrap_or_else(|e| {
            eprintln!("Error applying star edit: {e}");
            process::exit(1);
        });
    }
    if let Some(index) = cli.planet {
        apply_planet_edits(&mut game, index, &cli).unwrap_or_else(|e| {
            eprintln!("Error applying planet {index} edit: {e}");
            process::exit(1);
        });
    }

    if let Some(out_path) = cli.output.as_ref() {
        fs::write(out_path, game.to_bytes()).unwrap_or_else(|e| {
            eprintln!("Error writing {}: {e}", out_path.display());
            process::exit(1);
        });
        info!("wrote {}", out_path.display());
    }

    let sections = cli.sections();
    if cli.json {
        let json = render_json_selected(&game, &sections, JsonStyle::CanonicalV1)
            .unwrap_or_else(|e| {
                eprintln!("Error reading save data: {e}");
                process::exit(1);
            });
        let rendered = serde_json::to_string_pretty(&json).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    if let Some(out_path) = cli.output.as_ref() {
        if !sections.is_any_selected() {
            println!("Wrote edited save to {}", out_path.display());
            return;
        }
    }

    let text = render_text(&game, &sections).unwrap_or_else(|e| {
        eprintln!("Error reading save data: {e}");
        process::exit(1);
    });
    print!("{text}");
}

fn apply_star_edits(game: &mut Game, cli: &Cli) -> Result<(), String> {
    let name = cli.star.as_deref().unwrap_or_default();
    let mut star = game
        .star_named_mut(name)
        .ok_or_else(|| format!("no star named {name:?}"))?;

    if let Some(x) = cli.set_x {
        star.set_x(x).map_err(|e| e.to_string())?;
    }
    if let Some(y) = cli.set_y {
        star.set_y(y).map_err(|e| e.to_string())?;
    }
    if let Some(orbit) = cli.make_planet {
        let planet = star
            .make_planet(orbit, to_core_body_type(cli.body_type).raw())
            .map_err(|e| e.to_string())?;
        eprintln!("Made planet {} at {name}/{orbit}", planet.index());
    }
    Ok(())
}

fn apply_planet_edits(game: &mut Game, index: usize, cli: &Cli) -> Result<(), CoreError> {
    let mut planet = game.planet_mut(index)?;

    if let Some(value) = cli.set_type.as_deref() {
        set_coded(&mut planet, value, Planet::set_body_type, Planet::set_body_type_label)?;
    }
    if let Some(value) = cli.set_size.as_deref() {
        set_coded(&mut planet, value, Planet::set_size, Planet::set_size_label)?;
    }
    if let Some(value) = cli.set_gravity.as_deref() {
        set_coded(&mut planet, value, Planet::set_gravity, Planet::set_gravity_label)?;
    }
    if let Some(value) = cli.set_richness.as_deref() {
        set_coded(&mut planet, value, Planet::set_richness, Planet::set_richness_label)?;
    }
    if let Some(value) = cli.set_terraform.as_deref() {
        set_coded(&mut planet, value, Planet::set_terraform, Planet::set_terraform_label)?;
    }
    if let Some(food) = cli.set_food {
        planet.set_food(food)?;
    }
    if let Some(scenery) = cli.set_scenery {
        planet.set_scenery(scenery)?;
    }
    if let Some(orbit) = cli.set_position {
        planet.set_position(orbit)?;
    }
    Ok(())
}

type PlanetMut<'a> = Planet<&'a mut Game>;

/// Numeric arguments go to the code setter, anything else is a label.
fn set_coded<'a>(
    planet: &mut PlanetMut<'a>,
    value: &str,
    by_code: fn(&mut PlanetMut<'a>, i32) -> Result<(), CoreError>,
    by_label: fn(&mut PlanetMut<'a>, &str) -> Result<(), CoreError>,
) -> Result<(), CoreError> {
    match value.parse::<i32>() {
        Ok(code) => by_code(planet, code),
        Err(_) => by_label(planet, value),
    }
}

fn to_core_body_type(value: BodyTypeArg) -> BodyType {
    match value {
        BodyTypeArg::Asteroid => BodyType::Asteroid,
        BodyTypeArg::GasGiant => BodyType::GasGiant,
        BodyTypeArg::Planet => BodyType::Planet,
    }
}
