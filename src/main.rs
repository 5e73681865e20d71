#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use shipgrid::{
    generate_line, init_logging, print_grid, print_section, print_separator, print_ship_coords,
    Ability, Grid, Orientation, Point, BOARD_SIZE, FLEET, MASK_SIZE,
};

#[cfg(feature = "std")]
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Print ship coordinate lists from start points and orientations.
    Coords,
    /// Print the 10x10 occupancy board with the demo fleet stamped on it.
    Board,
    /// Print the cross, diamond and cone ability masks.
    Abilities,
    /// Run the whole demonstration sequence.
    All,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::All) {
        Commands::Coords => demo_coords(),
        Commands::Board => demo_board()?,
        Commands::Abilities => demo_abilities()?,
        Commands::All => {
            print_separator();
            demo_coords();
            print_separator();
            demo_board()?;
            print_separator();
            demo_abilities()?;
            print_separator();
            println!("End of demonstration.");
        }
    }
    Ok(())
}

/// Coordinate lists for two straight ships, no grid involved.
#[cfg(feature = "std")]
fn demo_coords() {
    print_section("Ship Coordinates");

    let vertical = generate_line(Point::new(1, 3), 4, Orientation::Vertical);
    print_ship_coords("Vertical ship (length 4) from (1, 3)", &vertical);

    println!();
    let horizontal = generate_line(Point::new(6, 2), 5, Orientation::Horizontal);
    print_ship_coords("Horizontal ship (length 5) from (6, 2)", &horizontal);
}

/// 10x10 board with the four demo ships, diagonals included.
/// 0 = empty, 3 = occupied.
#[cfg(feature = "std")]
fn demo_board() -> anyhow::Result<()> {
    print_section("10x10 Board with 4 Ships (diagonals included)");

    let mut board = Grid::new(BOARD_SIZE, BOARD_SIZE).map_err(|e| anyhow::anyhow!(e))?;
    for ship in FLEET {
        log::debug!(
            "placing {} ({:?}) at {}",
            ship.ship_type().name(),
            ship.direction(),
            ship.origin()
        );
        ship.place_on(&mut board);
    }
    print_grid(&board);
    Ok(())
}

/// The three ability masks on compact 5x5 grids.
/// 0 = unaffected, 1 = affected.
#[cfg(feature = "std")]
fn demo_abilities() -> anyhow::Result<()> {
    print_section("Abilities (0 = unaffected, 1 = affected)");

    let shapes = [
        (Ability::Cross { radius: 2 }, Point::new(2, 2)),
        (Ability::Diamond { radius: 1 }, Point::new(1, 2)),
        (Ability::Cone { height: 3 }, Point::new(0, 2)),
    ];
    for (ability, origin) in shapes {
        let mask = ability
            .mask(MASK_SIZE, MASK_SIZE, origin)
            .map_err(|e| anyhow::anyhow!(e))?;
        println!("\nAbility: {} (origin {})", ability.name(), origin);
        print_grid(&mask);
    }
    Ok(())
}
