//! Walks a demo drivetrain through closest-under lookups and shift sequences.

use drivetrain_models::models::drivetrain::{
    DrivetrainConfig, GearSelection, closest_under, shift_sequence,
};
use uom::si::{f64::Ratio, ratio::ratio};

fn print_selection(config: &DrivetrainConfig, selection: GearSelection) {
    let value = selection
        .ratio(config)
        .expect("selection comes from this config")
        .get::<ratio>();
    println!(
        "f: {} r: {} ratio: {value:.3}",
        config.front_cogs[selection.front], config.rear_cogs[selection.rear],
    );
}

fn print_closest(config: &DrivetrainConfig, desired: f64) {
    println!("Desired ratio: {desired}");
    match closest_under(config, Ratio::new::<ratio>(desired)) {
        Ok(selection) => print_selection(config, selection),
        Err(err) => println!("ERROR getting ratio: {err}"),
    }
    println!();
}

fn print_steps(config: &DrivetrainConfig, desired: f64, start: GearSelection) {
    println!("Steps to get to {desired}:");
    match shift_sequence(config, Ratio::new::<ratio>(desired), start) {
        Ok(sequence) => {
            for (step, &selection) in sequence.iter().enumerate() {
                print!("{} - ", step + 1);
                print_selection(config, selection);
            }
        }
        Err(err) => println!("ERROR getting next gear: {err}"),
    }
    println!();
}

fn main() {
    let config = DrivetrainConfig {
        front_cogs: vec![30, 38, 44],
        rear_cogs: vec![16, 19, 23, 28],
    };

    println!("**** Closest gear under a desired ratio ****\n");
    for desired in [1.6, 5.0, 1.1, 2.0, 1.0] {
        print_closest(&config, desired);
    }

    println!("**** Shift sequences ****\n");
    print_steps(&config, 1.6, GearSelection::new(1, 3));
    print_steps(&config, 5.0, GearSelection::new(0, 3));
    print_steps(&config, 2.1, GearSelection::new(1, 3));
    print_steps(&config, 1.1, GearSelection::new(1, 3));
    // The lowest achievable ratio is 30/28, so this one reports an error.
    print_steps(&config, 1.0, GearSelection::new(1, 3));
}
