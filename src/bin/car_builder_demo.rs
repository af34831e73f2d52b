// Builder pattern demo: a director drives a car builder and a manual builder
// through the same sequence and prints what each one produced.
//
// Usage: car_builder_demo [config.toml]
//
// Without a config file the classic sports car and its manual are built.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use colored::Colorize;

use car_builder::{logging, Application, DemoConfig, Product, Result};

fn print_product(product: &Product) {
    let heading = match product {
        Product::Car(_) => "=== Car ===".green().bold(),
        Product::Manual(_) => "=== Manual ===".yellow().bold(),
    };
    println!("\n{}", heading);
    println!("{}", product);
}

fn run() -> Result<()> {
    let app = Application::new();

    let Some(path) = env::args_os().nth(1) else {
        logging::init(DemoConfig::default().log_level()?)?;
        println!("{} {}", "Profile:".bold(), "sports-car".cyan());

        let (car, manual) = app.make_car();
        print_product(&Product::Car(car));
        print_product(&Product::Manual(manual));
        return Ok(());
    };

    let config = DemoConfig::load(&PathBuf::from(path))?;
    logging::init(config.log_level()?)?;

    println!(
        "{} {}",
        "Profile:".bold(),
        config.profile()?.to_string().cyan()
    );
    for product in app.run(&config)? {
        print_product(&product);
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
