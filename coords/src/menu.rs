use crate::{benchmark, errors::HarnessErrors};
use colored::Colorize;
use coordinate_systems::{
    CoordinateSystem,
    distance::{distance_cartesian_2d, distance_polar},
    generator::PointGenerator,
};
use rand::{Rng, rngs::SmallRng};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Conversion,
    Distance,
    Benchmark,
    Exit,
}

impl MenuOption {
    pub fn parse(selection: &str) -> Option<Self> {
        match selection.trim() {
            "1" => Some(MenuOption::Conversion),
            "2" => Some(MenuOption::Distance),
            "3" => Some(MenuOption::Benchmark),
            "4" => Some(MenuOption::Exit),
            _ => None,
        }
    }
}

/// Interactive text menu over injected input and output streams.
pub struct Menu<R, W, G: Rng = SmallRng> {
    input: R,
    output: W,
    generator: PointGenerator<G>,
}

impl<R: BufRead, W: Write, G: Rng> Menu<R, W, G> {
    pub fn new(input: R, output: W, generator: PointGenerator<G>) -> Self {
        Self {
            input,
            output,
            generator,
        }
    }

    /// Runs until option 4 is chosen or input ends at the selection prompt.
    ///
    /// A count that is not an integer ends the run with `HarnessErrors::InvalidCount`.
    pub fn run(&mut self) -> Result<(), HarnessErrors> {
        loop {
            self.print_options()?;
            let Some(selection) = self.prompt("\nSelect an option: ")? else {
                debug!("input closed at menu prompt");
                break;
            };

            match MenuOption::parse(&selection) {
                Some(option) => {
                    debug!(?option, "menu selection");
                    match option {
                        MenuOption::Conversion => self.conversion_demo()?,
                        MenuOption::Distance => self.distance_demo()?,
                        MenuOption::Benchmark => self.benchmark()?,
                        MenuOption::Exit => break,
                    }
                }
                None => {
                    warn!(selection = selection.trim(), "invalid menu selection");
                    writeln!(self.output, "{}", "Invalid option! Please try again.".red())?;
                }
            }
        }
        Ok(())
    }

    fn print_options(&mut self) -> Result<(), HarnessErrors> {
        writeln!(self.output, "\n=== Coordinate system conversions ===")?;
        writeln!(self.output, "1. Convert between coordinate systems")?;
        writeln!(self.output, "2. Distances between points")?;
        writeln!(self.output, "3. Performance benchmarks")?;
        writeln!(self.output, "4. Exit")?;
        Ok(())
    }

    /// Prints `text` and reads one line. `None` means the input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, HarnessErrors> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Reads a signed integer count. Negative counts mean no iterations.
    fn read_count(&mut self, text: &str) -> Result<usize, HarnessErrors> {
        let line = self.prompt(text)?.ok_or(HarnessErrors::InputClosed)?;
        let trimmed = line.trim();
        let count: i64 = trimmed
            .parse()
            .map_err(|_| HarnessErrors::InvalidCount(trimmed.to_string()))?;
        debug!(count, "read count");
        Ok(usize::try_from(count).unwrap_or(0))
    }

    fn conversion_demo(&mut self) -> Result<(), HarnessErrors> {
        writeln!(self.output, "\n=== Conversion between coordinate systems ===")?;
        let n = self.read_count("Enter the number of points: ")?;

        for i in 1..=n {
            let polar = self.generator.polar();
            let cartesian = polar.to_cartesian();
            let round_trip = cartesian.to_polar();

            writeln!(self.output, "\nPoint {i}:")?;
            writeln!(self.output, "{}", CoordinateSystem::from(polar))?;
            writeln!(self.output, "{}", CoordinateSystem::from(cartesian))?;
            writeln!(self.output, "{} (round trip)", CoordinateSystem::from(round_trip))?;
        }
        Ok(())
    }

    fn distance_demo(&mut self) -> Result<(), HarnessErrors> {
        writeln!(self.output, "\n=== Distances between points ===")?;
        let n = self.read_count("Enter the number of point pairs: ")?;

        for i in 1..=n {
            let a = self.generator.polar();
            let b = self.generator.polar();
            let cartesian = distance_cartesian_2d(&a.to_cartesian(), &b.to_cartesian());
            let polar = distance_polar(&a, &b);

            writeln!(self.output, "\nPair {i}:")?;
            writeln!(self.output, "Point 1: {}", CoordinateSystem::from(a))?;
            writeln!(self.output, "Point 2: {}", CoordinateSystem::from(b))?;
            writeln!(self.output, "Distance (Cartesian): {cartesian:.2}")?;
            writeln!(self.output, "Distance (polar): {polar:.2}")?;
        }
        Ok(())
    }

    fn benchmark(&mut self) -> Result<(), HarnessErrors> {
        writeln!(self.output, "\n=== Performance benchmarks ===")?;
        let n = self.read_count("Enter the sample size: ")?;
        let report = benchmark::run_benchmark(&mut self.generator, n);
        benchmark::render_text(&report, &mut self.output)
    }
}
