mod letter;

use failure::ResultExt;
use polyline::rand::{rngs::SmallRng, SeedableRng};
use polyline::{point, Polyline};
use std::process;
use structopt::StructOpt;

type Result<T> = std::result::Result<T, failure::Error>;

/// Walk through building, combining, and measuring polylines.
#[derive(Clone, Debug, StructOpt)]
#[structopt(name = "polyline")]
struct Options {
    /// How many points the random polyline gets.
    #[structopt(short = "n", long = "points", default_value = "5")]
    points: usize,

    /// Lower bound for random coordinates.
    #[structopt(long = "min", default_value = "1.0")]
    min: f32,

    /// Upper bound for random coordinates.
    #[structopt(long = "max", default_value = "8.0")]
    max: f32,

    /// Seed for the random polyline. Without one, every run differs.
    #[structopt(long = "seed")]
    seed: Option<u64>,
}

impl Options {
    fn random_polyline(&self) -> Result<Polyline<f32>> {
        let random = match self.seed {
            Some(seed) => Polyline::random_with(
                &mut SmallRng::seed_from_u64(seed),
                self.points,
                self.min,
                self.max,
            ),
            None => Polyline::random(self.points, self.min, self.max),
        };
        Ok(random.context("failed to generate a random polyline")?)
    }
}

fn main() {
    let options = Options::from_args();
    if let Err(e) = run(&options) {
        eprintln!("error: {}", e);
        for cause in e.iter_causes() {
            eprintln!("  caused by: {}", cause);
        }
        process::exit(1);
    }
}

fn run(options: &Options) -> Result<()> {
    let l1 = Polyline::from_point(point(1, 2));
    println!("Polyline 1: {}", l1);

    let mut l2 = Polyline::<i32>::new(3)?;
    l2[0] = point(1, 2);
    l2[1] = point(2, 3);
    l2[2] = point(4, 5);
    println!("Polyline 2: {}", l2);

    let l3 = options.random_polyline()?;
    println!("Polyline 3 (random): {}", l3);
    if l3.len() == 1 {
        eprintln!("warning: a single random point has no length");
    }
    println!("Length of polyline 3: {}", l3.length_complex());

    let mut l4 = point(-1, -1) + &l2;
    println!("Polyline 4, (-1, -1) then polyline 2: {}", l4);
    println!("Length of polyline 4: {}", l4.length());

    let l5 = &l4 + &l2;
    println!("Polyline 5, polyline 4 then polyline 2: {}", l5);

    let d = letter::letter_d().context("failed to trace the letter D")?;
    println!("Letter D: {}", d);

    l4 += point(3, 4);
    println!("Polyline 4 after appending (3, 4): {}", l4);

    let mut l6 = Polyline::<i32>::new(3)?;
    l6[0] = point(10, 10);
    l6[1] = point(20, 20);
    l6[2] = point(30, 30);
    let l6_copy = l6.try_clone()?;
    println!("Polyline 6: {}", l6);
    println!("Copy of polyline 6: {}", l6_copy);
    println!("Equal: {}", l6 == l6_copy);

    Ok(())
}
