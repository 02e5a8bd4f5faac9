use clap::Parser;
use robin_static::BuildError;
use robin_static::Builder;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'n', long = "keys", default_value_t = 1000)]
    keys: usize,

    #[arg(short = 'm', long = "multiplier", default_value_t = 1.0)]
    multiplier: f64,

    #[arg(short = 's', long = "seed", default_value_t = 0)]
    seed: u64,

    /// Reject layouts with any key further than this from its ideal slot.
    #[arg(short = 'd', long = "max_displacement")]
    max_displacement: Option<usize>,

    #[arg(short = 'r', long = "reseed_attempts", default_value_t = 0)]
    reseed_attempts: u32,
}

fn main() {
    let args = Args::parse();

    println!(
        "Building table of {} string keys with capacity multiplier {}",
        args.keys, args.multiplier
    );

    let mut builder = Builder::new()
        .capacity_multiplier(args.multiplier)
        .seed(args.seed)
        .reseed_attempts(args.reseed_attempts);
    if let Some(limit) = args.max_displacement {
        builder = builder.max_displacement(limit);
    }

    let pairs = (0..args.keys).map(|i| (format!("key{i:03}"), i as i64));
    let map = match builder.build(pairs) {
        Ok(map) => map,
        Err(BuildError::DisplacementLimit {
            limit,
            observed,
            seeds_tried,
        }) => {
            println!(
                "No layout within displacement {limit} after {seeds_tried} seed(s); last attempt reached {observed}"
            );
            return;
        }
        Err(err) => {
            println!("Build failed: {err}");
            return;
        }
    };

    println!("Capacity: {} (seed {})", map.capacity(), map.seed());

    let mut misses = 0;
    for i in 0..args.keys {
        let key = format!("key{i:03}");
        if map.get_or(key.as_str(), -1) != i as i64 {
            misses += 1;
        }
    }
    println!("Lookups that failed round trip: {misses}");

    println!("Probe histogram (displacement: keys):");
    for (distance, count) in map.probe_histogram().iter().enumerate() {
        println!("  {distance:>3}: {count}");
    }
    map.debug_stats().print();
}
