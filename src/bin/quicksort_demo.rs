use std::env;
use std::process;

use lomuto_quicksort::{patterns, quicksort};

fn usage() -> ! {
    eprintln!("Usage: quicksort_demo [<pattern> <len>]");
    eprintln!(
        "Patterns: random, random_binary, all_equal, ascending, descending, saw_mixed, pipe_organ"
    );
    process::exit(2);
}

fn main() {
    let args = env::args().skip(1).collect::<Vec<_>>();

    match args.as_slice() {
        [] => {
            let mut arr = [64, 34, 25, 12, 22, 11, 90];
            println!("Original array: {:?}", arr);
            quicksort::sort(&mut arr);
            println!("Sorted array: {:?}", arr);
        }
        [pattern_name, len] => {
            let Some(pattern_fn) = patterns::by_name(pattern_name) else {
                usage();
            };
            let Ok(len) = len.parse::<usize>() else {
                usage();
            };

            let mut v = pattern_fn(len);
            quicksort::sort(&mut v);

            println!("Seed: {}", patterns::random_init_seed());
            println!(
                "Sorted {len} elements of pattern {pattern_name}: {}",
                if v.windows(2).all(|w| w[0] <= w[1]) {
                    "ok"
                } else {
                    "NOT SORTED"
                }
            );
        }
        _ => usage(),
    }
}
