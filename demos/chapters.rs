//! Walks through every algorithm in the crate on small inputs.
//!
//! ```text
//! cargo run --example chapters
//! cargo run --example chapters -- --section radix --verbose
//! ```

use clap::Parser;
use digisort::challenges::{largest_duplicate, move_to_end, reverse};
use digisort::{
    bubble_sort, insertion_sort, merge, merge_sort, selection_sort, DecimalSort, LogTracer,
    SortError, Tracer,
};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(about = "Sorting exercises with intermediate state")]
struct Args {
    /// Only run sections whose title contains this text
    #[arg(short, long)]
    section: Option<String>,

    /// Print every pass and partition
    #[arg(short, long)]
    verbose: bool,
}

fn example<F>(args: &Args, title: &str, body: F) -> Result<(), SortError>
where
    F: FnOnce() -> Result<(), SortError>,
{
    if let Some(filter) = &args.section {
        if !title.to_lowercase().contains(&filter.to_lowercase()) {
            return Ok(());
        }
    }

    println!("---Example of {}---", title);
    body()?;
    println!();

    Ok(())
}

fn main() -> Result<(), SortError> {
    let args = Args::parse();

    let mut logger = env_logger::builder();
    if args.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let tracer: &dyn Tracer<i32> = &LogTracer;

    example(&args, "bubble sort", || {
        let mut list = vec![9, 4, 10, 3];
        println!("Original: {:?}", list);
        bubble_sort(&mut list, tracer);
        println!("Bubble sorted: {:?}", list);
        Ok(())
    })?;

    example(&args, "selection sort", || {
        let mut list = vec![9, 4, 10, 3];
        println!("Original: {:?}", list);
        selection_sort(&mut list, tracer);
        println!("Selection sorted: {:?}", list);
        Ok(())
    })?;

    example(&args, "insertion sort", || {
        let mut list = vec![9, 4, 10, 3];
        println!("Original: {:?}", list);
        insertion_sort(&mut list, tracer);
        println!("Insertion sorted: {:?}", list);
        Ok(())
    })?;

    example(&args, "challenge: move all given values to the end", || {
        let mut list = vec![9, 3, 3, 7, 10, 3];
        let value = 3;
        println!("Original: {:?}", list);
        move_to_end(&mut list, &value);
        println!("After moving all {} to the end: {:?}", value, list);
        Ok(())
    })?;

    example(&args, "challenge: largest duplicate", || {
        let list = vec![9, 3, 7, 9, 3, 7, 10, 3];
        println!("{:?}", list);
        println!("Largest repeated: {:?}", largest_duplicate(&list));
        Ok(())
    })?;

    example(&args, "challenge: reverse by hand", || {
        let mut list = vec![9, 1, 7, 2, 4, 10, 3];
        println!("Original: {:?}", list);
        reverse(&mut list);
        println!("Reversed: {:?}", list);
        Ok(())
    })?;

    example(&args, "merge sort", || {
        let list = vec![7, 2, 6, 3, 9];
        println!("Original: {:?}", list);
        println!("Merge sorted: {:?}", merge_sort(&list));
        Ok(())
    })?;

    example(&args, "merge of sorted sequences", || {
        let first = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let second = vec![1, 3, 4, 5, 5, 6, 7, 7];
        println!("Merged: {:?}", merge(first, second));
        Ok(())
    })?;

    example(&args, "radix sort (LSD)", || {
        let mut list = vec![88, 410, 1772, 20];
        println!("Original: {:?}", list);
        list.decimal_sort_builder().with_tracer(tracer).lsd()?;
        println!("Radix sorted: {:?}", list);
        Ok(())
    })?;

    example(&args, "radix sort by significant digit (lexicographic)", || {
        let mut list = vec![500, 1345, 13, 459, 44, 999];
        println!("Original: {:?}", list);
        let sorted = list
            .decimal_sort_builder()
            .with_tracer(tracer)
            .lexicographic()?;
        println!("Lexicographically sorted: {:?}", sorted);
        Ok(())
    })?;

    example(&args, "radix sort (MSD)", || {
        let mut list = vec![500, 1345, 13, 459, 44, 999];
        println!("Original: {:?}", list);
        list.decimal_sort_builder().with_tracer(tracer).msd()?;
        println!("Radix sorted: {:?}", list);
        Ok(())
    })?;

    example(&args, "negative keys", || {
        let mut list = vec![4, -1, 2];
        match list.radix_sort_msd() {
            Ok(()) => println!("Sorted: {:?}", list),
            Err(e) => println!("Rejected: {}", e),
        }
        Ok(())
    })?;

    Ok(())
}
