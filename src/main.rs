//! Sort a file of books or vehicles and print the result as a table.

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use text_record_sort::algorithm::Algorithm;
use text_record_sort::book::{self, Book};
use text_record_sort::comparator::{Comparator, Natural};
use text_record_sort::order::Order;
use text_record_sort::record::Record;
use text_record_sort::render::render_table;
use text_record_sort::sort::Sort;
use text_record_sort::vehicle::{self, Vehicle};

/// A sort criterion: the comparator and the algorithm used unless one is requested.
type Criterion<T> = (Box<dyn Comparator<T>>, Algorithm);

#[derive(Parser, Debug)]
#[command(name = "record-sort", version, about = "Sort a record file and print it as a table")]
struct Cli {
    #[command(subcommand)]
    kind: Kind,

    /// Increase log verbosity, -v for info, -vv for debug
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Kind {
    /// Criteria: 1 natural (author, title), 2 reversed natural, 3 title, 4 author then title
    Books(SortArgs),
    /// Criteria: 1 natural (model, year), 2 reversed natural, 3 year descending then odometer,
    /// 4 engine power. Without a criterion the natural and the year then odometer tables are
    /// both printed
    Vehicles(SortArgs),
}

#[derive(Args, Debug)]
struct SortArgs {
    /// Record file to read
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Write the sorted records to FILE
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Sort criterion, 1-4. Records are not sorted for any other value
    #[arg(short, long)]
    criterion: Option<u8>,

    /// general or exchange. Defaults to the algorithm of the criterion
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Reverse the selected criterion
    #[arg(short, long)]
    desc: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = init_logger(&cli) {
        eprintln!("record-sort: {:#}", e);
        return;
    }

    let result = match &cli.kind {
        Kind::Books(args) => run::<Book>(args, args.criterion.unwrap_or(1), book_criterion),
        Kind::Vehicles(args) => match args.criterion {
            Some(criterion) => run::<Vehicle>(args, criterion, vehicle_criterion),
            None => show_vehicles(args),
        },
    };

    if let Err(e) = result {
        eprintln!("record-sort: {:#}", e);
    }
}

fn init_logger(cli: &Cli) -> Result<(), anyhow::Error> {
    let level = if cli.quiet {
        LevelFilter::Error
    } else {
        match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .context("failed to initialize logger")
}

fn book_criterion(criterion: u8) -> Option<Criterion<Book>> {
    match criterion {
        1 => Some((Box::new(Natural::<Book>::new()), Algorithm::General)),
        2 => Some((Box::new(Natural::<Book>::new().reversed()), Algorithm::Exchange)),
        3 => Some((Box::new(book::by_title()), Algorithm::Exchange)),
        4 => Some((Box::new(book::by_author_then_title()), Algorithm::Exchange)),
        _ => None,
    }
}

fn vehicle_criterion(criterion: u8) -> Option<Criterion<Vehicle>> {
    match criterion {
        1 => Some((Box::new(Natural::<Vehicle>::new()), Algorithm::General)),
        2 => Some((Box::new(Natural::<Vehicle>::new().reversed()), Algorithm::Exchange)),
        3 => Some((Box::new(vehicle::by_year_desc_then_odometer()), Algorithm::General)),
        4 => Some((Box::new(vehicle::by_engine()), Algorithm::Exchange)),
        _ => None,
    }
}

fn configure<T: Record + 'static>(
    record_sort: &mut Sort<T>,
    args: &SortArgs,
    criterion: u8,
    select: fn(u8) -> Option<Criterion<T>>,
) {
    match select(criterion) {
        Some((comparator, algorithm)) => {
            record_sort.with_comparator(comparator);
            record_sort.with_algorithm(args.algorithm.unwrap_or(algorithm));
        }
        None => {
            log::warn!("Unknown criterion {}, records will not be sorted", criterion);
            record_sort.with_source_order();
        }
    }
    if args.desc {
        record_sort.with_order(Order::Desc);
    }
}

fn load<T: Record + 'static>(record_sort: &Sort<T>, args: &SortArgs) -> Result<Vec<T>, anyhow::Error> {
    record_sort.load()
        .with_context(|| format!("cannot load {} records from {}", T::NAME, args.input.display()))
}

fn save<T: Record + 'static>(record_sort: &mut Sort<T>, args: &SortArgs, records: &[T]) -> Result<(), anyhow::Error> {
    if let Some(output) = &args.output {
        record_sort.with_output(output.clone());
        record_sort.save(records)
            .with_context(|| format!("cannot save {} records to {}", T::NAME, output.display()))?;
    }
    Ok(())
}

fn run<T: Record + 'static>(
    args: &SortArgs,
    criterion: u8,
    select: fn(u8) -> Option<Criterion<T>>,
) -> Result<(), anyhow::Error> {
    let mut record_sort: Sort<T> = Sort::new(args.input.clone());
    configure(&mut record_sort, args, criterion, select);

    let mut records = load(&record_sort, args)?;
    print!("{}", render_table("Unsorted records", &records));

    record_sort.order(&mut records);
    print!("{}", render_table("Sorted records", &records));

    save(&mut record_sort, args, &records)
}

/// Print the vehicles unsorted, in natural order, then by year and odometer. The last ordering
/// is the one saved.
fn show_vehicles(args: &SortArgs) -> Result<(), anyhow::Error> {
    let mut vehicle_sort: Sort<Vehicle> = Sort::new(args.input.clone());
    let mut vehicles = load(&vehicle_sort, args)?;
    print!("{}", render_table("Unsorted records", &vehicles));

    configure(&mut vehicle_sort, args, 1, vehicle_criterion);
    vehicle_sort.order(&mut vehicles);
    print!("{}", render_table("Sorted records", &vehicles));

    configure(&mut vehicle_sort, args, 3, vehicle_criterion);
    vehicle_sort.order(&mut vehicles);
    print!("{}", render_table("Sorted by year and odometer", &vehicles));

    save(&mut vehicle_sort, args, &vehicles)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use text_record_sort::engine::Engine;

    use super::*;

    fn args(algorithm: Option<Algorithm>, desc: bool) -> SortArgs {
        SortArgs {
            input: PathBuf::from("records.dat"),
            output: None,
            criterion: None,
            algorithm,
            desc,
        }
    }

    fn books() -> Vec<Book> {
        vec![
            Book::new(3, "Rings", "Tolkien"),
            Book::new(1, "Emma", "Austen"),
            Book::new(2, "Hobbit", "Tolkien"),
            Book::new(4, "Dune", "Herbert"),
        ]
    }

    fn vehicles() -> Vec<Vehicle> {
        vec![
            Vehicle::new("Alpha", 2000, Engine::new("Benzin", 40.0), "Crvena", 100),
            Vehicle::new("Beta", 2000, Engine::new("Dizel", 66.5), "Plava", 100),
            Vehicle::new("Gamma", 2010, Engine::new("Benzin", 52.0), "Bela", 0),
        ]
    }

    fn ordered<T: Record + 'static>(
        mut records: Vec<T>,
        args: &SortArgs,
        criterion: u8,
        select: fn(u8) -> Option<Criterion<T>>,
    ) -> Vec<T> {
        let mut record_sort: Sort<T> = Sort::new(args.input.clone());
        configure(&mut record_sort, args, criterion, select);
        record_sort.order(&mut records);
        records
    }

    fn ids(books: &[Book]) -> Vec<i64> {
        books.iter().map(Book::id).collect()
    }

    fn models(vehicles: &[Vehicle]) -> Vec<&str> {
        vehicles.iter().map(Vehicle::model).collect()
    }

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();

        let cli = Cli::try_parse_from(["record-sort", "vehicles", "-i", "cars.dat"]).unwrap();
        match cli.kind {
            Kind::Vehicles(args) => {
                assert_eq!(args.criterion, None);
                assert_eq!(args.algorithm, None);
            }
            other => panic!("unexpected kind: {:?}", other),
        }

        let cli = Cli::try_parse_from(
            ["record-sort", "-v", "books", "-i", "books.dat", "-c", "4", "-a", "exchange", "--desc"]
        ).unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.kind {
            Kind::Books(args) => {
                assert_eq!(args.criterion, Some(4));
                assert_eq!(args.algorithm, Some(Algorithm::Exchange));
                assert!(args.desc);
            }
            other => panic!("unexpected kind: {:?}", other),
        }
    }

    #[test]
    fn test_default_algorithms() {
        let expected = [Algorithm::General, Algorithm::Exchange, Algorithm::Exchange, Algorithm::Exchange];
        for (criterion, algorithm) in (1..=4).zip(expected) {
            assert_eq!(book_criterion(criterion).map(|(_, a)| a), Some(algorithm));
        }
        let expected = [Algorithm::General, Algorithm::Exchange, Algorithm::General, Algorithm::Exchange];
        for (criterion, algorithm) in (1..=4).zip(expected) {
            assert_eq!(vehicle_criterion(criterion).map(|(_, a)| a), Some(algorithm));
        }
    }

    #[test]
    fn test_book_criteria() {
        let args = args(None, false);
        assert_eq!(ids(&ordered(books(), &args, 1, book_criterion)), vec![1, 4, 2, 3]);
        assert_eq!(ids(&ordered(books(), &args, 2, book_criterion)), vec![3, 2, 4, 1]);
        assert_eq!(ids(&ordered(books(), &args, 3, book_criterion)), vec![4, 1, 2, 3]);
        assert_eq!(ids(&ordered(books(), &args, 4, book_criterion)), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_vehicle_criteria() {
        let args = args(None, false);
        assert_eq!(models(&ordered(vehicles(), &args, 1, vehicle_criterion)), vec!["Alpha", "Beta", "Gamma"]);
        assert_eq!(models(&ordered(vehicles(), &args, 2, vehicle_criterion)), vec!["Gamma", "Beta", "Alpha"]);
        assert_eq!(models(&ordered(vehicles(), &args, 4, vehicle_criterion)), vec!["Alpha", "Gamma", "Beta"]);
    }

    #[test]
    fn test_year_then_odometer_keeps_ties_in_input_order() {
        let sorted = ordered(vehicles(), &args(None, false), 3, vehicle_criterion);
        assert_eq!(models(&sorted), vec!["Gamma", "Alpha", "Beta"]);

        // the exchange sort moves tied records
        let exchanged = ordered(vehicles(), &args(Some(Algorithm::Exchange), false), 3, vehicle_criterion);
        assert_eq!(models(&exchanged), vec!["Gamma", "Beta", "Alpha"]);
    }

    #[test]
    fn test_descending_criterion() {
        let args = args(None, true);
        assert_eq!(ids(&ordered(books(), &args, 3, book_criterion)), vec![3, 2, 1, 4]);
    }

    #[test]
    fn test_unknown_criterion_keeps_source_order() {
        assert!(book_criterion(0).is_none());
        assert!(book_criterion(5).is_none());
        assert!(vehicle_criterion(0).is_none());
        assert!(vehicle_criterion(5).is_none());

        for criterion in [0, 5] {
            for desc in [false, true] {
                let args = args(None, desc);
                assert_eq!(ids(&ordered(books(), &args, criterion, book_criterion)), vec![3, 1, 2, 4]);
                assert_eq!(models(&ordered(vehicles(), &args, criterion, vehicle_criterion)), vec!["Alpha", "Beta", "Gamma"]);
            }
        }
    }
}
