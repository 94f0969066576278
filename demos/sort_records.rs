use std::path::{Path, PathBuf};

use anyhow::Error;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use text_record_sort::algorithm::Algorithm;
use text_record_sort::book::{self, Book};
use text_record_sort::order::Order;
use text_record_sort::render::render_table;
use text_record_sort::sort::Sort;
use text_record_sort::vehicle::{self, Vehicle};

fn sort_books_natural(input_path: &Path, output_path: &Path) -> Result<(), Error> {
    // natural order and the general algorithm are the default
    let mut books: Sort<Book> = Sort::new(input_path.to_path_buf());
    books.with_output(output_path.to_path_buf());
    print!("{}", render_table("Books in natural order", &books.sort()?));
    Ok(())
}

fn sort_books_by_title_descending(input_path: &Path, output_path: &Path) -> Result<(), Error> {
    let mut books: Sort<Book> = Sort::new(input_path.to_path_buf());
    books.with_comparator(book::by_title());
    books.with_algorithm(Algorithm::Exchange);
    books.with_order(Order::Desc);
    books.with_output(output_path.to_path_buf());
    print!("{}", render_table("Books by title, descending", &books.sort()?));
    Ok(())
}

fn sort_vehicles(input_path: &Path, output_path: &Path) -> Result<(), Error> {
    let mut vehicles: Sort<Vehicle> = Sort::new(input_path.to_path_buf());
    let mut records = vehicles.load()?;
    print!("{}", render_table("Unsorted vehicles", &records));

    vehicles.order(&mut records);
    print!("{}", render_table("Vehicles in natural order", &records));

    vehicles.with_comparator(vehicle::by_year_desc_then_odometer());
    vehicles.with_output(output_path.to_path_buf());
    vehicles.order(&mut records);
    vehicles.save(&records)?;
    print!("{}", render_table("Vehicles by year descending, then odometer", &records));
    Ok(())
}

// cargo run -r --example sort_records
pub fn main() -> Result<(), Error> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let books_path = PathBuf::from("./tests/fixtures/books.dat");
    let vehicles_path = PathBuf::from("./tests/fixtures/vehicles.dat");
    let natural_path = PathBuf::from("./target/books-natural.dat");
    let title_path = PathBuf::from("./target/books-title-desc.dat");
    let year_path = PathBuf::from("./target/vehicles-year.dat");

    sort_books_natural(&books_path, &natural_path)?;
    sort_books_by_title_descending(&books_path, &title_path)?;
    sort_vehicles(&vehicles_path, &year_path)?;

    Ok(())
}
