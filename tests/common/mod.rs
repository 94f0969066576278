use std::fs;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::str::FromStr;

use data_encoding::HEXLOWER;
use rand::seq::SliceRandom;
use rand::Rng;
use text_record_sort::book::Book;
use text_record_sort::record::Record;
use text_record_sort::value::Value;

pub fn setup() {
    let results_dir_path = PathBuf::from_str("./target/results/").unwrap();

    if !results_dir_path.exists() {
        fs::create_dir_all(&results_dir_path).unwrap_or_else(|_|
            panic!("Failed to create results directory: {:?}", results_dir_path)
        );
    } else {
        println!("Results directory exists at {:?}", results_dir_path);
    }
}

#[allow(dead_code)]
pub fn read_lines(path: PathBuf) -> Result<Vec<String>, anyhow::Error> {
    let reader = BufReader::new(File::open(path)?);
    let lines = reader.lines().map(|x| x.unwrap()).collect();
    Ok(lines)
}

#[allow(dead_code)]
pub fn temp_file_name(dir: &str) -> PathBuf {
    let mut result = PathBuf::from(dir);
    let name = HEXLOWER.encode(&rand::random::<[u8; 16]>());
    result.push(name);
    result
}

/// Write `content` to a fresh file under ./target/results/
#[allow(dead_code)]
pub fn fixture(content: &str) -> Result<PathBuf, anyhow::Error> {
    let path = temp_file_name("./target/results/");
    fs::write(&path, content)?;
    Ok(path)
}

/// Books with unique ids 0..count, in random order. Titles and authors are drawn from small
/// sets so that comparators see plenty of ties.
#[allow(dead_code)]
pub fn random_books(count: usize) -> Vec<Book> {
    let titles = ["Dune", "Emma", "Hobbit", "Rings"];
    let authors = ["Austen", "Herbert", "Tolkien"];
    let mut rng = rand::thread_rng();
    let mut books: Vec<Book> = (0..count)
        .map(|id| {
            let title = titles[rng.gen_range(0..titles.len())];
            let author = authors[rng.gen_range(0..authors.len())];
            Book::new(id as i64, title, author)
        })
        .collect();
    books.shuffle(&mut rng);
    books
}

#[allow(dead_code)]
pub fn values<T: Record>(records: &[T]) -> Vec<Vec<Value>> {
    records.iter().map(|r| r.to_values()).collect()
}
