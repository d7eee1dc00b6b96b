use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    messy_sales::cli::run_synthesize(std::env::args().skip(1))
}
