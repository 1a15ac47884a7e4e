use brickstats::style::{Sgr, paint};

fn main() {
    if let Err(err) = brickstats::run() {
        eprintln!("{}", paint(Sgr::RedF, &format!("error: {err:#}")));
        std::process::exit(1);
    }
}
