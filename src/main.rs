use std::io::{self, BufReader};
use std::{env, fs};

use ini::Ini;

fn main() {
    let path = env::args().nth(1).expect("expected path as first argument");
    let file = fs::File::open(path).expect("failed to open file");

    let mut ini = Ini::new();
    ini.parse_reader(BufReader::new(file));
    ini.interpolate();

    ini.generate(io::stdout().lock())
        .expect("failed to write to stdout");

    for line in ini.errors() {
        eprintln!("unparsed: {line}");
    }
}
