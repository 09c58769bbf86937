//! Print `CityHash64WithSeed(line, 0)` and the line itself, tab-separated,
//! for every line of a file.

use std::{
  env,
  fs::File,
  io::{self, BufRead, BufReader, BufWriter, Write},
  process::ExitCode,
};

use cityhash::city;

#[derive(Clone, Debug)]
struct Args {
  path: String,
}

fn parse_args() -> Result<Args, String> {
  let mut path = None;
  for arg in env::args().skip(1) {
    match arg.as_str() {
      "--help" | "-h" => {
        print_help();
        return Err(String::new());
      }
      other if other.starts_with("--") => return Err(format!("Unknown arg: {other}")),
      file if path.is_none() => path = Some(file.to_owned()),
      extra => return Err(format!("Unexpected extra argument: {extra}")),
    }
  }
  path.map(|path| Args { path }).ok_or_else(|| "Missing FILE argument".to_owned())
}

fn print_help() {
  eprintln!(
    "\
cityhash64-lines: hash a text file line by line

USAGE:
  cityhash64-lines FILE

Reads FILE and prints CityHash64WithSeed(line, 0), a tab, and the line,
for every line.
"
  );
}

fn run(input: impl BufRead, out: impl Write) -> io::Result<()> {
  let mut out = BufWriter::new(out);
  for line in input.split(b'\n') {
    let line = line?;
    write!(out, "{}\t", city::hash64_with_seed(&line, 0))?;
    out.write_all(&line)?;
    out.write_all(b"\n")?;
  }
  out.flush()
}

fn main() -> ExitCode {
  let args = match parse_args() {
    Ok(args) => args,
    Err(msg) => {
      if msg.is_empty() {
        return ExitCode::SUCCESS;
      }
      eprintln!("{msg}");
      print_help();
      return ExitCode::FAILURE;
    }
  };

  let stdout = io::stdout().lock();
  match File::open(&args.path).and_then(|f| run(BufReader::new(f), stdout)) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("cityhash64-lines failed: {err}");
      ExitCode::FAILURE
    }
  }
}
