mod args;
mod types;

use std::{
  path::{Path, PathBuf},
  process::ExitCode,
  time::Instant,
};

use ansi_term::Colour;
use anyhow::Context;
use args::{OptionsArgs, parse_chunk_name};
use clap::{Parser, Subcommand};
use route_chunks::{
  BuildError, ModuleId, NormalizedRouteChunkOptions, RouteChunkCache, RouteChunkInfo,
  RouteChunkName, detect_route_chunks_for_modules, get_route_chunk_if_enabled, normalize_options,
  route_chunk_validity, validate_route_chunks,
};
use sugar_path::SugarPath;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
  #[clap(flatten)]
  options: OptionsArgs,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Reports which route exports of each module can be split into their own chunk.
  Detect {
    #[clap(required = true)]
    files: Vec<PathBuf>,
  },
  /// Prints the code of one chunk of a route module.
  Chunk {
    file: PathBuf,
    #[clap(value_parser = parse_chunk_name)]
    name: RouteChunkName,
  },
}

fn read_module(file: &Path) -> anyhow::Result<(ModuleId, String)> {
  let code = std::fs::read_to_string(file)
    .with_context(|| format!("Failed to read {}", file.display()))?;
  let id = ModuleId::new(file.absolutize().normalize().to_string_lossy().into_owned());
  Ok((id, code))
}

fn print_errors(errors: &BuildError) {
  for error in &**errors {
    println!("{} {}", Colour::Red.paint("Error:"), error);
  }
}

fn print_route_chunk_info(module: &str, info: &RouteChunkInfo) {
  let dim = Colour::White.dimmed();
  if info.has_route_chunks {
    let names = info.chunked_exports.iter().map(|name| name.as_str()).collect::<Vec<_>>();
    println!("{} {}", Colour::Cyan.paint(module), names.join(", "));
  } else {
    println!("{} {}", Colour::Cyan.paint(module), dim.paint("no route chunks"));
  }
}

/// Returns whether every module was analyzed and, in enforce mode, passed validation.
fn detect(options: &NormalizedRouteChunkOptions, files: &[PathBuf]) -> anyhow::Result<bool> {
  let modules = files.iter().map(|file| read_module(file)).collect::<anyhow::Result<Vec<_>>>()?;

  let cache = RouteChunkCache::new();
  let start = Instant::now();
  let results = detect_route_chunks_for_modules(Some(&cache), options, &modules);

  let mut is_ok = true;
  for ((id, code), result) in modules.iter().zip(results) {
    let module = id.stabilize(&options.app_directory);
    let info = match result {
      Ok(info) => info,
      Err(errors) => {
        println!("{}", Colour::Cyan.paint(&module));
        print_errors(&errors);
        is_ok = false;
        continue;
      }
    };
    print_route_chunk_info(&module, &info);

    if options.is_enforced() {
      let validated = route_chunk_validity(Some(&cache), options, id, code, &info)
        .and_then(|valid| validate_route_chunks(options, id, valid));
      if let Err(errors) = validated {
        print_errors(&errors);
        is_ok = false;
      }
    }
  }

  tracing::debug!("{} analysis result(s) cached", cache.len());
  let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
  println!("\n{} Finished in {}", Colour::Green.paint("✔"), Colour::White.bold().paint(elapsed));
  Ok(is_ok)
}

fn chunk(
  options: &NormalizedRouteChunkOptions,
  file: &Path,
  chunk_name: RouteChunkName,
) -> anyhow::Result<bool> {
  let (id, code) = read_module(file)?;
  match get_route_chunk_if_enabled(None, options, &id, chunk_name, &code) {
    Ok(Some(code)) => println!("{code}"),
    Ok(None) => {
      let reason = if chunk_name == RouteChunkName::Main {
        "nothing is left in the main chunk"
      } else {
        "this export cannot be split into its own chunk"
      };
      println!("{} {}", Colour::Yellow.paint("Warning:"), reason);
    }
    Err(errors) => {
      print_errors(&errors);
      return Ok(false);
    }
  }
  Ok(true)
}

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("route_chunks=info")),
    )
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let cli = Cli::parse();
  let options = normalize_options(cli.options.into());

  let result = match cli.command {
    Command::Detect { files } => detect(&options, &files),
    Command::Chunk { file, name } => chunk(&options, &file, name),
  };

  match result {
    Ok(true) => ExitCode::SUCCESS,
    Ok(false) => ExitCode::FAILURE,
    Err(error) => {
      println!("{} {:#}", Colour::Red.paint("Error:"), error);
      ExitCode::FAILURE
    }
  }
}
