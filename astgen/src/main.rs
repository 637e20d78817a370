use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use astgen::config::Derives;
use astgen::{Error, GenConfig, GrammarModel, Indirection};

#[derive(argh::FromArgs)]
/// Generate syntax tree node types and visitors from a grammar description.
struct Args {
    /// comma-separated traits to derive on every node, e.g. `Debug,Clone`
    #[argh(option)]
    derive: Option<Derives>,

    /// handle used for recursive fields: box, rc or arc
    #[argh(option)]
    indirection: Option<Indirection>,

    /// fail if the output file is not up to date, instead of writing it
    #[argh(switch)]
    check: bool,

    /// print a summary of the grammar to stderr
    #[argh(switch, short = 'v')]
    verbose: bool,

    /// grammar description file
    #[argh(positional)]
    infile: PathBuf,

    /// output file, or `-` for stdout
    #[argh(positional)]
    outfile: String,
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, Error> {
    let mut config = GenConfig::default();
    if let Some(Derives(derives)) = &args.derive {
        config.derives = derives.clone();
    }
    if let Some(indirection) = args.indirection {
        config.indirection = indirection;
    }

    let model = astgen::load_file(&args.infile)?;
    if args.verbose {
        summarize(&args.infile, &model);
    }

    let out = astgen::generate(&model, &config);

    if args.outfile == "-" {
        std::io::stdout()
            .write_all(out.as_bytes())
            .map_err(|err| Error::Io {
                path: PathBuf::from("<stdout>"),
                source: err,
            })?;
        return Ok(ExitCode::SUCCESS);
    }

    let outfile = Path::new(&args.outfile);
    if args.check {
        if !astgen::writer::is_up_to_date(outfile, &out)? {
            eprintln!(
                "{} is out of date, regenerate it from {}",
                outfile.display(),
                args.infile.display()
            );
            return Ok(ExitCode::FAILURE);
        }
        if args.verbose {
            eprintln!("{} is up to date", outfile.display());
        }
        return Ok(ExitCode::SUCCESS);
    }

    astgen::writer::write_atomic(outfile, &out)?;
    if args.verbose {
        eprintln!("wrote {} ({} bytes)", outfile.display(), out.len());
    }

    Ok(ExitCode::SUCCESS)
}

fn summarize(infile: &Path, model: &GrammarModel) {
    eprintln!("grammar {}", infile.display());
    for external in model.externals() {
        eprintln!("  use {}", external.path);
    }
    for category in model.categories() {
        let variants = category.variants.iter().map(|v| v.name.as_str());
        eprintln!(
            "  {} ({} variants): {}",
            category.name,
            category.variants.len(),
            variants.collect::<Vec<_>>().join(", ")
        );
    }
}
