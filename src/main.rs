// curves: sample a parametric curve or surface and write it out.
//
// Subcommands:
//   sine, lissajous, trefoil, hyperboloid, spiral
//                — ask the parameters, write the sampling to stdout
//   layers       — sphere/cone/cube scene, toggle layers with s, c, u

use std::{fs::File,
          io::{self, BufWriter, Write},
          path::PathBuf};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info, warn};
use parametric_curves::{config::ParamsFile,
                        input::{self, Prompted},
                        layers::Scene,
                        shapes::{Hyperboloid, Lissajous, Shape, SineWave,
                                 Spiral, Trefoil},
                        Sampling};

#[derive(Parser)]
#[command(name = "curves",
          about = "Sample parametric curves and surfaces")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
    /// Read the parameters from this TOML file instead of asking them
    #[arg(long, global = true)]
    params: Option<PathBuf>,
    /// Do not ask, use the default parameters
    #[arg(long, global = true, conflicts_with = "params")]
    defaults: bool,
    /// Output format [default: gnuplot]
    #[arg(long, value_enum, global = true)]
    format: Option<Format>,
    /// Write to this file instead of stdout
    #[arg(long, short, global = true)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Sine wave between two angles in degrees
    Sine,
    /// 3D Lissajous curve
    Lissajous,
    /// Trefoil knot
    Trefoil,
    /// Wireframe of a hyperboloid of one sheet
    Hyperboloid,
    /// Helix
    Spiral,
    /// Sphere, cone and cube in toggleable layers
    Layers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// "x y z" lines, two blank lines between the paths of a grid
    Gnuplot,
    /// PGF/TikZ path of the xy projection
    Latex,
    /// {"points": [...], "lines": [...]}
    Json,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout is reserved for the data.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Cmd::Sine => run(&cli, |p| p.sine),
        Cmd::Lissajous => run(&cli, |p| p.lissajous),
        Cmd::Trefoil => run(&cli, |p| p.trefoil),
        Cmd::Hyperboloid => run(&cli, |p| p.hyperboloid),
        Cmd::Spiral => run(&cli, |p| p.spiral),
        Cmd::Layers => {
            let ignored = ignored_flags(&cli);
            if !ignored.is_empty() {
                warn!("{} ignored by the layers scene", ignored.join(", "));
            }
            run_layers()
        }
    }
}

/// Global flags given on the command line that only apply to the
/// sampling subcommands.
fn ignored_flags(cli: &Cli) -> Vec<&'static str> {
    let mut flags = vec![];
    if cli.params.is_some() { flags.push("--params") }
    if cli.defaults { flags.push("--defaults") }
    if cli.format.is_some() { flags.push("--format") }
    if cli.output.is_some() { flags.push("--output") }
    flags
}

/// Obtain the parameters of `S`, sample and write the result.
fn run<S>(cli: &Cli, section: fn(&ParamsFile) -> S) -> anyhow::Result<()>
where S: Shape + Prompted + Default + std::fmt::Debug {
    let params = if let Some(path) = &cli.params {
        let file = ParamsFile::load(path)
            .with_context(|| format!("Failed to load parameters for {}",
                                     S::NAME))?;
        section(&file)
    } else if cli.defaults {
        S::default()
    } else {
        // Questions go to stderr so that the data can be piped.
        let parsed = input::read_params::<S, _, _>(io::stdin().lock(),
                                                   io::stderr())
            .context("Failed to read parameters from the console")?;
        if !parsed.diagnostics.is_empty() {
            info!("{} answer(s) replaced by the default value",
                  parsed.diagnostics.len());
        }
        parsed.value
    };
    debug!("{} parameters: {:?}", S::NAME, params);

    let s = params.sample();
    let bb = s.bounding_box();
    info!("{}: {} points, {} segments, \
           box [{:.3}, {:.3}] × [{:.3}, {:.3}] × [{:.3}, {:.3}]",
          S::NAME, s.len(), s.segment_count(),
          bb.xmin, bb.xmax, bb.ymin, bb.ymax, bb.zmin, bb.zmax);

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(
                || format!("Failed to create {}", path.display()))?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    write_sampling(&s, cli.format.unwrap_or(Format::Gnuplot), &mut out)
        .and_then(|()| out.flush())
        .context("Failed to write the sampling")?;
    Ok(())
}

fn write_sampling(s: &Sampling, format: Format, out: &mut impl Write)
                  -> io::Result<()> {
    match format {
        Format::Gnuplot => s.write(out),
        Format::Latex => s.latex().write(out),
        Format::Json => s.write_json(out),
    }
}

/// Console stand-in for the render window event loop: every word read
/// on stdin is a key press.  `q` or end of input quits.
fn run_layers() -> anyhow::Result<()> {
    let mut scene = Scene::default();
    info!("{} ({}x{}, {} layers)", scene.title, scene.width, scene.height,
          scene.layer_count);
    eprintln!("Press s, c or u then Enter to toggle the sphere, cone \
               or cube layer; q to quit.");
    scene.run_keys(io::stdin().lock(), BufWriter::new(io::stdout().lock()))
        .context("Failed to run the layers key loop")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(s: &Sampling, format: Format) -> String {
        let mut out = vec![];
        write_sampling(s, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn write_each_format() {
        let s = Sampling::from([[0., 0., 0.], [1., 2., 3.]]);
        assert_eq!(written(&s, Format::Gnuplot), "0e0 0e0 0e0\n1e0 2e0 3e0\n");
        let tex = written(&s, Format::Latex);
        assert!(tex.contains("\\begin{pgfscope}"));
        assert_eq!(tex.matches("\\pgfpathlineto").count(), 1);
        let v: serde_json::Value =
            serde_json::from_str(&written(&s, Format::Json)).unwrap();
        assert_eq!(v["lines"], serde_json::json!([[0, 1]]));

        let knot = Trefoil { n: 3, ..Default::default() }.sample();
        assert_eq!(written(&knot, Format::Gnuplot).lines().count(), 3);
    }

    #[test]
    fn format_defaults_to_gnuplot() {
        let cli = Cli::try_parse_from(["curves", "sine"]).unwrap();
        assert_eq!(cli.format, None);
        let cli = Cli::try_parse_from(["curves", "spiral", "--format", "json"])
            .unwrap();
        assert_eq!(cli.format, Some(Format::Json));
    }

    #[test]
    fn layers_reports_ignored_flags() {
        let cli = Cli::try_parse_from(["curves", "layers"]).unwrap();
        assert!(ignored_flags(&cli).is_empty());
        let cli = Cli::try_parse_from(["curves", "layers", "--format", "latex",
                                       "-o", "out.tex", "--defaults"])
            .unwrap();
        assert_eq!(ignored_flags(&cli),
                   vec!["--defaults", "--format", "--output"]);
    }
}
