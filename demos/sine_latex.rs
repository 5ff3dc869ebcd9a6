use std::{error::Error,
          fs::File,
          io::Write};
use parametric_curves::shapes::{Shape, SineWave};

fn main() -> Result<(), Box<dyn Error>> {
    let path = "/tmp/sine_wave.tex";
    let mut fh = File::create(path)?;
    write!(fh, "\\documentclass[12pt,a4paper]{{article}}\n\
                \\usepackage{{tikz}}\n\
                \\begin{{document}}\n\
                \\begin{{tikzpicture}}[x=0.5cm, y=1cm]\n")?;
    let s = SineWave { start_deg: -720., end_deg: 720., n: 2000 }.sample();
    println!("Run \"pdflatex {}\" to draw a sine wave with {} points.",
             path, s.len());
    s.latex().color(rgb::RGB8 { r: 0, g: 90, b: 200 }).write(&mut fh)?;
    write!(fh, "\\end{{tikzpicture}}\n\
                \\end{{document}}")?;
    Ok(())
}
